//! Content fetcher for the public content API.
//!
//! [`ContentSource`] is the transport seam (one JSON GET); [`ContentRepository`]
//! layers URL construction, typed decoding and failure normalization on top of
//! it so that callers always receive a [`FetchOutcome`].

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::catalog::CatalogConfig;
use crate::domain::page::ListPage;
use crate::domain::types::{PageSize, ResourceKey};
use crate::repository::endpoint::ApiBase;
use crate::repository::errors::{FetchError, FetchResult};
use crate::repository::outcome::FetchOutcome;

pub mod endpoint;
pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod outcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based page index.
    pub page: usize,
    pub size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            size: PageSize::DEFAULT.get(),
        }
    }
}

/// Filters and page position of one list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: BTreeMap<String, String>,
    pub pagination: Pagination,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter; blank values are dropped rather than sent empty.
    pub fn filter(mut self, name: impl Into<String>, value: impl AsRef<str>) -> Self {
        let value = value.as_ref().trim();
        if !value.is_empty() {
            self.filters.insert(name.into(), value.to_string());
        }
        self
    }

    pub fn paginate(mut self, page: usize, size: usize) -> Self {
        self.pagination = Pagination { page, size };
        self
    }

    pub fn filter_value(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(String::as_str)
    }
}

/// Issues a single JSON GET request.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn get_json(&self, url: &Url) -> FetchResult<Value>;
}

/// Typed access to the content API that never propagates transport errors.
#[derive(Clone, Debug)]
pub struct ContentRepository<S> {
    source: S,
    api: ApiBase,
}

/// Repository used by the running site.
pub type SiteRepository = ContentRepository<http::HttpContentSource>;

impl<S: ContentSource> ContentRepository<S> {
    pub fn new(source: S, api: ApiBase) -> Self {
        Self { source, api }
    }

    pub fn api(&self) -> &ApiBase {
        &self.api
    }

    async fn get_value(&self, url: FetchResult<Url>) -> (String, FetchResult<Value>) {
        match url {
            Ok(url) => {
                let result = self.source.get_json(&url).await;
                (url.to_string(), result)
            }
            Err(err) => ("<unbuildable url>".to_string(), Err(err)),
        }
    }

    fn settle<T>(target: &str, result: FetchResult<T>) -> FetchOutcome<T> {
        if let Err(err) = &result {
            log::warn!("Fetch of {target} failed ({}): {err}", err.kind().as_str());
        }
        result.into()
    }

    /// Fetches one page of a catalog list.
    ///
    /// Endpoints answering with a bare array are sliced to the requested page.
    pub async fn fetch_list<T>(
        &self,
        config: &CatalogConfig,
        query: &ListQuery,
    ) -> FetchOutcome<ListPage<T>>
    where
        T: DeserializeOwned,
    {
        let (target, value) = self.get_value(self.api.list_url(config, query)).await;
        let result = value.and_then(|value| {
            if value.is_array() {
                let items: Vec<T> = serde_json::from_value(value)?;
                Ok(ListPage::from_unpaged(
                    items,
                    query.pagination.page,
                    query.pagination.size,
                ))
            } else {
                Ok(serde_json::from_value::<ListPage<T>>(value)?)
            }
        });
        Self::settle(&target, result)
    }

    /// Fetches a single catalog resource. A 404 or a `null` body is reported
    /// as [`FetchError::NotFound`].
    pub async fn fetch_one<T>(&self, config: &CatalogConfig, key: &ResourceKey) -> FetchOutcome<T>
    where
        T: DeserializeOwned,
    {
        let url = self.api.detail_url(config, key);
        self.fetch_entity(url).await
    }

    /// Fetches a singleton document such as `home` or `contact`.
    pub async fn fetch_document<T>(&self, path: &str) -> FetchOutcome<T>
    where
        T: DeserializeOwned,
    {
        let url = self.api.resource_url(path);
        self.fetch_entity(url).await
    }

    /// Fetches an unpaged collection (filter metadata, recent posts).
    /// Paged responses are accepted and flattened to their items.
    pub async fn fetch_collection<T>(&self, path: &str) -> FetchOutcome<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let (target, value) = self.get_value(self.api.resource_url(path)).await;
        let result = value
            .and_then(|value| Ok(serde_json::from_value::<ListPage<T>>(value)?))
            .map(|page| page.items);
        Self::settle(&target, result)
    }

    async fn fetch_entity<T>(&self, url: FetchResult<Url>) -> FetchOutcome<T>
    where
        T: DeserializeOwned,
    {
        let (target, value) = self.get_value(url).await;
        let result = match value {
            Ok(Value::Null) | Err(FetchError::Status(404)) => Err(FetchError::NotFound),
            Ok(value) => serde_json::from_value::<T>(value).map_err(FetchError::from),
            Err(err) => Err(err),
        };
        Self::settle(&target, result)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::catalog::{Catalogs, ResourceKind};
    use crate::repository::mock::MockContentApi;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Card {
        id: u64,
    }

    fn repo(source: MockContentApi) -> ContentRepository<MockContentApi> {
        ContentRepository::new(source, ApiBase::new("http://backend").unwrap())
    }

    #[test]
    fn list_query_drops_blank_filters() {
        let query = ListQuery::new()
            .filter("search", "  motor ")
            .filter("brand", "   ")
            .paginate(3, 6);
        assert_eq!(query.filter_value("search"), Some("motor"));
        assert_eq!(query.filter_value("brand"), None);
        assert_eq!(query.pagination, Pagination { page: 3, size: 6 });
    }

    #[actix_web::test]
    async fn fetch_list_decodes_paged_payload() {
        let mut source = MockContentApi::new();
        source
            .expect_get_json()
            .withf(|url| url.path() == "/api/public/products" && url.query() == Some("page=0&size=2"))
            .times(1)
            .returning(|_| {
                Ok(json!({
                    "content": [{"id": 1}, {"id": 2}],
                    "number": 0,
                    "size": 2,
                    "totalElements": 5,
                    "totalPages": 3,
                    "first": true,
                    "last": false
                }))
            });

        let catalogs = Catalogs::default();
        let outcome = repo(source)
            .fetch_list::<Card>(
                catalogs.get(ResourceKind::Products),
                &ListQuery::new().paginate(0, 2),
            )
            .await;

        let page = outcome.into_page(2);
        assert_eq!(page.items, vec![Card { id: 1 }, Card { id: 2 }]);
        assert_eq!(page.total_pages, 3);
        assert!(page.is_first && !page.is_last);
    }

    #[actix_web::test]
    async fn fetch_list_slices_bare_arrays() {
        let mut source = MockContentApi::new();
        source
            .expect_get_json()
            .returning(|_| Ok(json!([{"id": 1}, {"id": 2}, {"id": 3}])));

        let catalogs = Catalogs::default();
        let page = repo(source)
            .fetch_list::<Card>(
                catalogs.get(ResourceKind::Divisions),
                &ListQuery::new().paginate(1, 2),
            )
            .await
            .into_page(2);

        assert_eq!(page.items, vec![Card { id: 3 }]);
        assert_eq!(page.total_pages, 2);
        assert!(page.is_last);
    }

    #[actix_web::test]
    async fn fetch_list_reports_decode_errors() {
        let mut source = MockContentApi::new();
        source
            .expect_get_json()
            .returning(|_| Ok(json!({"content": "not a list"})));

        let catalogs = Catalogs::default();
        let outcome = repo(source)
            .fetch_list::<Card>(catalogs.get(ResourceKind::News), &ListQuery::new())
            .await;
        assert!(matches!(outcome, FetchOutcome::Failure(FetchError::Decode(_))));
    }

    #[actix_web::test]
    async fn fetch_one_maps_404_and_null_to_not_found() {
        let mut source = MockContentApi::new();
        source
            .expect_get_json()
            .withf(|url| url.path() == "/api/public/gallery/9")
            .returning(|_| Err(FetchError::Status(404)));
        source
            .expect_get_json()
            .withf(|url| url.path() == "/api/public/gallery/10")
            .returning(|_| Ok(Value::Null));

        let catalogs = Catalogs::default();
        let repo = repo(source);
        let config = catalogs.get(ResourceKind::Gallery);

        assert_eq!(
            repo.fetch_one::<Card>(config, &ResourceKey::Id(9)).await,
            FetchOutcome::Failure(FetchError::NotFound)
        );
        assert_eq!(
            repo.fetch_one::<Card>(config, &ResourceKey::Id(10)).await,
            FetchOutcome::Failure(FetchError::NotFound)
        );
    }

    #[actix_web::test]
    async fn fetch_one_keeps_server_errors_distinct() {
        let mut source = MockContentApi::new();
        source
            .expect_get_json()
            .returning(|_| Err(FetchError::Status(503)));

        let catalogs = Catalogs::default();
        let outcome = repo(source)
            .fetch_one::<Card>(catalogs.get(ResourceKind::News), &ResourceKey::Id(1))
            .await;
        assert_eq!(outcome, FetchOutcome::Failure(FetchError::Status(503)));
        assert_eq!(outcome.ok(), None);
    }

    #[actix_web::test]
    async fn fetch_collection_accepts_arrays_and_degrades_to_empty() {
        let mut source = MockContentApi::new();
        source
            .expect_get_json()
            .withf(|url| url.path() == "/api/public/brands")
            .returning(|_| Ok(json!([{"id": 4}])));
        source
            .expect_get_json()
            .withf(|url| url.path() == "/api/public/categories")
            .returning(|_| Err(FetchError::Network("connection reset".into())));

        let repo = repo(source);
        let brands = repo.fetch_collection::<Card>("brands").await;
        let categories = repo.fetch_collection::<Card>("categories").await;

        assert_eq!(brands.unwrap_or_default(), vec![Card { id: 4 }]);
        assert!(categories.unwrap_or_default().is_empty());
    }
}
