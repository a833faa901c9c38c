//! Request URL construction for the public content API.

use url::Url;

use crate::catalog::{CatalogConfig, DetailKey, EndpointLayout, FilterSpec};
use crate::domain::types::ResourceKey;
use crate::repository::ListQuery;
use crate::repository::errors::{ApiConfigError, FetchError, FetchResult};

const PUBLIC_API_PREFIX: &str = "api/public/";

/// Root of the public API, e.g. `http://localhost:8080/api/public/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBase {
    root: Url,
}

impl ApiBase {
    pub fn new(base_url: &str) -> Result<Self, ApiConfigError> {
        let mut base = Url::parse(base_url.trim())?;
        if base.cannot_be_a_base() {
            return Err(ApiConfigError::CannotBeABase(base_url.to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            root: base.join(PUBLIC_API_PREFIX)?,
        })
    }

    pub fn root(&self) -> &Url {
        &self.root
    }

    /// URL of a path relative to the API root (`brands`, `blogs/recent`).
    pub fn resource_url(&self, path: &str) -> FetchResult<Url> {
        Ok(self.root.join(path.trim_start_matches('/'))?)
    }

    /// URL of a single resource of the given catalog.
    pub fn detail_url(&self, config: &CatalogConfig, key: &ResourceKey) -> FetchResult<Url> {
        let mut url = self.resource_url(config.detail_path)?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| FetchError::InvalidUrl("api url cannot hold paths".into()))?;
            segments.pop_if_empty();
            if config.detail_key == DetailKey::Slug {
                segments.push("slug");
            }
            segments.push(&key.as_segment());
        }
        Ok(url)
    }

    /// URL of a list request.
    ///
    /// Only filters declared by `config` with non-blank values are sent;
    /// `page` and `size` are always present. With a segmented layout the
    /// path is chosen from the active filter set, which covers every
    /// combination of the segment and search filters.
    pub fn list_url(&self, config: &CatalogConfig, query: &ListQuery) -> FetchResult<Url> {
        let mut url = self.resource_url(config.list_path)?;
        let mut active: Vec<(&FilterSpec, &str)> = config
            .filters
            .iter()
            .filter_map(|spec| query.filter_value(spec.name).map(|value| (spec, value)))
            .collect();

        if let EndpointLayout::SegmentedSearch {
            segment_filter,
            segment_prefix,
            search_filter,
            search_suffix,
        } = &config.layout
        {
            let segment_value = active
                .iter()
                .position(|(spec, _)| spec.name == *segment_filter)
                .map(|index| active.remove(index).1);
            let searching = active.iter().any(|(spec, _)| spec.name == *search_filter);

            let mut segments = url
                .path_segments_mut()
                .map_err(|_| FetchError::InvalidUrl("api url cannot hold paths".into()))?;
            segments.pop_if_empty();
            if let Some(value) = segment_value {
                segments.push(segment_prefix).push(value);
            }
            if searching {
                segments.push(search_suffix);
            }
        }

        {
            let mut pairs = url.query_pairs_mut();
            for (spec, value) in active {
                pairs.append_pair(spec.param, value);
            }
            pairs.append_pair("page", &query.pagination.page.to_string());
            pairs.append_pair("size", &query.pagination.size.to_string());
        }
        Ok(url)
    }
}
