//! Services backing the catalog list pages.

use futures_util::future::join;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::catalog::{CatalogConfig, ResourceKind};
use crate::domain::page::ListPage;
use crate::domain::product::{Brand, Category};
use crate::dto::catalog::{CatalogPageData, FilterOptions};
use crate::forms::FormError;
use crate::forms::catalog::ListParamsForm;
use crate::pagination::Paginated;
use crate::repository::{ContentRepository, ContentSource};
use crate::services::ServiceResult;
use crate::state::{ListState, ListView};

/// Loads one page of a catalog list together with its filter options.
///
/// The list and the filter metadata are fetched concurrently. Fetch failures
/// degrade to an empty page or empty option lists; only an invalid query
/// string is reported as an error.
pub async fn load_catalog_page<S, T>(
    repo: &ContentRepository<S>,
    config: &CatalogConfig,
    form: ListParamsForm,
) -> ServiceResult<CatalogPageData<T>>
where
    S: ContentSource,
    T: DeserializeOwned,
{
    form.validate().map_err(FormError::from)?;
    let state = form.into_state(config);

    let ((state, page), options) = join(
        fetch_page::<S, T>(repo, config, state),
        load_filter_options(repo, config.kind),
    )
    .await;

    let items = Paginated::new(page, &state, config.site_path);
    Ok(CatalogPageData::new(config, &state, items, &options))
}

/// Fetches the page selected by `state` through a [`ListView`]. A request
/// past the last page is retried once for the clamped position.
async fn fetch_page<S, T>(
    repo: &ContentRepository<S>,
    config: &CatalogConfig,
    state: ListState,
) -> (ListState, ListPage<T>)
where
    S: ContentSource,
    T: DeserializeOwned,
{
    let page_size = config.page_size.get();
    let requested = state.page_index();
    let mut view = ListView::new(state, page_size);

    // Requests are issued one after another here, so each result commits.
    let (ticket, query) = view.request();
    let page = repo.fetch_list(config, &query).await.into_page(page_size);
    let committed = view.commit(ticket, page);

    if committed
        && view.state().page_index() < requested
        && view.page().items.is_empty()
        && view.page().total_pages > 0
    {
        log::debug!(
            "Page {requested} of {} is past the end, showing page {}",
            config.site_path,
            view.state().page_index()
        );
        let (ticket, query) = view.request();
        let page = repo.fetch_list(config, &query).await.into_page(page_size);
        if !view.commit(ticket, page) {
            log::warn!("Discarded the clamped page of {}", config.site_path);
        }
    }

    view.into_parts()
}

/// Values for the select filters of `kind`.
async fn load_filter_options<S>(repo: &ContentRepository<S>, kind: ResourceKind) -> FilterOptions
where
    S: ContentSource,
{
    let mut options = FilterOptions::new();
    match kind {
        ResourceKind::Products => {
            let (brands, categories) = join(
                repo.fetch_collection::<Brand>("brands"),
                repo.fetch_collection::<Category>("categories"),
            )
            .await;
            options.insert(
                "brand",
                brands
                    .unwrap_or_default()
                    .into_iter()
                    .map(|brand| brand.name)
                    .collect(),
            );
            options.insert(
                "category",
                categories
                    .unwrap_or_default()
                    .into_iter()
                    .map(|category| category.name)
                    .collect(),
            );
        }
        ResourceKind::Blogs => {
            let divisions = repo.fetch_collection::<String>("blogs/divisions").await;
            options.insert("division", divisions.unwrap_or_default());
        }
        ResourceKind::Divisions | ResourceKind::News | ResourceKind::Gallery => {}
    }
    options
}
