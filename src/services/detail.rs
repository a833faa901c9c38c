//! Services backing the single-resource pages.

use futures_util::future::join;
use serde::de::DeserializeOwned;

use crate::catalog::{CatalogConfig, DetailKey};
use crate::domain::blog::Blog;
use crate::domain::division::Division;
use crate::domain::gallery::GalleryItem;
use crate::domain::news::NewsItem;
use crate::domain::product::Product;
use crate::domain::types::{ResourceKey, TypeConstraintError};
use crate::dto::detail::{
    BlogDetail, DivisionDetail, GalleryDetail, NewsDetail, ProductDetail, ShareLinks,
    reading_minutes,
};
use crate::dto::{SafeHtml, format_date};
use crate::repository::{ContentRepository, ContentSource};
use crate::services::{ServiceError, ServiceResult};

/// Related posts shown under an article.
const RELATED_LIMIT: usize = 3;

/// Parses the path parameter according to the catalog's key style.
pub fn resolve_key(config: &CatalogConfig, raw: &str) -> ServiceResult<ResourceKey> {
    let key = match config.detail_key {
        DetailKey::Id => {
            let id = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| TypeConstraintError::NonPositiveId)?;
            ResourceKey::id(id)?
        }
        DetailKey::Slug => ResourceKey::slug(raw)?,
    };
    Ok(key)
}

/// Fetches one resource; every fetch failure is reported as not found.
async fn load_resource<S, T>(
    repo: &ContentRepository<S>,
    config: &CatalogConfig,
    raw_key: &str,
) -> ServiceResult<T>
where
    S: ContentSource,
    T: DeserializeOwned,
{
    let key = resolve_key(config, raw_key)?;
    repo.fetch_one::<T>(config, &key)
        .await
        .ok()
        .ok_or(ServiceError::NotFound)
}

pub async fn load_product<S: ContentSource>(
    repo: &ContentRepository<S>,
    config: &CatalogConfig,
    raw_key: &str,
) -> ServiceResult<ProductDetail> {
    let product: Product = load_resource(repo, config, raw_key).await?;
    Ok(product.into())
}

/// Loads an article and, concurrently, the recent posts it is related to.
pub async fn load_blog<S: ContentSource>(
    repo: &ContentRepository<S>,
    config: &CatalogConfig,
    raw_key: &str,
    site_url: &str,
) -> ServiceResult<BlogDetail> {
    let (blog, recent) = join(
        load_resource::<S, Blog>(repo, config, raw_key),
        repo.fetch_collection::<Blog>("blogs/recent"),
    )
    .await;
    let blog = blog?;
    let recent = recent.unwrap_or_default();

    let related = blog
        .related(&recent, RELATED_LIMIT)
        .into_iter()
        .cloned()
        .collect();
    let share = ShareLinks::new(
        site_url,
        &format!("{}/{}", config.site_path, blog.slug),
        &blog.topic,
    );

    Ok(BlogDetail {
        published: format_date(&blog.date),
        reading_minutes: reading_minutes(&blog.paragraph),
        body: SafeHtml::from_text(&blog.paragraph),
        related,
        share,
        blog,
    })
}

pub async fn load_division<S: ContentSource>(
    repo: &ContentRepository<S>,
    config: &CatalogConfig,
    raw_key: &str,
) -> ServiceResult<DivisionDetail> {
    let division: Division = load_resource(repo, config, raw_key).await?;
    Ok(division.into())
}

pub async fn load_news_item<S: ContentSource>(
    repo: &ContentRepository<S>,
    config: &CatalogConfig,
    raw_key: &str,
) -> ServiceResult<NewsDetail> {
    let item: NewsItem = load_resource(repo, config, raw_key).await?;
    Ok(item.into())
}

pub async fn load_gallery_item<S: ContentSource>(
    repo: &ContentRepository<S>,
    config: &CatalogConfig,
    raw_key: &str,
) -> ServiceResult<GalleryDetail> {
    let item: GalleryItem = load_resource(repo, config, raw_key).await?;
    Ok(GalleryDetail { item })
}
