//! Per-resource configuration of the catalog pages.
//!
//! Every list page (products, blogs, divisions, news, gallery) is driven by a
//! [`CatalogConfig`]: where the API lives, how filters reach the API, which
//! filters the page exposes and how large a page is. The list and detail
//! routes are generic over this record.

use serde::Serialize;

use crate::domain::types::PageSize;

/// Resource types rendered through the catalog templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Products,
    Blogs,
    Divisions,
    News,
    Gallery,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Products,
        ResourceKind::Blogs,
        ResourceKind::Divisions,
        ResourceKind::News,
        ResourceKind::Gallery,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Products => "products",
            ResourceKind::Blogs => "blogs",
            ResourceKind::Divisions => "divisions",
            ResourceKind::News => "news",
            ResourceKind::Gallery => "gallery",
        }
    }
}

/// How a filter is presented on the list page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterControl {
    /// Free-text box.
    Search,
    /// Drop-down fed by filter metadata.
    Select,
}

/// A filter exposed by a list page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    /// Name used in the site location (`?division=...`).
    pub name: &'static str,
    /// Name sent to the content API, which may differ (`search` → `keyword`).
    pub param: &'static str,
    pub label: &'static str,
    pub control: FilterControl,
}

impl FilterSpec {
    pub fn search(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            param: name,
            label,
            control: FilterControl::Search,
        }
    }

    pub fn select(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            param: name,
            label,
            control: FilterControl::Select,
        }
    }

    /// Overrides the API parameter name.
    pub fn param(mut self, param: &'static str) -> Self {
        self.param = param;
        self
    }
}

/// How active filters map onto API endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EndpointLayout {
    /// One path; every filter is a query parameter.
    QueryParams,
    /// One filter becomes a path segment (`/division/{value}`) and the search
    /// filter switches to a `/search` sub-path. Remaining filters, if any, are
    /// sent as query parameters.
    SegmentedSearch {
        segment_filter: &'static str,
        segment_prefix: &'static str,
        search_filter: &'static str,
        search_suffix: &'static str,
    },
}

/// How a single resource is addressed under its detail path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailKey {
    /// `{detail_path}/{id}`
    Id,
    /// `{detail_path}/slug/{slug}`
    Slug,
}

/// Configuration record for one catalog resource.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub kind: ResourceKind,
    pub title: &'static str,
    pub intro: &'static str,
    /// Noun used in result summaries ("Showing 12 of 30 articles").
    pub noun: &'static str,
    /// Site route of the list page.
    pub site_path: &'static str,
    /// API path of the list endpoint, relative to `/api/public/`.
    pub list_path: &'static str,
    /// API path prefix of single resources, relative to `/api/public/`.
    pub detail_path: &'static str,
    pub detail_key: DetailKey,
    pub layout: EndpointLayout,
    pub filters: Vec<FilterSpec>,
    pub page_size: PageSize,
}

impl CatalogConfig {
    pub fn builder(kind: ResourceKind) -> CatalogConfigBuilder {
        CatalogConfigBuilder::new(kind)
    }

    pub fn filter(&self, name: &str) -> Option<&FilterSpec> {
        self.filters.iter().find(|f| f.name == name)
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }
}

/// Builder for [`CatalogConfig`]; paths default to the resource name.
#[derive(Debug)]
pub struct CatalogConfigBuilder {
    config: CatalogConfig,
}

impl CatalogConfigBuilder {
    fn new(kind: ResourceKind) -> Self {
        let name = kind.as_str();
        Self {
            config: CatalogConfig {
                kind,
                title: name,
                intro: "",
                noun: name,
                site_path: "",
                list_path: name,
                detail_path: name,
                detail_key: DetailKey::Id,
                layout: EndpointLayout::QueryParams,
                filters: Vec::new(),
                page_size: PageSize::DEFAULT,
            },
        }
    }

    pub fn title(mut self, title: &'static str) -> Self {
        self.config.title = title;
        self
    }

    pub fn intro(mut self, intro: &'static str) -> Self {
        self.config.intro = intro;
        self
    }

    pub fn noun(mut self, noun: &'static str) -> Self {
        self.config.noun = noun;
        self
    }

    pub fn site_path(mut self, path: &'static str) -> Self {
        self.config.site_path = path;
        self
    }

    pub fn list_path(mut self, path: &'static str) -> Self {
        self.config.list_path = path;
        self
    }

    pub fn detail(mut self, path: &'static str, key: DetailKey) -> Self {
        self.config.detail_path = path;
        self.config.detail_key = key;
        self
    }

    pub fn layout(mut self, layout: EndpointLayout) -> Self {
        self.config.layout = layout;
        self
    }

    pub fn filter(mut self, filter: FilterSpec) -> Self {
        self.config.filters.push(filter);
        self
    }

    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.config.page_size = page_size;
        self
    }

    pub fn build(self) -> CatalogConfig {
        self.config
    }
}

/// The five catalog configurations served by the site.
#[derive(Clone, Debug)]
pub struct Catalogs {
    products: CatalogConfig,
    blogs: CatalogConfig,
    divisions: CatalogConfig,
    news: CatalogConfig,
    gallery: CatalogConfig,
}

impl Catalogs {
    /// Standard configuration sharing one page size across list pages.
    pub fn standard(page_size: PageSize) -> Self {
        Self {
            products: CatalogConfig::builder(ResourceKind::Products)
                .title("Our Products")
                .intro("Browse the equipment and solutions offered across our divisions.")
                .site_path("/products")
                .filter(FilterSpec::search("search", "Search products"))
                .filter(FilterSpec::select("category", "All Categories"))
                .filter(FilterSpec::select("brand", "All Brands"))
                .page_size(page_size)
                .build(),
            blogs: CatalogConfig::builder(ResourceKind::Blogs)
                .title("Blogs & Articles")
                .intro("Explore our latest blogs and articles covering marketing, advertising, and industry insights.")
                .noun("articles")
                .site_path("/blogs")
                .detail("blogs", DetailKey::Slug)
                .layout(EndpointLayout::SegmentedSearch {
                    segment_filter: "division",
                    segment_prefix: "division",
                    search_filter: "search",
                    search_suffix: "search",
                })
                .filter(FilterSpec::select("division", "All Divisions"))
                .filter(FilterSpec::search("search", "Search blogs").param("keyword"))
                .page_size(page_size)
                .build(),
            divisions: CatalogConfig::builder(ResourceKind::Divisions)
                .title("Our Divisions")
                .intro("Specialized business units delivering focused expertise.")
                .site_path("/divisions")
                .detail("divisions", DetailKey::Slug)
                .page_size(page_size)
                .build(),
            news: CatalogConfig::builder(ResourceKind::News)
                .title("News & Events")
                .intro("Stay up to date with our latest announcements.")
                .noun("stories")
                .site_path("/news")
                .list_path("news/active")
                .page_size(page_size)
                .build(),
            gallery: CatalogConfig::builder(ResourceKind::Gallery)
                .title("Gallery")
                .intro("Moments from our projects, events and teams.")
                .noun("photos")
                .site_path("/gallery")
                .page_size(page_size)
                .build(),
        }
    }

    pub fn get(&self, kind: ResourceKind) -> &CatalogConfig {
        match kind {
            ResourceKind::Products => &self.products,
            ResourceKind::Blogs => &self.blogs,
            ResourceKind::Divisions => &self.divisions,
            ResourceKind::News => &self.news,
            ResourceKind::Gallery => &self.gallery,
        }
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::standard(PageSize::DEFAULT)
    }
}
