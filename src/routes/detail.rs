use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use tera::Tera;

use crate::catalog::{CatalogConfig, Catalogs, ResourceKind};
use crate::models::config::ServerConfig;
use crate::repository::SiteRepository;
use crate::routes::{base_context, render_template, service_error_response};
use crate::services::ServiceResult;
use crate::services::detail::{
    load_blog, load_division, load_gallery_item, load_news_item, load_product,
};

fn render_detail<T: Serialize>(
    result: ServiceResult<T>,
    catalog: &CatalogConfig,
    template: &str,
    tera: &Tera,
    server_config: &ServerConfig,
) -> HttpResponse {
    match result {
        Ok(detail) => {
            let mut context = base_context(server_config, catalog.kind.as_str());
            context.insert("back_url", catalog.site_path);
            context.insert("back_title", catalog.title);
            context.insert("detail", &detail);
            render_template(tera, template, &context)
        }
        Err(err) => service_error_response(err, tera, server_config, catalog.site_path),
    }
}

#[get("/products/{id}")]
pub async fn show_product(
    id: web::Path<String>,
    repo: web::Data<SiteRepository>,
    catalogs: web::Data<Catalogs>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let catalog = catalogs.get(ResourceKind::Products);
    let result = load_product(repo.get_ref(), catalog, &id).await;
    render_detail(result, catalog, "detail/product.html", &tera, &server_config)
}

#[get("/blogs/{slug}")]
pub async fn show_blog(
    slug: web::Path<String>,
    repo: web::Data<SiteRepository>,
    catalogs: web::Data<Catalogs>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let catalog = catalogs.get(ResourceKind::Blogs);
    let result = load_blog(repo.get_ref(), catalog, &slug, &server_config.site_url).await;
    render_detail(result, catalog, "detail/blog.html", &tera, &server_config)
}

#[get("/divisions/{slug}")]
pub async fn show_division(
    slug: web::Path<String>,
    repo: web::Data<SiteRepository>,
    catalogs: web::Data<Catalogs>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let catalog = catalogs.get(ResourceKind::Divisions);
    let result = load_division(repo.get_ref(), catalog, &slug).await;
    render_detail(result, catalog, "detail/division.html", &tera, &server_config)
}

#[get("/news/{id}")]
pub async fn show_news_item(
    id: web::Path<String>,
    repo: web::Data<SiteRepository>,
    catalogs: web::Data<Catalogs>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let catalog = catalogs.get(ResourceKind::News);
    let result = load_news_item(repo.get_ref(), catalog, &id).await;
    render_detail(result, catalog, "detail/news.html", &tera, &server_config)
}

#[get("/gallery/{id}")]
pub async fn show_gallery_item(
    id: web::Path<String>,
    repo: web::Data<SiteRepository>,
    catalogs: web::Data<Catalogs>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let catalog = catalogs.get(ResourceKind::Gallery);
    let result = load_gallery_item(repo.get_ref(), catalog, &id).await;
    render_detail(result, catalog, "detail/gallery.html", &tera, &server_config)
}
