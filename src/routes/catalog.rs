use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tera::Tera;

use crate::catalog::{Catalogs, ResourceKind};
use crate::domain::blog::Blog;
use crate::domain::division::Division;
use crate::domain::gallery::GalleryItem;
use crate::domain::news::NewsItem;
use crate::domain::product::Product;
use crate::forms::catalog::ListParamsForm;
use crate::models::config::ServerConfig;
use crate::repository::SiteRepository;
use crate::routes::{base_context, render_template, service_error_response};
use crate::services::catalog::load_catalog_page;

async fn render_list<T>(
    kind: ResourceKind,
    form: ListParamsForm,
    repo: &SiteRepository,
    catalogs: &Catalogs,
    tera: &Tera,
    server_config: &ServerConfig,
) -> HttpResponse
where
    T: DeserializeOwned + Serialize,
{
    let catalog = catalogs.get(kind);
    match load_catalog_page::<_, T>(repo, catalog, form).await {
        Ok(data) => {
            let mut context = base_context(server_config, kind.as_str());
            context.insert("page", &data);
            render_template(tera, "catalog/list.html", &context)
        }
        Err(err) => service_error_response(err, tera, server_config, catalog.site_path),
    }
}

#[get("/products")]
pub async fn show_products(
    params: web::Query<ListParamsForm>,
    repo: web::Data<SiteRepository>,
    catalogs: web::Data<Catalogs>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    render_list::<Product>(
        ResourceKind::Products,
        params.into_inner(),
        &repo,
        &catalogs,
        &tera,
        &server_config,
    )
    .await
}

#[get("/blogs")]
pub async fn show_blogs(
    params: web::Query<ListParamsForm>,
    repo: web::Data<SiteRepository>,
    catalogs: web::Data<Catalogs>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    render_list::<Blog>(
        ResourceKind::Blogs,
        params.into_inner(),
        &repo,
        &catalogs,
        &tera,
        &server_config,
    )
    .await
}

#[get("/divisions")]
pub async fn show_divisions(
    params: web::Query<ListParamsForm>,
    repo: web::Data<SiteRepository>,
    catalogs: web::Data<Catalogs>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    render_list::<Division>(
        ResourceKind::Divisions,
        params.into_inner(),
        &repo,
        &catalogs,
        &tera,
        &server_config,
    )
    .await
}

#[get("/news")]
pub async fn show_news(
    params: web::Query<ListParamsForm>,
    repo: web::Data<SiteRepository>,
    catalogs: web::Data<Catalogs>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    render_list::<NewsItem>(
        ResourceKind::News,
        params.into_inner(),
        &repo,
        &catalogs,
        &tera,
        &server_config,
    )
    .await
}

#[get("/gallery")]
pub async fn show_gallery(
    params: web::Query<ListParamsForm>,
    repo: web::Data<SiteRepository>,
    catalogs: web::Data<Catalogs>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    render_list::<GalleryItem>(
        ResourceKind::Gallery,
        params.into_inner(),
        &repo,
        &catalogs,
        &tera,
        &server_config,
    )
    .await
}
