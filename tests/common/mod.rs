#![allow(dead_code)]

use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};
use serde_json::{Value, json};

use metro_site::catalog::Catalogs;
use metro_site::models::config::ServerConfig;
use metro_site::repository::endpoint::ApiBase;
use metro_site::repository::http::HttpContentSource;
use metro_site::repository::{ContentRepository, SiteRepository};
use metro_site::routes::{build_tera, configure, not_found_page};

pub fn server_config(api_base_url: &str) -> ServerConfig {
    ServerConfig {
        domain: "localhost".into(),
        address: "127.0.0.1".into(),
        port: 8080,
        templates_dir: "templates/**/*".into(),
        assets_dir: "./assets".into(),
        api_base_url: api_base_url.into(),
        media_base_url: None,
        site_url: "https://metro.example".into(),
        site_name: "Metro".into(),
        request_timeout_secs: 2,
        page_size: 12,
    }
}

pub fn site_repository(api_base_url: &str) -> SiteRepository {
    let source = HttpContentSource::new(Duration::from_secs(2)).expect("http client");
    let api = ApiBase::new(api_base_url).expect("api base url");
    ContentRepository::new(source, api)
}

/// The site application wired the same way `run` wires it.
pub fn site_app(
    api_base_url: &str,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody + use<>>,
        Error = Error,
        InitError = (),
    > + use<>,
> {
    let config = server_config(api_base_url);
    let tera = build_tera(&config.templates_dir, config.media_base()).expect("templates parse");
    App::new()
        .configure(configure)
        .default_service(web::to(not_found_page))
        .app_data(web::Data::new(tera))
        .app_data(web::Data::new(site_repository(api_base_url)))
        .app_data(web::Data::new(Catalogs::default()))
        .app_data(web::Data::new(config))
}

/// A Spring-style page of blog posts with ids `first..first + count`.
pub fn blog_page(first: u64, count: u64, number: usize, total_elements: usize) -> String {
    let total_pages = total_elements.div_ceil(12);
    let content: Vec<Value> = (first..first + count)
        .map(|id| {
            json!({
                "blogId": id,
                "topic": format!("Article {id}"),
                "slug": format!("article-{id}"),
                "division": "Electrical",
                "date": "2026-10-18",
                "imageUrl": format!("/uploads/blog-{id}.png"),
                "shortDescription": "Summary"
            })
        })
        .collect();
    json!({
        "content": content,
        "pageable": {"pageNumber": number, "pageSize": 12},
        "number": number,
        "size": 12,
        "totalElements": total_elements,
        "totalPages": total_pages,
        "first": number == 0,
        "last": number + 1 >= total_pages
    })
    .to_string()
}
