//! Actix-web handlers and the helpers they share.

use std::collections::HashMap;

use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use tera::{Context, Tera, Value};

use crate::dto::{MediaUrls, format_date};
use crate::models::config::ServerConfig;
use crate::services::ServiceError;

pub mod catalog;
pub mod detail;
pub mod main;

/// Registers every page route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(main::show_index)
        .service(main::show_about)
        .service(main::show_contact)
        .service(catalog::show_products)
        .service(catalog::show_blogs)
        .service(catalog::show_divisions)
        .service(catalog::show_news)
        .service(catalog::show_gallery)
        .service(detail::show_product)
        .service(detail::show_blog)
        .service(detail::show_division)
        .service(detail::show_news_item)
        .service(detail::show_gallery_item);
}

/// Sends requests with an unparseable query string back to the bare path.
fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected query string for {}: {err}", req.path());
    InternalError::from_response(err, redirect(req.path())).into()
}

/// Loads the templates and registers the `media` and `long_date` filters.
pub fn build_tera(templates_dir: &str, media_base: &str) -> tera::Result<Tera> {
    let mut tera = Tera::new(templates_dir)?;
    tera.register_filter("media", MediaFilter(MediaUrls::new(media_base)));
    tera.register_filter("long_date", long_date);
    Ok(tera)
}

struct MediaFilter(MediaUrls);

impl tera::Filter for MediaFilter {
    fn filter(&self, value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
        match value {
            Value::String(path) => Ok(Value::String(self.0.resolve(path))),
            Value::Null => Ok(Value::String(String::new())),
            other => Err(tera::Error::msg(format!(
                "`media` expects an image path, got {other}"
            ))),
        }
    }
}

fn long_date(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    match value {
        Value::String(raw) => Ok(Value::String(format_date(raw))),
        Value::Null => Ok(Value::String(String::new())),
        other => Ok(Value::String(other.to_string())),
    }
}

/// Context shared by every page.
pub fn base_context(server_config: &ServerConfig, current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("site_name", &server_config.site_name);
    context.insert("site_url", &server_config.site_url);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// The 404 page.
pub fn not_found(tera: &Tera, server_config: &ServerConfig) -> HttpResponse {
    let context = base_context(server_config, "not_found");
    match tera.render("errors/not_found.html", &context) {
        Ok(body) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render the not found page: {err:?}");
            HttpResponse::NotFound().finish()
        }
    }
}

/// Maps a service failure to a response. Rejected query strings send the
/// visitor back to `fallback`.
pub fn service_error_response(
    err: ServiceError,
    tera: &Tera,
    server_config: &ServerConfig,
    fallback: &str,
) -> HttpResponse {
    match err {
        ServiceError::NotFound => not_found(tera, server_config),
        ServiceError::Form(message) => {
            log::warn!("Rejected request, redirecting to {fallback}: {message}");
            redirect(fallback)
        }
    }
}

/// Default service for unknown paths.
pub async fn not_found_page(
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> HttpResponse {
    not_found(&tera, &server_config)
}
