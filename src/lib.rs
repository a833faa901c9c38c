//! Server-rendered marketing site backed by a public content API.
//!
//! The content layer (`domain`, `catalog`, `repository`, `state`,
//! `pagination`) only needs the `data` feature; the Actix-web application
//! lives behind `server`.

pub mod catalog;
pub mod domain;
pub mod pagination;
pub mod repository;
pub mod state;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::catalog::Catalogs;
    use crate::domain::types::PageSize;
    use crate::models::config::ServerConfig;
    use crate::repository::ContentRepository;
    use crate::repository::endpoint::ApiBase;
    use crate::repository::http::HttpContentSource;
    use crate::routes::{build_tera, configure, not_found_page};

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let source = HttpContentSource::new(server_config.request_timeout())
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        let api = ApiBase::new(&server_config.api_base_url)
            .map_err(|e| std::io::Error::other(format!("api_base_url: {e}")))?;
        let repo = ContentRepository::new(source, api);

        let page_size = PageSize::new(server_config.page_size)
            .map_err(|e| std::io::Error::other(format!("Invalid page_size: {e}")))?;
        let catalogs = Catalogs::standard(page_size);

        let tera = build_tera(&server_config.templates_dir, server_config.media_base())
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        log::info!(
            "Serving {} on {}:{} with content from {}",
            server_config.domain,
            server_config.address,
            server_config.port,
            repo.api().root()
        );

        let bind_address = (server_config.address.clone(), server_config.port);
        let assets_dir = server_config.assets_dir.clone();

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", &assets_dir))
                .configure(configure)
                .default_service(web::to(not_found_page))
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(catalogs.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
