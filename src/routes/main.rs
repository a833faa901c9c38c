use actix_web::{Responder, get, web};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::repository::SiteRepository;
use crate::routes::{base_context, render_template};
use crate::services::main::{load_about_page, load_contact_page, load_home_page};

#[get("/")]
pub async fn show_index(
    repo: web::Data<SiteRepository>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let data = load_home_page(repo.get_ref()).await;
    let mut context = base_context(&server_config, "index");
    context.insert("home", &data);
    render_template(&tera, "main/index.html", &context)
}

#[get("/about")]
pub async fn show_about(
    repo: web::Data<SiteRepository>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let data = load_about_page(repo.get_ref()).await;
    let mut context = base_context(&server_config, "about");
    context.insert("about", &data);
    render_template(&tera, "main/about.html", &context)
}

#[get("/contact")]
pub async fn show_contact(
    repo: web::Data<SiteRepository>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let data = load_contact_page(repo.get_ref()).await;
    let mut context = base_context(&server_config, "contact");
    context.insert("contact", &data);
    render_template(&tera, "main/contact.html", &context)
}
