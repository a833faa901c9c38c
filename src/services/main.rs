//! Services for the home, about and contact pages.
//!
//! These documents are optional: a failed fetch renders the page with its
//! empty fallback instead of an error.

use crate::domain::company::{AboutUs, ContactInfo, HomeContent};
use crate::dto::main::{AboutPageData, ContactPageData, HomePageData};
use crate::repository::{ContentRepository, ContentSource};

pub async fn load_home_page<S: ContentSource>(repo: &ContentRepository<S>) -> HomePageData {
    match repo.fetch_document::<HomeContent>("home").await.ok() {
        Some(mut content) => {
            for rec in &mut content.recommendations {
                rec.rating = rec.stars();
            }
            HomePageData {
                content,
                available: true,
            }
        }
        None => HomePageData::default(),
    }
}

pub async fn load_about_page<S: ContentSource>(repo: &ContentRepository<S>) -> AboutPageData {
    repo.fetch_document::<AboutUs>("about").await.ok().into()
}

pub async fn load_contact_page<S: ContentSource>(
    repo: &ContentRepository<S>,
) -> ContactPageData {
    ContactPageData {
        contact: repo.fetch_document::<ContactInfo>("contact").await.ok(),
    }
}
