use serde::Serialize;
use url::form_urlencoded;

use crate::domain::blog::Blog;
use crate::domain::division::{Division, ResponsiblePerson, SubDivision};
use crate::domain::gallery::GalleryItem;
use crate::domain::news::NewsItem;
use crate::domain::product::Product;
use crate::dto::SafeHtml;

/// Outbound share targets for a detail page.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ShareLinks {
    /// Canonical URL, used by the copy-link button.
    pub url: String,
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
}

impl ShareLinks {
    pub fn new(site_url: &str, path: &str, title: &str) -> Self {
        let url = format!(
            "{}/{}",
            site_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let twitter = form_urlencoded::Serializer::new(String::new())
            .append_pair("text", title)
            .append_pair("url", &url)
            .finish();
        let shared = form_urlencoded::Serializer::new(String::new())
            .append_pair("u", &url)
            .finish();
        let linkedin = form_urlencoded::Serializer::new(String::new())
            .append_pair("url", &url)
            .finish();

        Self {
            twitter: format!("https://twitter.com/intent/tweet?{twitter}"),
            facebook: format!("https://www.facebook.com/sharer/sharer.php?{shared}"),
            linkedin: format!("https://www.linkedin.com/sharing/share-offsite/?{linkedin}"),
            url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductDetail {
    pub product: Product,
    /// Non-blank image paths in display order.
    pub images: Vec<String>,
}

impl From<Product> for ProductDetail {
    fn from(product: Product) -> Self {
        let images = product.images().into_iter().map(str::to_string).collect();
        Self { product, images }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogDetail {
    pub blog: Blog,
    pub published: String,
    pub reading_minutes: usize,
    pub body: SafeHtml,
    pub related: Vec<Blog>,
    pub share: ShareLinks,
}

/// Whole minutes at 200 words per minute, at least one.
pub fn reading_minutes(text: &str) -> usize {
    text.split_whitespace().count().div_ceil(200).max(1)
}

/// Contact card for a division's responsible person.
#[derive(Debug, Serialize)]
pub struct PersonContact {
    pub person: ResponsiblePerson,
    /// `https://wa.me/{digits}` when a WhatsApp number is set.
    pub whatsapp_url: Option<String>,
}

impl From<ResponsiblePerson> for PersonContact {
    fn from(person: ResponsiblePerson) -> Self {
        let whatsapp_url = whatsapp_link(&person.whats_app_number);
        Self {
            person,
            whatsapp_url,
        }
    }
}

fn whatsapp_link(number: &str) -> Option<String> {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    (!digits.is_empty()).then(|| format!("https://wa.me/{digits}"))
}

#[derive(Debug, Serialize)]
pub struct SubDivisionView {
    pub sub: SubDivision,
    pub people: Vec<PersonContact>,
}

impl From<SubDivision> for SubDivisionView {
    fn from(mut sub: SubDivision) -> Self {
        let people = std::mem::take(&mut sub.responsible_persons)
            .into_iter()
            .map(PersonContact::from)
            .collect();
        Self { sub, people }
    }
}

#[derive(Debug, Serialize)]
pub struct DivisionDetail {
    pub division: Division,
    pub description: SafeHtml,
    pub sub_divisions: Vec<SubDivisionView>,
}

impl From<Division> for DivisionDetail {
    fn from(mut division: Division) -> Self {
        let description = division
            .basic_info
            .as_ref()
            .map(|info| SafeHtml::from_text(&info.long_description))
            .unwrap_or_default();
        let sub_divisions = std::mem::take(&mut division.sub_divisions)
            .into_iter()
            .map(SubDivisionView::from)
            .collect();
        Self {
            division,
            description,
            sub_divisions,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NewsDetail {
    pub item: NewsItem,
    pub published: String,
    pub updated: String,
    pub body: SafeHtml,
}

impl From<NewsItem> for NewsDetail {
    fn from(item: NewsItem) -> Self {
        let body = item
            .content
            .as_deref()
            .map(SafeHtml::clean)
            .unwrap_or_default();
        Self {
            published: super::format_date(&item.created_at),
            updated: super::format_date(&item.updated_at),
            body,
            item,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GalleryDetail {
    pub item: GalleryItem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_links_encode_title_and_url() {
        let share = ShareLinks::new("https://metro.example/", "/blogs/spring-launch", "Spring & Co");
        assert_eq!(share.url, "https://metro.example/blogs/spring-launch");
        assert_eq!(
            share.twitter,
            "https://twitter.com/intent/tweet?text=Spring+%26+Co&url=https%3A%2F%2Fmetro.example%2Fblogs%2Fspring-launch"
        );
        assert!(share.facebook.ends_with("u=https%3A%2F%2Fmetro.example%2Fblogs%2Fspring-launch"));
    }

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(reading_minutes(""), 1);
        assert_eq!(reading_minutes(&"word ".repeat(200)), 1);
        assert_eq!(reading_minutes(&"word ".repeat(201)), 2);
    }

    #[test]
    fn product_detail_lists_present_images() {
        let product = Product {
            image_url1: "/a.png".into(),
            image_url3: "/c.png".into(),
            ..Default::default()
        };
        let detail = ProductDetail::from(product);
        assert_eq!(detail.images, vec!["/a.png", "/c.png"]);
    }

    #[test]
    fn news_content_is_sanitized() {
        let item = NewsItem {
            content: Some("<p>Opening<script>x()</script></p>".into()),
            created_at: "2026-10-18".into(),
            ..Default::default()
        };
        let detail = NewsDetail::from(item);
        assert_eq!(detail.body.as_str(), "<p>Opening</p>");
        assert_eq!(detail.published, "October 18, 2026");
        assert_eq!(detail.updated, "");
    }

    #[test]
    fn responsible_people_get_whatsapp_links() {
        let division = Division {
            sub_divisions: vec![SubDivision {
                sub_divisions_name: "Pumps".into(),
                responsible_persons: vec![
                    ResponsiblePerson {
                        name: "Ann".into(),
                        whats_app_number: "+880 (17) 1234-5678".into(),
                        v_card: "/uploads/ann.vcf".into(),
                        ..ResponsiblePerson::default()
                    },
                    ResponsiblePerson {
                        name: "Bob".into(),
                        whats_app_number: " - ".into(),
                        ..ResponsiblePerson::default()
                    },
                ],
                ..SubDivision::default()
            }],
            ..Division::default()
        };

        let detail = DivisionDetail::from(division);
        let people = &detail.sub_divisions[0].people;
        assert_eq!(detail.sub_divisions[0].sub.sub_divisions_name, "Pumps");
        assert_eq!(
            people[0].whatsapp_url.as_deref(),
            Some("https://wa.me/8801712345678")
        );
        assert_eq!(people[0].person.v_card, "/uploads/ann.vcf");
        assert_eq!(people[1].whatsapp_url, None);
    }
}
