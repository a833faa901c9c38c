use serde::{Deserialize, Serialize};

use crate::domain::types::nullable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub description2: String,
    #[serde(deserialize_with = "nullable")]
    pub capacity: String,
    #[serde(deserialize_with = "nullable")]
    pub price: f64,
    #[serde(deserialize_with = "nullable")]
    pub brand: String,
    #[serde(deserialize_with = "nullable")]
    pub category: String,
    #[serde(deserialize_with = "nullable")]
    pub warranty: String,
    #[serde(deserialize_with = "nullable")]
    pub responsible_person: String,
    #[serde(deserialize_with = "nullable")]
    pub image_url1: String,
    #[serde(deserialize_with = "nullable")]
    pub image_url2: String,
    #[serde(deserialize_with = "nullable")]
    pub image_url3: String,
    #[serde(deserialize_with = "nullable")]
    pub image_url4: String,
    #[serde(deserialize_with = "nullable")]
    pub image_url5: String,
}

impl Product {
    /// Non-empty image paths in display order.
    pub fn images(&self) -> Vec<&str> {
        [
            &self.image_url1,
            &self.image_url2,
            &self.image_url3,
            &self.image_url4,
            &self.image_url5,
        ]
        .into_iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
    }
}

/// Brand offered as a product filter option.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Brand {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

/// Category offered as a product filter option.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::page::ListPage;

    #[test]
    fn images_skip_blank_slots() {
        let product = Product {
            image_url1: "/uploads/a.png".into(),
            image_url3: "  ".into(),
            image_url4: "/uploads/d.png".into(),
            ..Product::default()
        };
        assert_eq!(product.images(), vec!["/uploads/a.png", "/uploads/d.png"]);
    }

    #[test]
    fn null_fields_decode_as_defaults() {
        let page: ListPage<Product> = serde_json::from_value(json!({
            "content": [{
                "id": 1,
                "name": "Pump",
                "price": null,
                "imageUrl1": "/a.png",
                "imageUrl2": null,
                "warranty": null
            }],
            "number": 0,
            "size": 12,
            "totalElements": 1,
            "totalPages": 1,
            "first": true,
            "last": true
        }))
        .unwrap();

        let product = &page.items[0];
        assert_eq!(product.name, "Pump");
        assert_eq!(product.warranty, "");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.images(), vec!["/a.png"]);
    }
}
