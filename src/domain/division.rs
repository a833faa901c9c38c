use serde::{Deserialize, Serialize};

use crate::domain::types::nullable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Division {
    #[serde(deserialize_with = "nullable")]
    pub divisions_id: String,
    #[serde(deserialize_with = "nullable")]
    pub divisions_name: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    #[serde(deserialize_with = "nullable")]
    pub display_order: i32,
    pub basic_info: Option<BasicInfo>,
    #[serde(deserialize_with = "nullable")]
    pub sub_divisions: Vec<SubDivision>,
    pub contact_us: Option<DivisionContactUs>,
    #[serde(deserialize_with = "nullable")]
    pub created_at: String,
    #[serde(deserialize_with = "nullable")]
    pub updated_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicInfo {
    #[serde(deserialize_with = "nullable")]
    pub short_description: String,
    /// Plain-text body; blank lines separate paragraphs.
    #[serde(deserialize_with = "nullable")]
    pub long_description: String,
    #[serde(deserialize_with = "nullable")]
    pub banner_image: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SubDivision {
    #[serde(deserialize_with = "nullable")]
    pub sub_divisions_name: String,
    #[serde(deserialize_with = "nullable")]
    pub simple_divisions: String,
    #[serde(deserialize_with = "nullable")]
    pub key_features: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub global_partners: Vec<Partner>,
    #[serde(deserialize_with = "nullable")]
    pub brands: Vec<Partner>,
    #[serde(deserialize_with = "nullable")]
    pub sections: Vec<Section>,
    #[serde(deserialize_with = "nullable")]
    pub responsible_persons: Vec<ResponsiblePerson>,
}

/// Logo link used for partners and brands.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Partner {
    #[serde(deserialize_with = "nullable")]
    pub image_url: String,
    #[serde(deserialize_with = "nullable")]
    pub link: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Section {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponsiblePerson {
    #[serde(deserialize_with = "nullable")]
    pub profile_image: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub designation: String,
    #[serde(deserialize_with = "nullable")]
    pub contact_number: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub whats_app_number: String,
    #[serde(deserialize_with = "nullable")]
    pub v_card: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DivisionContactUs {
    pub location: Option<GeoLocation>,
    #[serde(deserialize_with = "nullable")]
    pub contacts: Vec<DivisionContact>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct GeoLocation {
    #[serde(deserialize_with = "nullable")]
    pub latitude: String,
    #[serde(deserialize_with = "nullable")]
    pub longitude: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DivisionContact {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub number: String,
}
