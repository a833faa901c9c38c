use serde::Serialize;

use crate::domain::company::{AboutUs, ContactInfo, HomeContent, ManagementMember, Milestone};

/// Data required to render the home page.
#[derive(Debug, Default, Serialize)]
pub struct HomePageData {
    pub content: HomeContent,
    /// Whether `content` came from the backend or is the empty fallback.
    pub available: bool,
}

/// Data required to render the about page.
#[derive(Debug, Default, Serialize)]
pub struct AboutPageData {
    pub about: Option<AboutUs>,
    pub team: Vec<ManagementMember>,
    pub milestones: Vec<Milestone>,
}

impl From<Option<AboutUs>> for AboutPageData {
    fn from(about: Option<AboutUs>) -> Self {
        let Some(about) = about else {
            return Self::default();
        };
        let mut milestones = about.milestones();
        milestones.sort_by_key(|milestone| milestone.year);
        Self {
            team: about.management_team(),
            milestones,
            about: Some(about),
        }
    }
}

/// Data required to render the contact page.
#[derive(Debug, Default, Serialize)]
pub struct ContactPageData {
    pub contact: Option<ContactInfo>,
}
