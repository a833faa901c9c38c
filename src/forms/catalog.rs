use serde::Deserialize;
use validator::Validate;

use crate::catalog::CatalogConfig;
use crate::state::ListState;

#[derive(Debug, Default, Deserialize, Validate)]
/// Query parameters of a catalog list page.
pub struct ListParamsForm {
    #[validate(length(max = 100))]
    pub search: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    #[validate(length(max = 100))]
    pub brand: Option<String>,
    #[validate(length(max = 100))]
    pub division: Option<String>,
    /// Zero-based page index; anything that is not a number means the first page.
    #[validate(length(max = 20))]
    pub page: Option<String>,
}

impl ListParamsForm {
    /// Submitted value of the filter called `name`.
    pub fn filter(&self, name: &str) -> Option<&str> {
        let value = match name {
            "search" => &self.search,
            "category" => &self.category,
            "brand" => &self.brand,
            "division" => &self.division,
            _ => return None,
        };
        value.as_deref()
    }

    pub fn page_index(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse().ok())
            .unwrap_or(0)
    }

    /// List state selected by this form. Filters the catalog does not declare
    /// are dropped and blank values are ignored.
    pub fn into_state(self, config: &CatalogConfig) -> ListState {
        let mut state = ListState::new();
        for spec in &config.filters {
            if let Some(value) = self.filter(spec.name) {
                state.apply_filter(spec.name, value);
            }
        }
        state.go_to_page(self.page_index());
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalogs, ResourceKind};

    fn form(query: &str) -> ListParamsForm {
        serde_html_form::from_str(query).unwrap()
    }

    #[test]
    fn accepts_regular_queries() {
        let form = form("division=Power+%26+Energy&search=motor&page=2&utm=x");
        assert!(form.validate().is_ok());
        assert_eq!(form.division.as_deref(), Some("Power & Energy"));
        assert_eq!(form.filter("search"), Some("motor"));
        assert_eq!(form.page_index(), 2);
    }

    #[test]
    fn rejects_oversized_filters() {
        let oversized = form(&format!("search={}", "a".repeat(101)));
        assert!(oversized.validate().is_err());
    }

    #[test]
    fn state_keeps_declared_filters_only() {
        let catalogs = Catalogs::default();
        let products = catalogs.get(ResourceKind::Products);

        let state = form("brand=Acme&division=X&page=-3&search=").into_state(products);
        assert_eq!(state.filter("brand"), Some("Acme"));
        assert_eq!(state.filter("division"), None);
        assert_eq!(state.filter("search"), None);
        assert_eq!(state.page_index(), 0);

        assert_eq!(form("page=two").into_state(products).page_index(), 0);
    }

    #[test]
    fn location_round_trips_through_the_form() {
        let catalogs = Catalogs::default();
        let blogs = catalogs.get(ResourceKind::Blogs);
        let mut state = ListState::new()
            .with_filter("division", "Power & Energy")
            .with_filter("search", "motor drives");
        state.go_to_page(2);

        let location = state.location("/blogs");
        let (path, query) = location.split_once('?').unwrap();
        assert_eq!(path, "/blogs");

        let restored = form(query).into_state(blogs);
        assert_eq!(restored, state);
    }
}
