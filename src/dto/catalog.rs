use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{CatalogConfig, FilterControl, FilterSpec, ResourceKind};
use crate::pagination::Paginated;
use crate::state::ListState;

/// Values offered by select filters, keyed by filter name.
pub type FilterOptions = BTreeMap<&'static str, Vec<String>>;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    /// Location with this value applied (and the page reset).
    pub url: String,
    pub selected: bool,
}

/// A filter already applied that a search form must resubmit.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct FilterView {
    pub name: &'static str,
    pub label: &'static str,
    pub control: FilterControl,
    pub value: String,
    /// Location with this filter removed.
    pub clear_url: String,
    pub options: Vec<FilterOption>,
    pub hidden: Vec<HiddenField>,
}

impl FilterView {
    fn new(
        spec: &FilterSpec,
        state: &ListState,
        site_path: &str,
        options: &[String],
    ) -> Self {
        let value = state.filter(spec.name).unwrap_or_default().to_string();

        let mut values: Vec<&str> = options
            .iter()
            .map(|option| option.trim())
            .filter(|option| !option.is_empty())
            .collect();
        if spec.control == FilterControl::Select
            && !value.is_empty()
            && !values.contains(&value.as_str())
        {
            values.insert(0, value.as_str());
        }
        let mut seen = Vec::with_capacity(values.len());
        values.retain(|option| {
            let fresh = !seen.contains(option);
            seen.push(*option);
            fresh
        });

        let options = values
            .into_iter()
            .map(|option| FilterOption {
                value: option.to_string(),
                url: state.with_filter(spec.name, option).location(site_path),
                selected: option == value,
            })
            .collect();

        let hidden = state
            .filters()
            .iter()
            .filter(|(name, _)| name.as_str() != spec.name)
            .map(|(name, value)| HiddenField {
                name: name.clone(),
                value: value.clone(),
            })
            .collect();

        Self {
            name: spec.name,
            label: spec.label,
            control: spec.control,
            clear_url: state.with_filter(spec.name, "").location(site_path),
            value,
            options,
            hidden,
        }
    }
}

/// Data required to render `catalog/list.html`.
#[derive(Debug, Serialize)]
pub struct CatalogPageData<T> {
    pub kind: ResourceKind,
    pub title: &'static str,
    pub intro: &'static str,
    pub site_path: &'static str,
    pub items: Paginated<T>,
    pub filters: Vec<FilterView>,
    pub has_filters: bool,
    /// Location of the unfiltered first page.
    pub clear_url: String,
    pub summary: String,
    /// Hidden when there are no pages.
    pub indicator: Option<String>,
}

impl<T> CatalogPageData<T> {
    /// `state` must already have observed the page held by `items`.
    pub fn new(
        config: &CatalogConfig,
        state: &ListState,
        items: Paginated<T>,
        options: &FilterOptions,
    ) -> Self {
        let filters = config
            .filters
            .iter()
            .map(|spec| {
                let offered = options
                    .get(spec.name)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                FilterView::new(spec, state, config.site_path, offered)
            })
            .collect();

        Self {
            kind: config.kind,
            title: config.title,
            intro: config.intro,
            site_path: config.site_path,
            summary: summary(items.items.len(), items.total_elements, config.noun),
            indicator: items.indicator(),
            items,
            filters,
            has_filters: state.has_filters(),
            clear_url: state.cleared().location(config.site_path),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// "Showing 12 of 30 articles"
pub fn summary(shown: usize, total: usize, noun: &str) -> String {
    if total == 0 {
        format!("No {noun} found")
    } else {
        format!("Showing {shown} of {total} {noun}")
    }
}
