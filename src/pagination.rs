use serde::Serialize;

use crate::domain::page::ListPage;
use crate::state::ListState;

/// Page-number links shown at once.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Zero-based page indexes of a fixed-width window around `current_page`,
/// clamped to `[0, total_pages - 1]`. The window holds
/// `min(total_pages, max_visible)` entries and always contains the (clamped)
/// current page.
pub fn page_window(total_pages: usize, current_page: usize, max_visible: usize) -> Vec<usize> {
    if total_pages == 0 || max_visible == 0 {
        return vec![];
    }

    let last_page = total_pages - 1;
    let current_page = current_page.min(last_page);

    let mut start = current_page.saturating_sub(max_visible / 2);
    let end = (start + max_visible - 1).min(last_page);
    if end - start + 1 < max_visible {
        start = (end + 1).saturating_sub(max_visible);
    }

    (start..=end).collect()
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub index: usize,
    /// One-based label.
    pub number: usize,
    pub url: String,
    pub current: bool,
}

/// A fetched page plus everything the pagination controls need.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<PageLink>,
    /// One-based number of the current page.
    pub page: usize,
    pub total_pages: usize,
    pub total_elements: usize,
    pub previous_url: Option<String>,
    pub next_url: Option<String>,
}

impl<T> Paginated<T> {
    /// `state` must already have observed `page`.
    pub fn new(page: ListPage<T>, state: &ListState, site_path: &str) -> Self {
        let current = state.page_index();
        let pages = state
            .window()
            .into_iter()
            .filter_map(|index| {
                let url = state.page_location(index, site_path)?;
                Some(PageLink {
                    index,
                    number: index + 1,
                    url,
                    current: index == current,
                })
            })
            .collect();

        Self {
            items: page.items,
            pages,
            page: current + 1,
            total_pages: page.total_pages,
            total_elements: page.total_elements,
            previous_url: state.previous_location(site_path),
            next_url: state.next_location(site_path),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_pages == 0 || self.items.is_empty()
    }

    /// "Page 1 of 3"; `None` when there are no pages.
    pub fn indicator(&self) -> Option<String> {
        (self.total_pages > 0).then(|| format!("Page {} of {}", self.page, self.total_pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_has_fixed_width_and_contains_current() {
        for total in 0..12 {
            for current in 0..total.max(1) {
                let window = page_window(total, current, MAX_VISIBLE_PAGES);
                assert_eq!(window.len(), total.min(MAX_VISIBLE_PAGES));
                if total > 0 {
                    assert!(window.contains(&current));
                    assert!(window.iter().all(|&p| p < total));
                    assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
                }
            }
        }
    }

    #[test]
    fn window_centers_when_possible() {
        assert_eq!(page_window(10, 5, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(10, 0, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(page_window(10, 9, 5), vec![5, 6, 7, 8, 9]);
        assert_eq!(page_window(3, 1, 5), vec![0, 1, 2]);
    }

    #[test]
    fn window_clamps_current_past_the_end() {
        assert_eq!(page_window(4, 12, 5), vec![0, 1, 2, 3]);
        assert!(page_window(0, 3, 5).is_empty());
    }

    #[test]
    fn paginated_first_of_three_pages() {
        let page = ListPage {
            items: (0..12).collect::<Vec<u32>>(),
            page_index: 0,
            page_size: 12,
            total_elements: 30,
            total_pages: 3,
            is_first: true,
            is_last: false,
        };
        let mut state = ListState::new().with_filter("division", "Electrical");
        state.observe(&page);

        let paginated = Paginated::new(page, &state, "/blogs");
        assert_eq!(paginated.items.len(), 12);
        assert_eq!(paginated.indicator().as_deref(), Some("Page 1 of 3"));
        assert_eq!(paginated.previous_url, None);
        assert_eq!(
            paginated.next_url.as_deref(),
            Some("/blogs?division=Electrical&page=1")
        );
        assert_eq!(paginated.pages.len(), 3);
        assert!(paginated.pages[0].current);
        assert_eq!(paginated.pages[0].url, "/blogs?division=Electrical");
    }

    #[test]
    fn paginated_empty_disables_navigation() {
        let page = ListPage::<u32>::empty(12);
        let mut state = ListState::new();
        state.go_to_page(2);
        state.observe(&page);

        let paginated = Paginated::new(page, &state, "/products");
        assert!(paginated.is_empty());
        assert_eq!(paginated.indicator(), None);
        assert!(paginated.pages.is_empty());
        assert_eq!(paginated.previous_url, None);
        assert_eq!(paginated.next_url, None);
    }
}
