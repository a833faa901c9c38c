//! Filter and page position of a catalog list view.
//!
//! The state round-trips through the page location (`/blogs?division=X&page=2`)
//! so that back/forward navigation and shared links reproduce the same query.

use std::collections::BTreeMap;

use crate::catalog::CatalogConfig;
use crate::domain::page::ListPage;
use crate::pagination::{MAX_VISIBLE_PAGES, page_window};
use crate::repository::ListQuery;

/// Page bounds reported by the most recent fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageBounds {
    total_pages: usize,
    is_first: bool,
    is_last: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    page_index: usize,
    filters: BTreeMap<String, String>,
    bounds: Option<PageBounds>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    pub fn filter(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(String::as_str)
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Total pages of the last observed page, once known.
    pub fn total_pages(&self) -> Option<usize> {
        self.bounds.map(|b| b.total_pages)
    }

    /// Sets or clears (blank value) one filter and returns to the first page.
    pub fn apply_filter(&mut self, name: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.filters.remove(name);
        } else {
            self.filters.insert(name.to_string(), value.to_string());
        }
        self.page_index = 0;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page_index = 0;
    }

    /// Moves to page `n`. Rejected once the page count is known and `n` lies
    /// outside it; returns whether the state changed position.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        if let Some(bounds) = self.bounds
            && n >= bounds.total_pages
        {
            return false;
        }
        self.page_index = n;
        true
    }

    pub fn next_page(&mut self) -> bool {
        match self.bounds {
            Some(bounds) if !bounds.is_last => self.go_to_page(self.page_index + 1),
            _ => false,
        }
    }

    pub fn previous_page(&mut self) -> bool {
        match self.bounds {
            Some(bounds) if !bounds.is_first && self.page_index > 0 => {
                self.go_to_page(self.page_index - 1)
            }
            _ => false,
        }
    }

    /// Records the bounds of a fetched page and clamps the position into
    /// `[0, total_pages - 1]`.
    pub fn observe<T>(&mut self, page: &ListPage<T>) {
        self.page_index = self
            .page_index
            .min(page.total_pages.saturating_sub(1));
        self.bounds = Some(PageBounds {
            total_pages: page.total_pages,
            is_first: page.is_first,
            is_last: page.is_last,
        });
    }

    /// Visible page-number indexes around the current page.
    pub fn window(&self) -> Vec<usize> {
        page_window(
            self.total_pages().unwrap_or(0),
            self.page_index,
            MAX_VISIBLE_PAGES,
        )
    }

    pub fn to_query(&self, page_size: usize) -> ListQuery {
        self.filters
            .iter()
            .fold(ListQuery::new(), |query, (name, value)| {
                query.filter(name.as_str(), value)
            })
            .paginate(self.page_index, page_size)
    }

    /// Location of this state under `site_path`; the first page carries no
    /// `page` parameter.
    pub fn location(&self, site_path: &str) -> String {
        let mut pairs: Vec<(&str, String)> = self
            .filters
            .iter()
            .map(|(name, value)| (name.as_str(), value.clone()))
            .collect();
        if self.page_index > 0 {
            pairs.push(("page", self.page_index.to_string()));
        }
        if pairs.is_empty() {
            return site_path.to_string();
        }
        match serde_html_form::to_string(&pairs) {
            Ok(query) => format!("{site_path}?{query}"),
            Err(err) => {
                log::error!("Failed to serialize list location: {err}");
                site_path.to_string()
            }
        }
    }

    pub fn with_filter(&self, name: &str, value: &str) -> Self {
        let mut next = self.clone();
        next.apply_filter(name, value);
        next
    }

    /// Location of page `n`, if [`go_to_page`](Self::go_to_page) accepts it.
    pub fn page_location(&self, n: usize, site_path: &str) -> Option<String> {
        self.stepped(|state| state.go_to_page(n))
            .map(|state| state.location(site_path))
    }

    pub fn previous_location(&self, site_path: &str) -> Option<String> {
        self.stepped(Self::previous_page)
            .map(|state| state.location(site_path))
    }

    pub fn next_location(&self, site_path: &str) -> Option<String> {
        self.stepped(Self::next_page)
            .map(|state| state.location(site_path))
    }

    fn stepped(&self, step: impl FnOnce(&mut Self) -> bool) -> Option<Self> {
        let mut next = self.clone();
        step(&mut next).then_some(next)
    }

    pub fn cleared(&self) -> Self {
        let mut next = self.clone();
        next.clear_filters();
        next
    }
}

/// Ticket identifying one issued list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotonic request counter; only the newest ticket may commit.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest == ticket.0
    }
}

/// A list view: its state, the page currently shown and the request
/// sequence deciding which fetch result may replace it.
#[derive(Debug)]
pub struct ListView<T> {
    state: ListState,
    page: ListPage<T>,
    page_size: usize,
    sequence: RequestSequence,
}

impl<T> ListView<T> {
    pub fn new(state: ListState, page_size: usize) -> Self {
        Self {
            state,
            page: ListPage::empty(page_size),
            page_size,
            sequence: RequestSequence::default(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }

    pub fn page(&self) -> &ListPage<T> {
        &self.page
    }

    /// Issues a ticket for the query matching the current state. Any ticket
    /// issued earlier becomes stale.
    pub fn request(&mut self) -> (RequestTicket, ListQuery) {
        (self.sequence.issue(), self.state.to_query(self.page_size))
    }

    /// Shows `page` if `ticket` is the newest request; stale results are
    /// dropped and `false` is returned.
    pub fn commit(&mut self, ticket: RequestTicket, page: ListPage<T>) -> bool {
        if !self.sequence.is_latest(ticket) {
            log::debug!("Discarding stale list result {ticket:?}");
            return false;
        }
        self.state.observe(&page);
        self.page = page;
        true
    }

    pub fn into_parts(self) -> (ListState, ListPage<T>) {
        (self.state, self.page)
    }
}
