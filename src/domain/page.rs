//! Paged list payload returned by the content API.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of a server-ordered list.
///
/// Invariants: `items.len() <= page_size`, `is_first == (page_index == 0)`,
/// `is_last == (total_pages == 0 || page_index == total_pages - 1)`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub page_index: usize,
    pub page_size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
    pub is_first: bool,
    pub is_last: bool,
}

impl<T> ListPage<T> {
    /// The canonical page shown when nothing could be loaded.
    pub fn empty(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_index: 0,
            page_size,
            total_elements: 0,
            total_pages: 0,
            is_first: true,
            is_last: true,
        }
    }

    /// Builds a page out of a complete, unpaged list by slicing the requested
    /// window. Out-of-range indexes yield the empty tail of the last page.
    pub fn from_unpaged(all: Vec<T>, page_index: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_elements = all.len();
        let total_pages = total_elements.div_ceil(page_size);
        if total_pages == 0 {
            return Self::empty(page_size);
        }
        let page_index = page_index.min(total_pages - 1);
        let items = all
            .into_iter()
            .skip(page_index * page_size)
            .take(page_size)
            .collect();
        Self {
            items,
            page_index,
            page_size,
            total_elements,
            total_pages,
            is_first: page_index == 0,
            is_last: page_index + 1 == total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U, F>(self, f: F) -> ListPage<U>
    where
        F: FnMut(T) -> U,
    {
        ListPage {
            items: self.items.into_iter().map(f).collect(),
            page_index: self.page_index,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            is_first: self.is_first,
            is_last: self.is_last,
        }
    }
}

/// Wire shape of a Spring-style page; both field spellings are seen in the
/// wild (`pageNumber`/`number`, `pageSize`/`size`).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPage<T> {
    #[serde(default = "Vec::new")]
    content: Vec<T>,
    #[serde(default, alias = "number")]
    page_number: Option<usize>,
    #[serde(default, alias = "size")]
    page_size: Option<usize>,
    #[serde(default)]
    total_elements: Option<usize>,
    #[serde(default)]
    total_pages: Option<usize>,
    #[serde(default)]
    first: Option<bool>,
    #[serde(default)]
    last: Option<bool>,
}

impl<T> RawPage<T> {
    fn normalize(self) -> ListPage<T> {
        let item_count = self.content.len();
        let page_size = self.page_size.unwrap_or(item_count).max(item_count).max(1);
        let total_elements = self.total_elements.unwrap_or(item_count);
        let total_pages = self
            .total_pages
            .unwrap_or_else(|| total_elements.div_ceil(page_size));
        let page_index = self.page_number.unwrap_or(0);
        let is_first = self.first.unwrap_or(page_index == 0);
        let is_last = self
            .last
            .unwrap_or(total_pages == 0 || page_index + 1 >= total_pages);
        ListPage {
            items: self.content,
            page_index,
            page_size,
            total_elements,
            total_pages,
            is_first,
            is_last,
        }
    }
}

impl<'de, T> Deserialize<'de> for ListPage<T>
where
    T: DeserializeOwned,
{
    /// Accepts a paged object; a bare array becomes a single page holding
    /// every element.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_array() {
            let items = Vec::<T>::deserialize(value).map_err(de::Error::custom)?;
            let size = items.len();
            return Ok(ListPage::from_unpaged(items, 0, size));
        }
        RawPage::<T>::deserialize(value)
            .map(RawPage::normalize)
            .map_err(de::Error::custom)
    }
}
