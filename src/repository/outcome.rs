use crate::domain::page::ListPage;
use crate::repository::errors::{FailureKind, FetchError};

/// Result of a fetch as seen by the rendering layer.
///
/// Failures are values, never raised errors; callers pick the degraded
/// representation they need.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Success(T),
    Failure(FetchError),
}

impl<T> FetchOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            FetchOutcome::Success(_) => None,
            FetchOutcome::Failure(err) => Some(err.kind()),
        }
    }

    /// The payload, or `None` for any failure (the "not found" signal).
    pub fn ok(self) -> Option<T> {
        match self {
            FetchOutcome::Success(value) => Some(value),
            FetchOutcome::Failure(_) => None,
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.ok().unwrap_or_default()
    }

    pub fn map<U, F>(self, f: F) -> FetchOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            FetchOutcome::Success(value) => FetchOutcome::Success(f(value)),
            FetchOutcome::Failure(err) => FetchOutcome::Failure(err),
        }
    }
}

impl<T> FetchOutcome<ListPage<T>> {
    /// The fetched page, or the canonical empty page on failure.
    pub fn into_page(self, page_size: usize) -> ListPage<T> {
        match self {
            FetchOutcome::Success(page) => page,
            FetchOutcome::Failure(_) => ListPage::empty(page_size),
        }
    }
}

impl<T> From<Result<T, FetchError>> for FetchOutcome<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => FetchOutcome::Success(value),
            Err(err) => FetchOutcome::Failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failure_degrades_to_the_canonical_empty_page() {
        let failures = [
            FetchError::Network("connection refused".into()),
            FetchError::Status(500),
            FetchError::Decode("expected value".into()),
            FetchError::NotFound,
        ];
        for err in failures {
            let page = FetchOutcome::<ListPage<u32>>::Failure(err).into_page(12);
            assert_eq!(page, ListPage::empty(12));
            assert!(page.items.is_empty());
            assert_eq!(page.page_index, 0);
            assert_eq!(page.total_elements, 0);
            assert_eq!(page.total_pages, 0);
            assert!(page.is_first && page.is_last);
        }
    }

    #[test]
    fn success_keeps_payload() {
        let outcome: FetchOutcome<u32> = Ok(5).into();
        assert!(outcome.is_success());
        assert_eq!(outcome.failure_kind(), None);
        assert_eq!(outcome.ok(), Some(5));
    }

    #[test]
    fn failure_is_a_not_found_signal() {
        let outcome: FetchOutcome<u32> = Err(FetchError::Status(404)).into();
        assert_eq!(outcome.failure_kind(), Some(FailureKind::NonSuccessStatus));
        assert_eq!(outcome.ok(), None);
    }
}
