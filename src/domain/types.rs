//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, well-formed
//! slugs, non-zero page sizes) so that once a value reaches the fetcher it can
//! be placed into a request URL without further checks.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Slug contained characters outside `[A-Za-z0-9_-]`.
    #[error("invalid slug: {0}")]
    InvalidSlug(String),
    /// Page size must allow at least one item.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// Deserializes an explicit `null` as the field's default value.
///
/// The content API sends `null` for unset fields; together with
/// `#[serde(default)]` this treats missing and `null` fields alike.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Key addressing a single resource on the content API.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKey {
    /// Numeric identifier, e.g. `/products/42`.
    Id(u64),
    /// URL slug, e.g. `/blogs/slug/spring-launch`.
    Slug(String),
}

impl ResourceKey {
    /// Creates a numeric key ensuring it is greater than zero.
    pub fn id(value: u64) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self::Id(value))
        } else {
            Err(TypeConstraintError::NonPositiveId)
        }
    }

    /// Creates a slug key after trimming and validating the characters.
    pub fn slug<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(TypeConstraintError::InvalidSlug(trimmed.to_string()));
        }
        Ok(Self::Slug(trimmed.to_string()))
    }

    /// Path segment form of the key.
    pub fn as_segment(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::Slug(slug) => slug.clone(),
        }
    }
}

impl Display for ResourceKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_segment())
    }
}

impl FromStr for ResourceKey {
    type Err = TypeConstraintError;

    /// Digits parse as an id, anything else as a slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            let id = trimmed
                .parse::<u64>()
                .map_err(|_| TypeConstraintError::InvalidSlug(trimmed.to_string()))?;
            return Self::id(id);
        }
        Self::slug(trimmed)
    }
}

/// Number of items requested per list page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageSize(usize);

impl PageSize {
    /// Page size used by the catalog pages.
    pub const DEFAULT: PageSize = PageSize(12);

    /// Creates a page size ensuring it is greater than zero.
    pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::ZeroPageSize)
        }
    }

    /// Returns the raw value.
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = TypeConstraintError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
