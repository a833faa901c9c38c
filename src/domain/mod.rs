//! Content entities rendered by the site.

pub mod blog;
pub mod company;
pub mod division;
pub mod gallery;
pub mod news;
pub mod page;
pub mod product;
pub mod types;
