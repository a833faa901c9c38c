//! Runtime configuration of the site.

pub mod config;
