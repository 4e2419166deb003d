//! Core domain entities.
//!
//! - [`UrlMapping`] - A stored identifier → URL association
//! - [`NewUrlMapping`] - Input for inserting a mapping

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
