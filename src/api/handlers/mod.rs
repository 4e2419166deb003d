//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirect;
pub mod url;

pub use health::health_handler;
pub use redirect::{redirect_handler, redirect_without_id_handler};
pub use url::{get_url_handler, list_urls_handler, shorten_handler};
