//! Application layer services implementing the shortener's use cases.
//!
//! Services consume the [`crate::domain::repositories::MappingRepository`]
//! capability injected at construction and expose a small API to HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - The write path: generate an id and store the mapping
//! - [`services::resolve_service::ResolveService`] - The read path: lookup, listing and redirect with fallback

pub mod services;
