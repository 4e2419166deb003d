//! URL shortening service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::id_generator::IdGenerator;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Service for creating new short URL mappings.
///
/// Each call draws one identifier and performs one insert. A failure at either
/// step is returned unchanged. In particular an identifier collision is not
/// retried with a fresh id: it surfaces as [`AppError::StoreWriteFailed`].
pub struct ShortenService<R: MappingRepository + ?Sized, G: IdGenerator + ?Sized> {
    repository: Arc<R>,
    id_generator: Arc<G>,
}

impl<R: MappingRepository + ?Sized, G: IdGenerator + ?Sized> ShortenService<R, G> {
    /// Creates a new shortening service.
    pub fn new(repository: Arc<R>, id_generator: Arc<G>) -> Self {
        Self {
            repository,
            id_generator,
        }
    }

    /// Shortens a URL.
    ///
    /// The URL is stored verbatim; any non-empty string is accepted.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `original_url` is empty
    /// - [`AppError::RandomSourceUnavailable`] if no identifier could be generated
    /// - [`AppError::StoreWriteFailed`] if the insert was rejected (including id collisions)
    /// - [`AppError::StoreUnavailable`] if the store could not be reached
    pub async fn shorten(&self, original_url: String) -> Result<UrlMapping, AppError> {
        if original_url.is_empty() {
            return Err(AppError::bad_request(
                "URL must not be empty",
                json!({ "field": "url" }),
            ));
        }

        let id = self.id_generator.generate_id()?;
        debug!(%id, "Generated short id");

        let mapping = self
            .repository
            .insert(NewUrlMapping {
                id,
                url: original_url,
            })
            .await?;

        metrics::counter!("shorturl_shortened_total").increment(1);
        info!(id = %mapping.id, url = %mapping.url, "Shortened URL");

        Ok(mapping)
    }
}
