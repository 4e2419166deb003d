//! URL resolution service: lookup, listing and redirect.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Service resolving short identifiers back to their original URLs.
///
/// [`Self::get`] and [`Self::list_all`] report every failure to the caller.
/// [`Self::redirect`] never fails: any lookup failure resolves to the
/// configured fallback URL.
pub struct ResolveService<R: MappingRepository + ?Sized> {
    repository: Arc<R>,
    fallback_url: String,
}

impl<R: MappingRepository + ?Sized> ResolveService<R> {
    /// Creates a new resolution service.
    ///
    /// `fallback_url` is the destination used by [`Self::redirect`] when a
    /// lookup fails.
    pub fn new(repository: Arc<R>, fallback_url: String) -> Self {
        Self {
            repository,
            fallback_url,
        }
    }

    pub fn fallback_url(&self) -> &str {
        &self.fallback_url
    }

    /// Retrieves the mapping for an exact identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this id.
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    pub async fn get(&self, id: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "id": id })))
    }

    /// Lists all mappings, ordered by id descending.
    ///
    /// An empty store yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    pub async fn list_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        self.repository.list_all().await
    }

    /// Resolves the redirect destination for an identifier.
    ///
    /// Returns the stored URL on success and the fallback URL on any failure.
    pub async fn redirect(&self, id: &str) -> String {
        match self.get(id).await {
            Ok(mapping) => {
                metrics::counter!("shorturl_redirects_total", "outcome" => "hit").increment(1);
                debug!(%id, url = %mapping.url, "Redirect hit");
                mapping.url
            }
            Err(AppError::NotFound { .. }) => {
                debug!(%id, "Unknown short id, redirecting to fallback");
                self.fallback()
            }
            Err(err @ AppError::StoreUnavailable { .. }) => {
                warn!(%id, error = %err, "Store unavailable during redirect, using fallback");
                self.fallback()
            }
            Err(
                err @ (AppError::Validation { .. }
                | AppError::RandomSourceUnavailable { .. }
                | AppError::StoreWriteFailed { .. }),
            ) => {
                warn!(%id, code = err.code(), error = %err, "Lookup failed during redirect, using fallback");
                self.fallback()
            }
        }
    }

    fn fallback(&self) -> String {
        metrics::counter!("shorturl_redirects_total", "outcome" => "fallback").increment(1);
        self.fallback_url.clone()
    }
}
