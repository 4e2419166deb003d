//! DTOs for the `/url` endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlMapping;

/// Request to shorten a URL.
///
/// The URL is stored as-is; the only requirement is that it is non-empty.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,
}

/// A single identifier → URL pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlResponse {
    pub id: String,
    pub url: String,
}

impl From<UrlMapping> for UrlResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            id: mapping.id,
            url: mapping.url,
        }
    }
}

/// Every stored mapping, ordered by id descending.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListUrlResponse {
    pub urls: Vec<UrlResponse>,
}
