//! Short identifier generation.
//!
//! Identifiers are 6 bytes drawn from the operating system's CSPRNG, encoded as
//! URL-safe base64 without padding. That gives an 8-character token over
//! `[A-Za-z0-9_-]` carrying 48 bits of entropy.
//!
//! Generation never consults the store. Collisions are left to the store's
//! uniqueness constraint and surface as [`AppError::StoreWriteFailed`].

use base64::Engine as _;
use serde_json::json;

use crate::error::AppError;

/// Number of random bytes behind every identifier.
pub const ID_LENGTH_BYTES: usize = 6;

/// Length of the encoded identifier.
pub const ID_LENGTH: usize = 8;

/// Source of fresh short identifiers.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Produces a new identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RandomSourceUnavailable`] if no entropy is available.
    fn generate_id(&self) -> Result<String, AppError>;
}

/// [`IdGenerator`] backed by the operating system's secure random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsIdGenerator;

impl IdGenerator for OsIdGenerator {
    fn generate_id(&self) -> Result<String, AppError> {
        generate_id()
    }
}

/// Generates a random 8-character identifier.
///
/// # Errors
///
/// Returns [`AppError::RandomSourceUnavailable`] if `getrandom` fails. There is
/// no fallback to a weaker generator.
pub fn generate_id() -> Result<String, AppError> {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::random_source_unavailable(
            "Secure random source unavailable",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(encode_id(&buffer))
}

/// Encodes raw identifier bytes as URL-safe base64 without padding.
pub fn encode_id(bytes: &[u8; ID_LENGTH_BYTES]) -> String {
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}
