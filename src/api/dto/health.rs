//! Health check payload.

use serde::Serialize;

/// Body of `GET /health`.
///
/// ```json
/// {"status": "healthy", "version": "0.1.0", "store": {"reachable": true, "message": "..."}}
/// ```
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` when the store answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub store: StoreCheck,
}

/// Outcome of probing the mapping store.
#[derive(Debug, Serialize)]
pub struct StoreCheck {
    pub reachable: bool,
    pub message: &'static str,
}

impl HealthResponse {
    pub fn from_store(reachable: bool) -> Self {
        let (status, message) = if reachable {
            ("healthy", "Mapping store reachable")
        } else {
            ("degraded", "Mapping store did not answer")
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            store: StoreCheck { reachable, message },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.store.reachable
    }
}
