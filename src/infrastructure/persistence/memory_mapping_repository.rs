//! In-memory implementation of the mapping repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// A mapping store living in process memory.
///
/// Honors the same contract as the PostgreSQL store: empty and duplicate ids
/// are rejected, nothing is ever overwritten, and listings come back in
/// descending id order. Contents are lost when the process exits.
///
/// # Use Cases
///
/// - Unit and HTTP tests without a database
/// - Local runs with `STORE=memory`
#[derive(Default)]
pub struct MemoryMappingRepository {
    mappings: RwLock<BTreeMap<String, String>>,
}

impl MemoryMappingRepository {
    pub fn new() -> Self {
        debug!("Using in-memory mapping store");
        Self::default()
    }
}

#[async_trait]
impl MappingRepository for MemoryMappingRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        if new_mapping.id.is_empty() || new_mapping.url.is_empty() {
            return Err(AppError::store_write_failed(
                "Mapping id and url must not be empty",
                json!({ "constraint": "url_not_empty" }),
            ));
        }

        let mut mappings = self.mappings.write().await;

        match mappings.entry(new_mapping.id.clone()) {
            Entry::Occupied(_) => Err(AppError::store_write_failed(
                "Identifier already exists",
                json!({ "id": new_mapping.id }),
            )),
            Entry::Vacant(slot) => {
                slot.insert(new_mapping.url.clone());
                Ok(UrlMapping::from(new_mapping))
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UrlMapping>, AppError> {
        let mappings = self.mappings.read().await;

        Ok(mappings
            .get(id)
            .map(|url| UrlMapping::new(id.to_string(), url.clone())))
    }

    async fn list_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        let mappings = self.mappings.read().await;

        Ok(mappings
            .iter()
            .rev()
            .map(|(id, url)| UrlMapping::new(id.clone(), url.clone()))
            .collect())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
