//! URL mapping entity.

/// Association between a short identifier and the original long-form URL.
///
/// Mappings are append-only: once stored they are never updated or deleted.
/// The URL is kept verbatim, without normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: String,
    pub url: String,
}

impl UrlMapping {
    pub fn new(id: String, url: String) -> Self {
        Self { id, url }
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub id: String,
    pub url: String,
}

impl From<NewUrlMapping> for UrlMapping {
    fn from(new_mapping: NewUrlMapping) -> Self {
        UrlMapping::new(new_mapping.id, new_mapping.url)
    }
}
