//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ResolveService, ShortenService};
use crate::domain::id_generator::IdGenerator;
use crate::domain::repositories::MappingRepository;

pub type AppShortenService = ShortenService<dyn MappingRepository, dyn IdGenerator>;
pub type AppResolveService = ResolveService<dyn MappingRepository>;

/// Services wired to a single mapping store.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<AppShortenService>,
    pub resolve_service: Arc<AppResolveService>,
    pub repository: Arc<dyn MappingRepository>,
}

impl AppState {
    /// Builds the services around the given store and id generator.
    pub fn new(
        repository: Arc<dyn MappingRepository>,
        id_generator: Arc<dyn IdGenerator>,
        fallback_url: String,
    ) -> Self {
        let shorten_service = Arc::new(ShortenService::new(repository.clone(), id_generator));
        let resolve_service = Arc::new(ResolveService::new(repository.clone(), fallback_url));

        Self {
            shorten_service,
            resolve_service,
            repository,
        }
    }
}
