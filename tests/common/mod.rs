#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use shorturl::domain::entities::{NewUrlMapping, UrlMapping};
use shorturl::domain::id_generator::{IdGenerator, OsIdGenerator};
use shorturl::domain::repositories::MappingRepository;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::MemoryMappingRepository;
use axum::Router;
use shorturl::routes::{app_router, router};
use shorturl::state::AppState;

pub const FALLBACK_URL: &str = "https://fallback.example/";

/// A store whose every operation fails as if the database were down.
pub struct UnavailableRepository;

#[async_trait]
impl MappingRepository for UnavailableRepository {
    async fn insert(&self, _new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        Err(AppError::store_unavailable(
            "Database error",
            json!({ "reason": "connection refused" }),
        ))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<UrlMapping>, AppError> {
        Err(AppError::store_unavailable(
            "Database error",
            json!({ "reason": "connection refused" }),
        ))
    }

    async fn list_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        Err(AppError::store_unavailable(
            "Database error",
            json!({ "reason": "connection refused" }),
        ))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Hands out the given ids in order, then fails like an exhausted random source.
pub struct SequenceIdGenerator {
    ids: Vec<String>,
    next: AtomicUsize,
}

impl SequenceIdGenerator {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            ids: ids.iter().map(|id| id.to_string()).collect(),
            next: AtomicUsize::new(0),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn generate_id(&self) -> Result<String, AppError> {
        let index = self.next.fetch_add(1, Ordering::SeqCst);
        self.ids.get(index).cloned().ok_or_else(|| {
            AppError::random_source_unavailable("Random source exhausted", json!({}))
        })
    }
}

pub fn memory_server() -> TestServer {
    server_with(Arc::new(MemoryMappingRepository::new()), Arc::new(OsIdGenerator))
}

pub fn server_with(
    repository: Arc<dyn MappingRepository>,
    id_generator: Arc<dyn IdGenerator>,
) -> TestServer {
    let state = AppState::new(repository, id_generator, FALLBACK_URL.to_string());
    TestServer::new(router(state)).unwrap()
}

pub async fn seed(repository: &MemoryMappingRepository, id: &str, url: &str) {
    repository
        .insert(NewUrlMapping {
            id: id.to_string(),
            url: url.to_string(),
        })
        .await
        .unwrap();
}

/// Server over the full application stack, trailing-slash normalization included.
pub fn normalized_server() -> TestServer {
    let state = AppState::new(
        Arc::new(MemoryMappingRepository::new()),
        Arc::new(OsIdGenerator),
        FALLBACK_URL.to_string(),
    );
    TestServer::new(Router::new().fallback_service(app_router(state))).unwrap()
}
