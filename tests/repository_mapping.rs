//! PostgreSQL store tests.
//!
//! Need a reachable `DATABASE_URL`; run with `cargo test -- --ignored`.

use sqlx::PgPool;
use std::sync::Arc;
use shorturl::application::services::ResolveService;
use shorturl::domain::entities::NewUrlMapping;
use shorturl::domain::repositories::MappingRepository;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::PgMappingRepository;

fn new_mapping(id: &str, url: &str) -> NewUrlMapping {
    NewUrlMapping {
        id: id.to_string(),
        url: url.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_mapping(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let result = repo
        .insert(new_mapping("test1234", "https://example.com"))
        .await;

    assert!(result.is_ok());
    let mapping = result.unwrap();
    assert_eq!(mapping.id, "test1234");
    assert_eq!(mapping.url, "https://example.com");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_id(pool: PgPool) {
    sqlx::query("INSERT INTO url (id, original_url) VALUES ($1, $2)")
        .bind("abc12345")
        .bind("https://example.com")
        .execute(&pool)
        .await
        .unwrap();

    let repo = PgMappingRepository::new(Arc::new(pool));
    let result = repo.find_by_id("abc12345").await;

    assert!(result.is_ok());
    let mapping = result.unwrap();
    assert!(mapping.is_some());
    assert_eq!(mapping.unwrap().url, "https://example.com");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let result = repo.find_by_id("notfound").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_id_with_nul_byte(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let result = repo.find_by_id("ab\0cd").await;

    assert!(result.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_get_nul_id_is_not_found(pool: PgPool) {
    let repo = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    let service = ResolveService::new(repo, "https://fallback.example/".to_string());

    let result = service.get("\0").await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    assert_eq!(service.redirect("\0").await, "https://fallback.example/");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_empty_id_or_url_rejected(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let empty_id = repo.insert(new_mapping("", "https://example.com")).await;
    let empty_url = repo.insert(new_mapping("abcdEFGH", "")).await;

    assert!(matches!(
        empty_id.unwrap_err(),
        AppError::StoreWriteFailed { .. }
    ));
    assert!(matches!(
        empty_url.unwrap_err(),
        AppError::StoreWriteFailed { .. }
    ));
    assert!(repo.list_all().await.unwrap().is_empty());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_id_is_case_sensitive(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));
    repo.insert(new_mapping("abcdEFGH", "https://example.com"))
        .await
        .unwrap();

    assert!(repo.find_by_id("ABCDefgh").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_id_rejected(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));
    repo.insert(new_mapping("dup00000", "https://first.example"))
        .await
        .unwrap();

    let result = repo
        .insert(new_mapping("dup00000", "https://second.example"))
        .await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::StoreWriteFailed { .. }
    ));
    let kept = repo.find_by_id("dup00000").await.unwrap().unwrap();
    assert_eq!(kept.url, "https://first.example");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_all_empty(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let result = repo.list_all().await.unwrap();

    assert!(result.is_empty());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_all_descending(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));
    for id in ["B", "a", "A", "_", "-"] {
        repo.insert(new_mapping(id, "https://example.com"))
            .await
            .unwrap();
    }

    let ids: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();

    assert_eq!(ids, vec!["a", "_", "B", "A", "-"]);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_health_check(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    assert!(repo.health_check().await);
}
