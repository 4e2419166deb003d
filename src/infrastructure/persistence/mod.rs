//! Mapping store implementations.
//!
//! # Repositories
//!
//! - [`PgMappingRepository`] - PostgreSQL-backed store using SQLx
//! - [`MemoryMappingRepository`] - Process-local store for tests and database-free runs

pub mod memory_mapping_repository;
pub mod pg_mapping_repository;

pub use memory_mapping_repository::MemoryMappingRepository;
pub use pg_mapping_repository::PgMappingRepository;
