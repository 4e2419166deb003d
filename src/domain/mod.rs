//! Domain layer containing the mapping entity, the store contract and id generation.
//!
//! # Architecture
//!
//! - [`entities`] - The URL mapping record
//! - [`repositories`] - Mapping store trait definition
//! - [`id_generator`] - Random short identifier generation
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Store implementations live in [`crate::infrastructure::persistence`] and are
//! handed to the services in [`crate::application::services`] at construction.

pub mod entities;
pub mod id_generator;
pub mod repositories;
