//! Domain layer containing entities, the validity calculator and collaborator traits.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`expiry`] - Pure validity classification
//! - [`repositories`] - Session storage and remote API trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Collaborator traits are implemented by the infrastructure layer
//! - Stateful workflows live in [`crate::application::services`]

pub mod entities;
pub mod expiry;
pub mod repositories;
