//! Infrastructure layer for external integrations.
//!
//! This layer implements the collaborator traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest client for the remote shortening API
//! - [`storage`] - Session storage backends (file and in-memory)

pub mod http;
pub mod storage;
