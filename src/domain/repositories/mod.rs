//! Collaborator traits for the domain layer.
//!
//! The dashboard core depends on two outside collaborators: the local session
//! storage and the remote shortening API. Both are abstracted behind traits so
//! services can be exercised with mocks.
//!
//! # Available Collaborators
//!
//! - [`SessionStore`] - Persisted keyed strings (token, identity label, flag)
//! - [`LinkApi`] - Remote link listing and creation
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.
//! Integration tests in `tests/` use a `wiremock` server instead.

pub mod link_api;
pub mod session_store;

pub use link_api::LinkApi;
pub use session_store::{
    AUTH_FLAG_KEY, IDENTITY_KEY, SESSION_KEYS, SessionStore, TOKEN_KEY,
};

#[cfg(test)]
pub use link_api::MockLinkApi;
#[cfg(test)]
pub use session_store::MockSessionStore;
