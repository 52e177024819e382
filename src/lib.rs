//! # Shortlink Dashboard
//!
//! Session-gated client for a URL shortening service: list your short links,
//! create new ones with a chosen lifetime, and see how long each stays valid.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, the validity calculator and collaborator traits
//! - **Application Layer** ([`application`]) - Session gate, link collection, creation workflow
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client and session storage
//!
//! ## Control Flow
//!
//! 1. [`application::services::SessionGate`] reads the persisted session
//! 2. Without one, the caller is sent back to the entry point and nothing is fetched
//! 3. Otherwise [`application::services::LinkCollectionStore`] performs the initial refresh
//! 4. Submissions go through [`application::services::LinkCreationFlow`], which shows the
//!    result and refreshes the collection
//! 5. Validity is computed per link at display time via [`domain::expiry::classify`]
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORTENER_API_URL="https://api.sho.rt"
//!
//! cargo run -- login --token "$TOKEN" --name alice
//! cargo run -- shorten https://example.com --validity 7days
//! cargo run -- list
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub use error::AppError;
pub use state::{Activation, AppState};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        LinkCollectionStore, LinkCreationFlow, RefreshOutcome, ResultPresentation, SessionGate,
        SessionState,
    };
    pub use crate::domain::entities::{
        CreationForm, CreationRequest, CreationResult, Credentials, LinkCollection, Session,
        ShortenedLink, ValidityPeriod,
    };
    pub use crate::domain::expiry::{UrgencyTier, ValidityStatus, classify};
    pub use crate::error::AppError;
    pub use crate::state::{Activation, AppState};
}
