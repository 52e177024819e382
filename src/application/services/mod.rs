//! Stateful components of the dashboard core.

pub mod link_collection;
pub mod link_creation;
pub mod result_presentation;
pub mod session_gate;

pub use link_collection::{LinkCollectionStore, RefreshOutcome};
pub use link_creation::LinkCreationFlow;
pub use result_presentation::ResultPresentation;
pub use session_gate::{SessionGate, SessionState};
