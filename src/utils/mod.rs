//! Helpers shared across layers.
//!
//! - [`url_normalizer`] - URL checks and API endpoint joining
//! - [`loading`] - Scoped loading flag

pub mod loading;
pub mod url_normalizer;
