//! Core domain entities of the dashboard.
//!
//! Entities are plain data structures. The authoritative copy of every link
//! lives on the server; the client only holds snapshots.
//!
//! # Entity Types
//!
//! - [`Session`] - Bearer token plus identity label
//! - [`ShortenedLink`] - A link owned by the signed-in user
//! - [`LinkCollection`] - The user's links, keyed by id
//! - [`CreationForm`] / [`CreationRequest`] - Pending creation and its wire form
//! - [`CreationResult`] - Server confirmation of a created link

pub mod creation;
pub mod link;
pub mod session;

pub use creation::{CreationForm, CreationRequest, CreationResult, ValidityPeriod};
pub use link::{LinkCollection, ShortenedLink};
pub use session::{Credentials, Session, mask_token};
