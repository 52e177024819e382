//! Application layer: session handling, link synchronization and creation.
//!
//! - [`services`] - The four stateful components
//! - [`collection_shape`] - Lenient decoding of the link listing body

pub mod collection_shape;
pub mod services;

pub use collection_shape::{CollectionShape, decode_collection};
