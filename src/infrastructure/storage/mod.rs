//! Session storage backends.
//!
//! - [`FileSessionStore`] - JSON file on disk, used by the CLI
//! - [`MemorySessionStore`] - In-process map for tests and embedding

mod file_store;
mod memory_store;

pub use file_store::FileSessionStore;
pub use memory_store::MemorySessionStore;
