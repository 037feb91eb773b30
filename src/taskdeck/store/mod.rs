//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence boundary of a session: it hands out
//! the user's whole [`TaskCollection`] and takes it back on save.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Collection stored as pretty JSON in `tasks.json`
//!   - A missing file loads as an empty collection
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can be told to fail saves, to exercise error paths
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── tasks.json          # Tasks and categories
//! └── config.json         # Configuration
//! ```
//!
//! The format is private to this layer; nothing outside `store/` reads the files.

use crate::error::Result;
use crate::model::TaskCollection;

pub mod fs;
pub mod memory;

/// Abstract interface for task storage.
pub trait DataStore {
    /// Load the full collection. A store with nothing saved yields an empty one.
    fn load(&self) -> Result<TaskCollection>;

    /// Replace the stored collection with `collection`.
    fn save(&mut self, collection: &TaskCollection) -> Result<()>;
}
