//! # Storage Layer
//!
//! This module defines the durable storage abstraction. The [`KeyValueStore`]
//! trait is the only capability the collection needs from the host: read the
//! bytes under a key, write bytes under a key.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage in a data directory
//!   - One file per key: `{key}.json`
//!   - Writes go to a temporary sibling and are renamed into place
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can be told to reject writes, to exercise write-failure handling
//!
//! The store treats values as opaque bytes. Encoding lives in [`crate::codec`].

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for durable byte storage.
pub trait KeyValueStore {
    /// Load the bytes saved under `key`, or `None` if nothing was saved.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Save `bytes` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()>;
}
