use super::KeyValueStore;
use crate::error::{PassportError, Result};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, Vec<u8>>,
    reject_writes: bool,
    reject_reads: bool,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `save` fail, as a full or read-only disk would.
    pub fn set_reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    /// Make every subsequent `load` fail, as an unreadable file would.
    pub fn set_reject_reads(&mut self, reject: bool) {
        self.reject_reads = reject;
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn raw(&self, key: &str) -> Option<&[u8]> {
        self.values.get(key).map(Vec::as_slice)
    }

    pub fn insert_raw(&mut self, key: &str, bytes: impl Into<Vec<u8>>) {
        self.values.insert(key.to_string(), bytes.into());
    }
}

impl KeyValueStore for InMemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        if self.reject_reads {
            return Err(PassportError::Store(format!("Read rejected for key {}", key)));
        }
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        if self.reject_writes {
            return Err(PassportError::Store(format!(
                "Write rejected for key {}",
                key
            )));
        }
        self.values.insert(key.to_string(), bytes.to_vec());
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::api::SAVE_KEY;
    use crate::codec;
    use crate::model::CoffeeEntry;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        entries: Vec<CoffeeEntry>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                entries: Vec::new(),
            }
        }

        pub fn with_coffees(mut self, count: usize, category: &str) -> Self {
            let start = self.entries.len();
            for i in 0..count {
                let name = format!("Test Coffee {}", start + i + 1);
                self.entries
                    .push(CoffeeEntry::new(name, "Test description", category, None, None));
            }
            self.flush()
        }

        pub fn with_tasted_coffee(mut self, name: &str, category: &str) -> Self {
            let mut entry = CoffeeEntry::new(name, "Tasted", category, Some("Noted".into()), None);
            entry.tasted = true;
            self.entries.push(entry);
            self.flush()
        }

        pub fn with_favorite_coffee(mut self, name: &str, category: &str) -> Self {
            let mut entry = CoffeeEntry::new(name, "Loved", category, None, None);
            entry.is_favorite = true;
            self.entries.push(entry);
            self.flush()
        }

        pub fn with_corrupt_data(mut self) -> Self {
            self.store.insert_raw(SAVE_KEY, b"{not valid".to_vec());
            self
        }

        pub fn entries(&self) -> &[CoffeeEntry] {
            &self.entries
        }

        fn flush(mut self) -> Self {
            let bytes = codec::encode(&self.entries).unwrap();
            self.store.insert_raw(SAVE_KEY, bytes);
            self
        }
    }
}
