//! In-memory settings store.
//!
//! Stands in for the host's persistent key-value storage. Writes are
//! fire-and-forget from the engine's point of view, so a plain map is
//! all the simulator needs; restarting the binary starts a fresh
//! "first boot" session.

use std::collections::HashMap;

use watchface_common::{SettingsStore, StorageKey};

#[derive(Default)]
pub struct MemoryStore {
    bools: HashMap<StorageKey, bool>,
    ints: HashMap<StorageKey, i32>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
}

impl SettingsStore for MemoryStore {
    fn exists(
        &self,
        key: StorageKey,
    ) -> bool {
        self.bools.contains_key(&key) || self.ints.contains_key(&key)
    }

    fn read_bool(
        &self,
        key: StorageKey,
    ) -> bool {
        self.bools.get(&key).copied().unwrap_or(false)
    }

    fn read_int(
        &self,
        key: StorageKey,
    ) -> i32 {
        self.ints.get(&key).copied().unwrap_or(0)
    }

    fn write_bool(
        &mut self,
        key: StorageKey,
        value: bool,
    ) {
        self.bools.insert(key, value);
    }

    fn write_int(
        &mut self,
        key: StorageKey,
        value: i32,
    ) {
        self.ints.insert(key, value);
    }
}
