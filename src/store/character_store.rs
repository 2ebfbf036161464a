//! Character Store Module
//!
//! HashMap-backed mapping from character id to integer value. Callers share
//! it behind a `RwLock`, which makes every operation below atomic.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{CharacterError, Result};

// == Character Store ==
/// In-memory mapping from character id to value.
#[derive(Debug, Default)]
pub struct CharacterStore {
    /// Id to value storage
    entries: HashMap<String, i32>,
}

impl CharacterStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Inserts `value` under `id` only if the id is absent.
    ///
    /// Never overwrites: an existing entry keeps its value and the call fails
    /// with `AlreadyExists`.
    pub fn add(&mut self, id: impl Into<String>, value: i32) -> Result<()> {
        let id = id.into();
        if self.entries.contains_key(&id) {
            return Err(CharacterError::AlreadyExists(id));
        }

        debug!(id = %id, value, "adding character");
        self.entries.insert(id, value);
        Ok(())
    }

    // == Get ==
    /// Returns the current value for `id`, if any.
    pub fn get(&self, id: &str) -> Option<i32> {
        self.entries.get(id).copied()
    }

    // == Compare And Update ==
    /// Replaces the value for `id` with `value` if it currently equals `expected`.
    ///
    /// Returns `Ok(false)` when the stored value moved on, and `NotFound` when
    /// the id is absent.
    pub fn compare_and_update(&mut self, id: &str, expected: i32, value: i32) -> Result<bool> {
        match self.entries.get_mut(id) {
            Some(current) if *current == expected => {
                *current = value;
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(CharacterError::NotFound(id.to_string())),
        }
    }

    // == Update ==
    /// Replaces the value of an existing id, failing with `NotFound` if absent.
    ///
    /// Atomic against concurrent updates and removes because callers hold the
    /// store's write lock for the whole call.
    pub fn update(&mut self, id: &str, value: i32) -> Result<()> {
        match self.entries.get_mut(id) {
            Some(current) => {
                debug!(id, from = *current, to = value, "updated character");
                *current = value;
                Ok(())
            }
            None => Err(CharacterError::NotFound(id.to_string())),
        }
    }

    // == Remove ==
    /// Removes `id`, failing with `NotFound` if it is absent.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        match self.entries.remove(id) {
            Some(_) => Ok(()),
            None => Err(CharacterError::NotFound(id.to_string())),
        }
    }

    // == List Keys ==
    /// Returns a snapshot of the current ids, in no particular order.
    pub fn list_keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
