// ABOUTME: Key-value persistence for the current participant, the choice log, and the pending search
// ABOUTME: Pluggable backends (in-memory, JSON files) behind one trait; corrupt values are discarded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON-file backend, one file per key
pub mod file;
/// In-memory backend
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::context::SearchOutcome;
use ecoplate_core::constants::storage_keys;
use ecoplate_core::models::{ChoiceRecord, User};
use ecoplate_core::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// String key-value store
pub trait KeyValueStore {
    /// Value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`; removing a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

/// Typed experiment state over a key-value store
#[derive(Debug)]
pub struct ExperimentStore<S> {
    store: S,
}

impl<S: KeyValueStore> ExperimentStore<S> {
    /// Wrap a key-value store
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store
    pub const fn inner(&self) -> &S {
        &self.store
    }

    /// Decode the JSON value under `key`, discarding it if corrupt
    fn load_json<T: DeserializeOwned>(&mut self, key: &str) -> AppResult<Option<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "Discarding corrupt stored value");
                self.store.remove(key)?;
                Ok(None)
            }
        }
    }

    fn save_json<T: Serialize>(&mut self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)?;
        debug!(key, bytes = raw.len(), "Stored value");
        Ok(())
    }

    /// Registered participant, if any
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails
    pub fn load_user(&mut self) -> AppResult<Option<User>> {
        self.load_json(storage_keys::CURRENT_USER)
    }

    /// Persist the registered participant
    ///
    /// # Errors
    ///
    /// Returns an error if the user cannot be serialized or stored
    pub fn save_user(&mut self, user: &User) -> AppResult<()> {
        self.save_json(storage_keys::CURRENT_USER, user)
    }

    /// Forget the registered participant
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails
    pub fn clear_user(&mut self) -> AppResult<()> {
        self.store.remove(storage_keys::CURRENT_USER)
    }

    /// Choice log, oldest first
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails
    pub fn load_choices(&mut self) -> AppResult<Vec<ChoiceRecord>> {
        Ok(self
            .load_json(storage_keys::USER_CHOICES)?
            .unwrap_or_default())
    }

    /// Append a record to the choice log
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read, serialized, or stored
    pub fn append_choice(&mut self, choice: &ChoiceRecord) -> AppResult<()> {
        let mut choices = self.load_choices()?;
        choices.push(choice.clone());
        self.save_json(storage_keys::USER_CHOICES, &choices)
    }

    /// Empty the choice log
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails
    pub fn clear_choices(&mut self) -> AppResult<()> {
        self.store.remove(storage_keys::USER_CHOICES)
    }

    /// Results awaiting a selection, if any
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails
    pub fn load_pending_search(&mut self) -> AppResult<Option<SearchOutcome>> {
        self.load_json(storage_keys::PENDING_SEARCH)
    }

    /// Persist results awaiting a selection
    ///
    /// # Errors
    ///
    /// Returns an error if the outcome cannot be serialized or stored
    pub fn save_pending_search(&mut self, outcome: &SearchOutcome) -> AppResult<()> {
        self.save_json(storage_keys::PENDING_SEARCH, outcome)
    }

    /// Drop results awaiting a selection
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails
    pub fn clear_pending_search(&mut self) -> AppResult<()> {
        self.store.remove(storage_keys::PENDING_SEARCH)
    }
}
