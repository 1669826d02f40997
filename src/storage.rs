// ABOUTME: Key-value storage capability with in-memory and file-backed implementations
// ABOUTME: Holds the saved birth date and user preferences behind an injectable seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

//! # Local Storage
//!
//! The saved birth date and user preferences live behind the
//! [`KeyValueStore`] capability so persistence can be unit-tested without a
//! real backend. Two implementations are provided: [`MemoryStore`] for tests
//! and ephemeral sessions, and [`FileStore`] persisting a single JSON
//! document for the CLI.
//!
//! Read failures are tolerated by design: a missing or corrupt birth-date
//! record behaves as "no saved data" and corrupt preferences fall back to
//! the defaults, with a warning logged. Backend failures surface as
//! `StorageError` and are never fatal.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use dashmap::DashMap;
use serde_json::Value;
use tracing::warn;

use forecast_core::models::{SavedUserData, UserPreferences};

use crate::errors::{AppError, AppResult};

/// Storage key for the saved birth date record
pub const BIRTH_DATE_KEY: &str = "mind-forecast-birth-date";

/// Storage key for the user preferences record
pub const PREFERENCES_KEY: &str = "mind-forecast-preferences";

/// Injectable key-value storage capability
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backend cannot be read.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove the value stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backend cannot be written.
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store persisting one JSON object of key/value pairs
///
/// Every write rewrites the whole document; the data set is two small
/// records, so durability beats cleverness here.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store over the given document path
    ///
    /// The file is created lazily on first write; the parent directory is
    /// created as needed.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> AppResult<serde_json::Map<String, Value>> {
        if !self.path.exists() {
            return Ok(serde_json::Map::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            AppError::storage(format!("failed to read {}: {e}", self.path.display()))
                .with_source(e)
        })?;
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => {
                // A mangled document is treated as empty rather than wedging
                // every future read
                warn!(path = %self.path.display(), "Storage document is not a JSON object; starting fresh");
                Ok(serde_json::Map::new())
            }
        }
    }

    fn persist(&self, map: &serde_json::Map<String, Value>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!("failed to create {}: {e}", parent.display()))
                    .with_source(e)
            })?;
        }
        let raw = serde_json::to_string_pretty(map)
            .map_err(|e| AppError::storage(format!("failed to encode storage document: {e}")))?;
        fs::write(&self.path, raw).map_err(|e| {
            AppError::storage(format!("failed to write {}: {e}", self.path.display()))
                .with_source(e)
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let map = self.load()?;
        Ok(map.get(key).and_then(Value::as_str).map(str::to_owned))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut map = self.load()?;
        map.insert(key.to_owned(), Value::String(value.to_owned()));
        self.persist(&map)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut map = self.load()?;
        if map.remove(key).is_some() || self.path.exists() {
            self.persist(&map)?;
        }
        Ok(())
    }
}

/// Saved-user-data operations over any [`KeyValueStore`]
pub struct UserDataStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> UserDataStore<S> {
    /// Wrap a key-value store
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist the birth date with the current timestamp
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backend write fails.
    pub fn save_birth_date(&self, birth_date: &str) -> AppResult<()> {
        let record = SavedUserData {
            birth_date: birth_date.to_owned(),
            saved_at: Utc::now(),
        };
        let raw = serde_json::to_string(&record)
            .map_err(|e| AppError::storage(format!("failed to encode birth date record: {e}")))?;
        self.store.set(BIRTH_DATE_KEY, &raw)
    }

    /// The saved birth date, if a readable record exists
    ///
    /// A missing, unreadable, or corrupt record behaves as "no saved data".
    #[must_use]
    pub fn saved_birth_date(&self) -> Option<String> {
        let raw = match self.store.get(BIRTH_DATE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "Failed to read saved birth date");
                return None;
            }
        };
        match serde_json::from_str::<SavedUserData>(&raw) {
            Ok(record) => Some(record.birth_date),
            Err(e) => {
                warn!(error = %e, "Saved birth date record is corrupt");
                None
            }
        }
    }

    /// Whether a readable birth date record exists
    #[must_use]
    pub fn has_saved_data(&self) -> bool {
        self.saved_birth_date().is_some()
    }

    /// Persist the user preferences
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backend write fails.
    pub fn save_preferences(&self, preferences: &UserPreferences) -> AppResult<()> {
        let raw = serde_json::to_string(preferences)
            .map_err(|e| AppError::storage(format!("failed to encode preferences: {e}")))?;
        self.store.set(PREFERENCES_KEY, &raw)
    }

    /// The stored preferences, defaulting when absent or unparseable
    #[must_use]
    pub fn preferences(&self) -> UserPreferences {
        let raw = match self.store.get(PREFERENCES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return UserPreferences::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read preferences");
                return UserPreferences::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "Preferences record is corrupt; using defaults");
            UserPreferences::default()
        })
    }

    /// Remove the birth date and preferences records unconditionally
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backend write fails.
    pub fn clear_saved_data(&self) -> AppResult<()> {
        self.store.remove(BIRTH_DATE_KEY)?;
        self.store.remove(PREFERENCES_KEY)
    }
}
