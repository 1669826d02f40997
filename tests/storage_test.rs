// ABOUTME: Integration tests for the key-value storage layer
// ABOUTME: Saved birth date lifecycle, preference defaults, and file-backed persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use forecast_core::models::{Theme, UserPreferences};
use mind_forecast_server::storage::{
    FileStore, KeyValueStore, MemoryStore, UserDataStore, BIRTH_DATE_KEY, PREFERENCES_KEY,
};

#[test]
fn birth_date_round_trips() {
    let store = UserDataStore::new(MemoryStore::new());

    assert!(!store.has_saved_data());
    assert_eq!(store.saved_birth_date(), None);

    store.save_birth_date("1990-05-15").unwrap();
    assert!(store.has_saved_data());
    assert_eq!(store.saved_birth_date().as_deref(), Some("1990-05-15"));
}

#[test]
fn corrupt_birth_date_record_reads_as_no_saved_data() {
    let backing = MemoryStore::new();
    backing.set(BIRTH_DATE_KEY, "{not json").unwrap();

    let store = UserDataStore::new(backing);
    assert_eq!(store.saved_birth_date(), None);
    assert!(!store.has_saved_data());
}

#[test]
fn preferences_default_when_absent_or_corrupt() {
    let store = UserDataStore::new(MemoryStore::new());
    assert_eq!(store.preferences(), UserPreferences::default());

    let backing = MemoryStore::new();
    backing.set(PREFERENCES_KEY, "][").unwrap();
    let store = UserDataStore::new(backing);
    let preferences = store.preferences();
    assert!(preferences.notifications);
    assert_eq!(preferences.theme, Theme::Auto);
}

#[test]
fn preferences_round_trip() {
    let store = UserDataStore::new(MemoryStore::new());
    let wanted = UserPreferences {
        notifications: false,
        theme: Theme::Dark,
    };

    store.save_preferences(&wanted).unwrap();
    assert_eq!(store.preferences(), wanted);
}

#[test]
fn clear_removes_both_records_unconditionally() {
    let store = UserDataStore::new(MemoryStore::new());
    store.save_birth_date("1990-05-15").unwrap();
    store
        .save_preferences(&UserPreferences {
            notifications: false,
            theme: Theme::Light,
        })
        .unwrap();

    store.clear_saved_data().unwrap();
    assert!(!store.has_saved_data());
    assert_eq!(store.preferences(), UserPreferences::default());

    // Clearing an already-empty store succeeds
    store.clear_saved_data().unwrap();
}

#[test]
fn file_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user.json");

    {
        let store = UserDataStore::new(FileStore::new(&path));
        store.save_birth_date("1987-11-02").unwrap();
    }

    let reopened = UserDataStore::new(FileStore::new(&path));
    assert_eq!(reopened.saved_birth_date().as_deref(), Some("1987-11-02"));
}

#[test]
fn file_store_tolerates_a_mangled_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user.json");
    std::fs::write(&path, "not json at all").unwrap();

    let store = FileStore::new(&path);
    assert_eq!(store.get(BIRTH_DATE_KEY).unwrap(), None);

    // Writes recover from the mangled state
    store.set(BIRTH_DATE_KEY, "value").unwrap();
    assert_eq!(store.get(BIRTH_DATE_KEY).unwrap().as_deref(), Some("value"));
}

#[test]
fn file_store_remove_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user.json");
    let store = FileStore::new(&path);

    // Removing from a store that never existed is fine
    store.remove(BIRTH_DATE_KEY).unwrap();
    assert!(!path.exists());

    store.set(BIRTH_DATE_KEY, "x").unwrap();
    store.remove(BIRTH_DATE_KEY).unwrap();
    assert_eq!(store.get(BIRTH_DATE_KEY).unwrap(), None);
}
