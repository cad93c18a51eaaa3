// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::path::Path;

use agenda_core::{DateKey, EventStore};

/// Asserts that the events on `date` have exactly these titles, in start-time order.
///
/// # Panics
///
/// Panics if the titles differ.
pub fn assert_day_titles(store: &EventStore, date: &DateKey, titles: &[&str]) {
    let actual: Vec<&str> = store.events_on(date).iter().map(|e| e.title()).collect();
    assert_eq!(actual, titles, "Events on {date} mismatch");
}

/// Asserts that a file exists at the given path.
///
/// # Panics
///
/// Panics if the file doesn't exist.
#[allow(dead_code)]
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist: {}", path.display());
    assert!(path.is_file(), "Path should be a file: {}", path.display());
}
