// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::{Path, PathBuf};

use agenda_core::{Config, ConflictPolicy, DateKey, EventDraft, TimeOfDay};

/// Parses a `MM/DD/YYYY` date key.
///
/// # Panics
///
/// Panics if the key is malformed.
#[must_use]
pub fn date(s: &str) -> DateKey {
    s.parse().expect("valid date key")
}

/// Parses an `HH:MM` time.
///
/// # Panics
///
/// Panics if the time is malformed.
#[must_use]
pub fn time(s: &str) -> TimeOfDay {
    s.parse().expect("valid time")
}

/// Creates a test configuration storing events under `state_dir`.
///
/// # Example
///
/// ```ignore
/// let config = test_config("/tmp/state");
/// ```
#[must_use]
pub fn test_config(state_dir: &str) -> Config {
    Config {
        state_dir: Some(PathBuf::from(state_dir)),
        events_file: None,
        on_conflict: ConflictPolicy::Warn,
    }
}

/// Creates an event draft spanning `start`-`end` on `day`.
#[must_use]
pub fn test_event_draft(day: &str, title: &str, start: &str, end: Option<&str>) -> EventDraft {
    EventDraft {
        date: date(day),
        title: title.to_string(),
        start: time(start),
        end: end.map(time),
    }
}

/// Builder for creating test configurations with guaranteed temporary directories.
///
/// # Example
///
/// ```ignore
/// let config = TestConfigBuilder::new()
///     .with_state_dir(&temp_dirs.state_dir)
///     .with_on_conflict(ConflictPolicy::Reject)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct TestConfigBuilder {
    state_dir: Option<PathBuf>,
    events_file: Option<PathBuf>,
    on_conflict: ConflictPolicy,
}

#[allow(dead_code)]
impl TestConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the state directory.
    #[must_use]
    pub fn with_state_dir(mut self, path: &Path) -> Self {
        self.state_dir = Some(path.to_path_buf());
        self
    }

    /// Sets the event file, relative to the state directory unless absolute.
    #[must_use]
    pub fn with_events_file(mut self, path: &Path) -> Self {
        self.events_file = Some(path.to_path_buf());
        self
    }

    /// Sets the conflict policy.
    #[must_use]
    pub fn with_on_conflict(mut self, policy: ConflictPolicy) -> Self {
        self.on_conflict = policy;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> Config {
        Config {
            state_dir: self.state_dir,
            events_file: self.events_file,
            on_conflict: self.on_conflict,
        }
    }
}
