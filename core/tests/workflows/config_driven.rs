// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.
//!
//! These tests validate how configuration affects the session, including
//! event file placement and the conflict policy.

use std::path::PathBuf;

use agenda_core::{AddOutcome, Agenda, ConflictPolicy};

use crate::common::{TestConfigBuilder, assert_file_exists, setup_temp_dirs, test_event_draft};

#[tokio::test]
async fn config_custom_events_file_in_state_dir() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .with_events_file(&PathBuf::from("work/agenda.json"))
        .build();

    // Act
    let mut agenda = Agenda::new(config).await.unwrap();
    agenda.add_event(test_event_draft("01/01/2024", "A", "09:00", None), false);
    let expected = temp_dirs.state_dir.join("work/agenda.json");
    assert_eq!(agenda.file().path(), expected);
    agenda.close().await.unwrap();

    // Assert
    assert_file_exists(&expected);
}

#[tokio::test]
async fn config_absolute_events_file_ignores_state_dir() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let events_file = temp_dirs.base().join("elsewhere.json");
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .with_events_file(&events_file)
        .build();

    let agenda = Agenda::new(config).await.unwrap();
    assert_eq!(agenda.file().path(), events_file);
}

#[tokio::test]
async fn config_reject_policy_blocks_conflicts() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .with_on_conflict(ConflictPolicy::Reject)
        .build();
    let mut agenda = Agenda::new(config).await.unwrap();

    agenda.add_event(
        test_event_draft("01/01/2024", "A", "09:00", Some("10:00")),
        false,
    );
    let outcome = agenda.add_event(
        test_event_draft("01/01/2024", "B", "09:59", Some("11:00")),
        false,
    );
    assert_eq!(outcome, AddOutcome::Rejected);

    let outcome = agenda.add_event(
        test_event_draft("01/01/2024", "C", "10:00", Some("11:00")),
        false,
    );
    assert!(matches!(outcome, AddOutcome::Added(_)));
}

#[tokio::test]
async fn config_allow_policy_never_reports_conflicts() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .with_on_conflict(ConflictPolicy::Allow)
        .build();
    let mut agenda = Agenda::new(config).await.unwrap();

    for _ in 0..3 {
        let outcome = agenda.add_event(
            test_event_draft("01/01/2024", "Same", "09:00", Some("10:00")),
            false,
        );
        assert!(matches!(outcome, AddOutcome::Added(_)));
    }
    assert_eq!(agenda.store().len(), 3);
}
