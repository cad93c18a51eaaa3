// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event lifecycle workflow tests.
//!
//! These tests validate the complete lifecycle of events: create, list,
//! detect conflicts, delete, and persist across sessions.

use agenda_core::{AddOutcome, Agenda, LoadReport, SaveOutcome};

use crate::common::{
    assert_day_titles, date, setup_temp_dirs, test_config, test_event_draft, time,
};

#[tokio::test]
async fn event_lifecycle_create_list_delete_persist() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(temp_dirs.state_dir.to_str().unwrap());
    let mut agenda = Agenda::new(config.clone()).await.unwrap();
    assert_eq!(agenda.load_report(), &LoadReport::FirstRun);

    // Act - create events out of order
    agenda.add_event(
        test_event_draft("05/01/2024", "Lunch", "12:00", Some("13:00")),
        false,
    );
    agenda.add_event(
        test_event_draft("05/01/2024", "Standup", "09:00", Some("09:15")),
        false,
    );
    agenda.add_event(test_event_draft("05/02/2024", "Call", "16:00", None), false);

    // Assert - events on a day come back ordered by start time
    assert_day_titles(agenda.store(), &date("05/01/2024"), &["Standup", "Lunch"]);
    assert!(agenda.store().has_event(&date("05/02/2024")));
    assert!(!agenda.store().has_event(&date("05/03/2024")));

    // Act - delete one day and close
    let removed = agenda.store_mut().remove(&date("05/02/2024")).unwrap();
    assert_eq!(removed.len(), 1);
    assert_eq!(agenda.close().await.unwrap(), SaveOutcome::Written(2));

    // Assert - a fresh session sees the same events
    let agenda = Agenda::new(config).await.unwrap();
    assert_eq!(agenda.load_report(), &LoadReport::Loaded(2));
    assert_day_titles(agenda.store(), &date("05/01/2024"), &["Standup", "Lunch"]);
    assert!(!agenda.store().has_event(&date("05/02/2024")));
}

#[tokio::test]
async fn event_lifecycle_conflicts_are_reported() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(temp_dirs.state_dir.to_str().unwrap());
    let mut agenda = Agenda::new(config).await.unwrap();

    agenda.add_event(
        test_event_draft("01/01/2024", "Meeting", "09:00", Some("10:00")),
        false,
    );

    // Touching intervals do not conflict
    let touching = test_event_draft("01/01/2024", "Next", "10:00", Some("11:00"));
    assert!(!agenda.conflicts(&touching));

    // Starting inside an existing event conflicts
    let inside = test_event_draft("01/01/2024", "Overlap", "09:30", Some("10:30"));
    assert!(agenda.conflicts(&inside));

    // Enclosing an existing event conflicts
    let enclosing = test_event_draft("01/01/2024", "Long", "08:00", Some("12:00"));
    assert!(agenda.conflicts(&enclosing));

    // Same interval on another day does not conflict
    let other_day = test_event_draft("01/02/2024", "Meeting", "09:00", Some("10:00"));
    assert!(!agenda.conflicts(&other_day));

    let outcome = agenda.add_event(inside, false);
    assert!(matches!(outcome, AddOutcome::AddedWithConflict(_)));
}

#[tokio::test]
async fn event_lifecycle_point_events() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(temp_dirs.state_dir.to_str().unwrap());
    let mut agenda = Agenda::new(config).await.unwrap();

    agenda.add_event(
        test_event_draft("01/01/2024", "Meeting", "09:00", Some("10:00")),
        false,
    );

    // A point event inside an interval conflicts, at its end it does not
    let store = agenda.store();
    assert!(store.conflicts(&date("01/01/2024"), time("09:30"), None));
    assert!(!store.conflicts(&date("01/01/2024"), time("10:00"), None));

    let outcome = agenda.add_event(test_event_draft("01/01/2024", "Ping", "11:00", None), false);
    let AddOutcome::Added(event) = outcome else {
        panic!("point event should be added without conflict");
    };
    assert!(event.is_point());
    assert_eq!(event.to_string(), "11:00: Ping");
}

#[tokio::test]
async fn event_lifecycle_clear_all_persists_empty_file() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(temp_dirs.state_dir.to_str().unwrap());

    let mut agenda = Agenda::new(config.clone()).await.unwrap();
    agenda.add_event(test_event_draft("01/01/2024", "A", "09:00", None), false);
    agenda.add_event(test_event_draft("02/01/2024", "B", "09:00", None), false);
    agenda.close().await.unwrap();

    let mut agenda = Agenda::new(config.clone()).await.unwrap();
    agenda.store_mut().clear();
    assert_eq!(agenda.close().await.unwrap(), SaveOutcome::Written(0));

    let agenda = Agenda::new(config).await.unwrap();
    assert_eq!(agenda.load_report(), &LoadReport::Loaded(0));
    assert!(agenda.store().is_empty());
}
