// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar navigation workflow tests.
//!
//! These tests walk the session cursor across days and months and look up
//! events on the selected day.

use agenda_core::{Agenda, CalendarCursor, format_long, format_month_title};

use crate::common::{assert_day_titles, date, setup_temp_dirs, test_config, test_event_draft};

#[tokio::test]
async fn navigation_day_view_follows_cursor() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(temp_dirs.state_dir.to_str().unwrap());
    let mut agenda = Agenda::new(config).await.unwrap();

    agenda.add_event(test_event_draft("12/31/2023", "Party", "21:00", None), false);
    agenda.add_event(
        test_event_draft("01/01/2024", "Brunch", "11:00", Some("13:00")),
        false,
    );

    agenda.cursor_mut().go_to(date("12/31/2023"));
    let key = agenda.cursor().date_key();
    assert_eq!(format_long(&key), "Sunday, December 31, 2023");
    assert_day_titles(agenda.store(), &key, &["Party"]);

    agenda.cursor_mut().reset_month_changed();
    agenda.cursor_mut().advance_day(1);
    let key = agenda.cursor().date_key();
    assert!(agenda.cursor().month_changed());
    assert_eq!(format_long(&key), "Monday, January 1, 2024");
    assert_day_titles(agenda.store(), &key, &["Brunch"]);

    agenda.cursor_mut().advance_day(1);
    assert!(agenda.store().events_on(&agenda.cursor().date_key()).is_empty());
}

#[test]
fn navigation_month_view_marks_event_days() {
    let mut cursor = CalendarCursor::new(2024, 0, 15).unwrap();
    cursor.advance_month(1);
    assert_eq!(
        format_month_title(cursor.year(), cursor.month()),
        "February 2024"
    );
    assert_eq!(cursor.max_day(), 29);
    assert_eq!(cursor.leading_blanks(), 4);

    cursor.advance_month(11);
    assert_eq!(
        format_month_title(cursor.year(), cursor.month()),
        "January 2025"
    );
    assert_eq!(cursor.day(), 15);
}
