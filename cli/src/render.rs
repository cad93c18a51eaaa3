// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use agenda_core::{CalendarCursor, DateKey, EventStore, format_long, format_month_title};
use chrono::{Datelike, Duration};

const WEEKDAY_HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa";

/// Writes the month grid of the cursor's month.
///
/// Days with events, and `today` if given, are bracketed.
pub fn write_month(
    w: &mut impl Write,
    cursor: &CalendarCursor,
    store: &EventStore,
    today: Option<DateKey>,
) -> io::Result<()> {
    writeln!(w, "{}", format_month_title(cursor.year(), cursor.month()))?;
    writeln!(w, "{WEEKDAY_HEADER}")?;

    let blanks = cursor.leading_blanks();
    for _ in 0..blanks {
        write!(w, "    ")?;
    }

    let max_day = cursor.max_day();
    let first = cursor.date() - Duration::days(i64::from(cursor.day()) - 1);
    let mut cell = blanks;
    for date in first.iter_days().take(max_day as usize) {
        let key = DateKey::from(date);
        let day = date.day();
        if store.has_event(&key) || today == Some(key) {
            write!(w, "[{day:2}]")?;
        } else {
            write!(w, "{day:3} ")?;
        }

        cell += 1;
        if cell == 7 && day != max_day {
            cell = 0;
            writeln!(w)?;
        }
    }
    writeln!(w)
}

/// Writes the long date heading followed by the events of that day.
pub fn write_day(w: &mut impl Write, key: &DateKey, store: &EventStore) -> io::Result<()> {
    writeln!(w, "{}", format_long(key))?;
    for event in store.events_on(key) {
        writeln!(w, "\t{event}")?;
    }
    Ok(())
}

/// Writes every event, grouped by date in chronological order.
pub fn write_list(w: &mut impl Write, store: &EventStore) -> io::Result<()> {
    for (date, events) in store.iter() {
        writeln!(w, "{}", format_long(date))?;
        for event in events {
            writeln!(w, "\t{event}")?;
        }
    }
    Ok(())
}
