// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of a personal scheduler: date-keyed events with conflict detection,
//! a navigable calendar cursor, and JSON persistence.

mod agenda;
mod config;
mod cursor;
mod date;
mod error;
mod event;
mod persist;
mod store;
mod time;
mod validate;

pub use crate::agenda::{AddOutcome, Agenda, LoadReport};
pub use crate::config::{APP_NAME, Config, ConflictPolicy, EVENTS_FILE_NAME};
pub use crate::cursor::{CalendarCursor, actual_max_day, is_leap_year, weekday_of};
pub use crate::date::{DateKey, format_long, format_month_title, month_name, weekday_name};
pub use crate::error::{Error, Result};
pub use crate::event::{Event, EventDraft};
pub use crate::persist::{EventFile, SaveOutcome};
pub use crate::store::{EventMap, EventStore};
pub use crate::time::{TimeOfDay, compare_times, to_minutes};
pub use crate::validate::{parse_time_frame, validate_date_key, validate_end_time, validate_time};
