// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the agenda core.
#[derive(Debug, Error)]
pub enum Error {
    /// A time-of-day string is not in `HH:MM` form.
    #[error("invalid time `{0}`, expected HH:MM")]
    InvalidTime(String),

    /// A date-key string is not in `MM/DD/YYYY` form, or names a day that does not exist.
    #[error("invalid date `{0}`, expected MM/DD/YYYY")]
    InvalidDate(String),

    /// A day number outside the selected month.
    #[error("day {day} is out of range for {year}-{month:02} (1..={max})")]
    DayOutOfRange {
        year: i32,
        month: u32,
        day: u32,
        max: u32,
    },

    /// A year outside the range of representable dates.
    #[error("year {0} is out of range")]
    YearOutOfRange(i32),

    /// A zero-based month number greater than 11.
    #[error("month {0} is out of range (0..=11)")]
    MonthOutOfRange(u32),

    /// The event file could not be read or written.
    #[error("failed to access event file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The event file exists but cannot be decoded.
    #[error("event file {} is corrupted: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// The configuration cannot be resolved.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error is one of the malformed time/date kinds.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::InvalidTime(_) | Error::InvalidDate(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
