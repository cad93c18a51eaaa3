// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Validation of user-typed dates and times, for front ends to call before
//! handing values to the store.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::{DateKey, TimeOfDay};

/// Validates a `MM/DD/YYYY` date typed by the user.
pub fn validate_date_key(s: &str) -> Result<DateKey> {
    const RE: &str = r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/[0-9]{4}$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

    let s = s.trim();
    if !re.is_match(s) {
        return Err(Error::InvalidDate(s.to_string()));
    }
    s.parse()
}

/// Validates a 24-hour `HH:MM` time typed by the user, accepting a one-digit hour.
pub fn validate_time(s: &str) -> Result<TimeOfDay> {
    const RE: &str = r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

    let s = s.trim();
    if !re.is_match(s) {
        return Err(Error::InvalidTime(s.to_string()));
    }

    match s.len() {
        4 => format!("0{s}").parse(),
        _ => s.parse(),
    }
}

/// Parses a time frame, either `HH:MM` or `HH:MM-HH:MM`.
pub fn parse_time_frame(s: &str) -> Result<(TimeOfDay, Option<TimeOfDay>)> {
    match s.trim().split_once('-') {
        Some((start, end)) => Ok((validate_time(start)?, Some(validate_time(end)?))),
        None => Ok((validate_time(s)?, None)),
    }
}

/// Parses an optional end time, where an empty string means a point event.
pub fn validate_end_time(s: &str) -> Result<Option<TimeOfDay>> {
    match s.trim() {
        "" => Ok(None),
        t => validate_time(t).map(Some),
    }
}
