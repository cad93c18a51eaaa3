// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date keys and human-readable date rendering.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::{Error, Result};

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar day, written as `MM/DD/YYYY` at the storage and UI boundary.
///
/// Month and day are zero-padded, the year is not. Keys order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Creates a key from a one-based month and day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| Error::InvalidDate(format!("{month:02}/{day:02}/{year}")))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// One-based month.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Day of week with Sunday as 0.
    pub fn weekday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<DateKey> for NaiveDate {
    fn from(key: DateKey) -> Self {
        key.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.month(), self.day(), self.year())
    }
}

impl FromStr for DateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDate(s.to_string());

        let mut parts = s.split('/');
        let (Some(month), Some(day), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let is_numeric = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
        if month.len() != 2 || day.len() != 2 || !is_numeric(month) || !is_numeric(day) {
            return Err(invalid());
        }
        if !is_numeric(year) {
            return Err(invalid());
        }

        let month = month.parse().map_err(|_| invalid())?;
        let day = day.parse().map_err(|_| invalid())?;
        let year = year.parse().map_err(|_| invalid())?;
        Self::from_ymd(year, month, day).map_err(|_| invalid())
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct DateKeyVisitor;

        impl de::Visitor<'_> for DateKeyVisitor {
            type Value = DateKey;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a date string like \"01/31/2024\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<DateKey, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DateKeyVisitor)
    }
}

/// Full English weekday name, Sunday being 0.
///
/// # Panics
///
/// Panics if `weekday` is greater than 6.
pub fn weekday_name(weekday: u32) -> &'static str {
    WEEKDAY_NAMES[weekday as usize]
}

/// Full English month name for a zero-based month.
///
/// # Panics
///
/// Panics if `month0` is greater than 11.
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES[month0 as usize]
}

/// Renders a key as `"Monday, January 1, 2024"`.
pub fn format_long(key: &DateKey) -> String {
    format!(
        "{}, {} {}, {}",
        weekday_name(key.weekday()),
        month_name(key.month() - 1),
        key.day(),
        key.year()
    )
}

/// Renders a month heading as `"January 2024"`.
pub fn format_month_title(year: i32, month0: u32) -> String {
    format!("{} {}", month_name(month0), year)
}
