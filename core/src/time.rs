// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Time-of-day values and their total order.
//!
//! Times are compared as `(hour, minute)` integer pairs, never as strings, and
//! converted to minutes past midnight for overlap arithmetic.

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::{Error, Result};

/// A wall-clock time in 24-hour `HH:MM` form, without seconds or time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Creates a time from its parts, rejecting hours above 23 and minutes above 59.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes past midnight, `hour * 60 + minute`.
    pub fn minutes(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    /// Parses exactly five characters `HH:MM` with numeric components.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidTime(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }

        let digit = |i: usize| match bytes[i] {
            b @ b'0'..=b'9' => Ok(u32::from(b - b'0')),
            _ => Err(invalid()),
        };
        let hour = digit(0)? * 10 + digit(1)?;
        let minute = digit(3)? * 10 + digit(4)?;
        Self::from_hm(hour, minute).map_err(|_| invalid())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Converts an `HH:MM` string to minutes past midnight.
pub fn to_minutes(time: &str) -> Result<u32> {
    time.parse::<TimeOfDay>().map(|t| t.minutes())
}

/// Compares two `HH:MM` strings by hour, then minute.
pub fn compare_times(a: &str, b: &str) -> Result<Ordering> {
    let a: TimeOfDay = a.parse()?;
    let b: TimeOfDay = b.parse()?;
    Ok(a.cmp(&b))
}
