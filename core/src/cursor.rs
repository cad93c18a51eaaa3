// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The navigable "current date" of a session.
//!
//! Months are zero-based here, as in the month grid, while [`DateKey`] uses
//! one-based months.

use chrono::{Datelike, Local, NaiveDate, TimeDelta};

use crate::DateKey;
use crate::error::{Error, Result};

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the zero-based `month0` of `year`.
///
/// # Panics
///
/// Panics if `month0` is greater than 11.
pub fn actual_max_day(year: i32, month0: u32) -> u32 {
    match month0 {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        _ => panic!("month {month0} is out of range (0..=11)"),
    }
}

/// Day of week of a date in the proleptic Gregorian calendar, Sunday being 0.
pub fn weekday_of(year: i32, month0: u32, day: u32) -> Result<u32> {
    if month0 > 11 {
        return Err(Error::MonthOutOfRange(month0));
    }
    if NaiveDate::from_ymd_opt(year, month0 + 1, 1).is_none() {
        return Err(Error::YearOutOfRange(year));
    }
    NaiveDate::from_ymd_opt(year, month0 + 1, day)
        .map(|d| d.weekday().num_days_from_sunday())
        .ok_or(Error::DayOutOfRange {
            year,
            month: month0 + 1,
            day,
            max: actual_max_day(year, month0),
        })
}

/// A mutable date pointer with day- and month-granularity navigation.
///
/// The selected day always lies within the current month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCursor {
    year: i32,
    month: u32,
    day: u32,
    max_day: u32,
    month_changed: bool,
}

impl CalendarCursor {
    /// A cursor at today's local date.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
            max_day: actual_max_day(date.year(), date.month0()),
            month_changed: false,
        }
    }

    /// A cursor at the given zero-based month and day.
    ///
    /// The year must lie within the range chrono can represent.
    pub fn new(year: i32, month0: u32, day: u32) -> Result<Self> {
        if month0 > 11 {
            return Err(Error::MonthOutOfRange(month0));
        }
        if NaiveDate::from_ymd_opt(year, month0 + 1, 1).is_none() {
            return Err(Error::YearOutOfRange(year));
        }
        let mut cursor = Self {
            year,
            month: month0,
            day: 1,
            max_day: actual_max_day(year, month0),
            month_changed: false,
        };
        cursor.set_day(day)?;
        Ok(cursor)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Length of the current month.
    pub fn max_day(&self) -> u32 {
        self.max_day
    }

    /// Selects a day within the current month.
    pub fn set_day(&mut self, day: u32) -> Result<()> {
        if day < 1 || day > self.max_day {
            return Err(Error::DayOutOfRange {
                year: self.year,
                month: self.month + 1,
                day,
                max: self.max_day,
            });
        }
        self.day = day;
        Ok(())
    }

    /// Jumps to the day named by `key`.
    pub fn go_to(&mut self, key: DateKey) {
        let month_changed = key.year() != self.year || key.month() - 1 != self.month;
        *self = Self {
            month_changed: self.month_changed || month_changed,
            ..Self::from_date(key.date())
        };
    }

    /// Moves by `delta` months, rolling the year over at the boundaries.
    ///
    /// The selected day is clamped to the new month's length. Moves past the
    /// first or last representable month stop there.
    pub fn advance_month(&mut self, delta: i32) {
        if delta == 0 {
            return;
        }

        let first = (NaiveDate::MIN.year(), NaiveDate::MIN.month0());
        let last = (NaiveDate::MAX.year(), NaiveDate::MAX.month0());
        let total = i64::from(self.year) * 12 + i64::from(self.month) + i64::from(delta);
        let (year, month) = match i32::try_from(total.div_euclid(12)) {
            Ok(year) => (year, total.rem_euclid(12) as u32),
            Err(_) if delta > 0 => last,
            Err(_) => first,
        };
        let (year, month) = (year, month).clamp(first, last);

        self.year = year;
        self.month = month;
        self.max_day = actual_max_day(year, month);
        self.day = self.day.min(self.max_day);
        self.month_changed = true;
    }

    /// Moves by `delta` days, wrapping into the adjacent month as needed.
    ///
    /// Moves past the first or last representable day stop there.
    pub fn advance_day(&mut self, delta: i32) {
        if delta == 0 {
            return;
        }

        let date = self.date();
        let target = date
            .checked_add_signed(TimeDelta::days(i64::from(delta)))
            .unwrap_or(if delta > 0 { NaiveDate::MAX } else { NaiveDate::MIN });
        let month_changed = target.year() != date.year() || target.month0() != date.month0();
        *self = Self {
            month_changed: self.month_changed || month_changed,
            ..Self::from_date(target)
        };
    }

    /// The selected day as a date key.
    pub fn date_key(&self) -> DateKey {
        DateKey::from(self.date())
    }

    pub fn date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
            .expect("cursor day must lie within its month")
    }

    /// Day of week of the selected day, Sunday being 0.
    pub fn weekday(&self) -> u32 {
        self.date().weekday().num_days_from_sunday()
    }

    /// Number of blank cells before day 1 in a Sunday-first month grid.
    pub fn leading_blanks(&self) -> u32 {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
            .expect("day 1 exists in every month")
            .weekday()
            .num_days_from_sunday()
    }

    /// Whether the month changed since the last [`Self::reset_month_changed`].
    pub fn month_changed(&self) -> bool {
        self.month_changed
    }

    pub fn reset_month_changed(&mut self) {
        self.month_changed = false;
    }
}
