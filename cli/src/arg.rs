// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use agenda_core::{DateKey, TimeOfDay, validate_date_key, validate_time};
use clap::{Arg, ArgMatches, arg, value_parser};

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn title() -> Arg {
        arg!(title: <TITLE> "Title of the event")
    }

    pub fn get_title(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("title")
            .expect("title is required")
            .clone()
    }

    pub fn date() -> Arg {
        arg!(-d --date <DATE> "Date of the event (MM/DD/YYYY), defaults to today")
            .value_parser(validate_date_key)
    }

    pub fn get_date(matches: &ArgMatches) -> Option<DateKey> {
        matches.get_one("date").copied()
    }

    pub fn start() -> Arg {
        arg!(-s --start <START> "Start time (HH:MM)")
            .required(true)
            .value_parser(validate_time)
    }

    pub fn get_start(matches: &ArgMatches) -> TimeOfDay {
        *matches
            .get_one::<TimeOfDay>("start")
            .expect("start is required")
    }

    pub fn end() -> Arg {
        arg!(-e --end <END> "End time (HH:MM), omit for a point event")
            .value_parser(validate_time)
    }

    pub fn get_end(matches: &ArgMatches) -> Option<TimeOfDay> {
        matches.get_one("end").copied()
    }

    pub fn force() -> Arg {
        arg!(-f --force "Add the event even if it conflicts with another one")
    }

    pub fn get_force(matches: &ArgMatches) -> bool {
        matches.get_flag("force")
    }
}

/// Largest offset accepted by the view commands.
pub const MAX_OFFSET: i64 = 1_000_000;

#[derive(Debug, Clone, Copy)]
pub struct ViewArgs;

impl ViewArgs {
    pub fn date() -> Arg {
        arg!(date: [DATE] "Date to show (MM/DD/YYYY), defaults to today")
            .value_parser(validate_date_key)
    }

    pub fn get_date(matches: &ArgMatches) -> Option<DateKey> {
        matches.get_one("date").copied()
    }

    pub fn offset(unit: &str) -> Arg {
        arg!(-o --offset <N>)
            .help(format!("Number of {unit} to move from the date, may be negative"))
            .value_parser(value_parser!(i32).range(-MAX_OFFSET..=MAX_OFFSET))
            .allow_negative_numbers(true)
            .default_value("0")
    }

    pub fn get_offset(matches: &ArgMatches) -> i32 {
        matches.get_one("offset").copied().unwrap_or(0)
    }
}
