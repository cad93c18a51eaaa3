// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use agenda_core::{Agenda, CalendarCursor, DateKey};
use clap::{ArgMatches, Command};

use crate::arg::ViewArgs;
use crate::config::Config;
use crate::render;

#[derive(Debug, Clone, Copy)]
pub struct CmdDay {
    pub date: Option<DateKey>,
    pub offset: i32,
}

impl CmdDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("d")
            .about("Show the events of a day")
            .arg(ViewArgs::date())
            .arg(ViewArgs::offset("days"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: ViewArgs::get_date(matches),
            offset: ViewArgs::get_offset(matches),
        }
    }

    pub async fn run(self, agenda: &mut Agenda, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing day view...");
        self.show(agenda, &mut io::stdout())?;
        Ok(())
    }

    /// Moves the cursor to the requested day and writes its day view.
    pub fn show(self, agenda: &mut Agenda, w: &mut impl io::Write) -> io::Result<()> {
        let cursor = agenda.cursor_mut();
        if let Some(date) = self.date {
            cursor.go_to(date);
        }
        cursor.advance_day(self.offset);

        let key = agenda.cursor().date_key();
        render::write_day(w, &key, agenda.store())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdMonth {
    pub offset: i32,
}

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("m")
            .about("Show the month grid, marking days with events")
            .arg(ViewArgs::offset("months"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            offset: ViewArgs::get_offset(matches),
        }
    }

    pub async fn run(self, agenda: &mut Agenda, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing month view...");
        let today = config
            .highlight_today
            .then(|| CalendarCursor::today().date_key());
        self.show(agenda, today, &mut io::stdout())?;
        Ok(())
    }

    /// Moves the cursor by the offset and writes the month grid.
    pub fn show(
        self,
        agenda: &mut Agenda,
        today: Option<DateKey>,
        w: &mut impl io::Write,
    ) -> io::Result<()> {
        agenda.cursor_mut().advance_month(self.offset);
        render::write_month(w, agenda.cursor(), agenda.store(), today)
    }
}
