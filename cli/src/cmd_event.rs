// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use agenda_core::{AddOutcome, Agenda, DateKey, EventDraft, TimeOfDay};
use clap::{ArgGroup, ArgMatches, Command, arg};
use colored::Colorize;

use crate::arg::{EventArgs, ViewArgs};
use crate::config::Config;
use crate::render;

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub title: String,
    pub date: Option<DateKey>,
    pub start: TimeOfDay,
    pub end: Option<TimeOfDay>,
    pub force: bool,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new event")
            .arg(EventArgs::title())
            .arg(EventArgs::date())
            .arg(EventArgs::start())
            .arg(EventArgs::end())
            .arg(EventArgs::force())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let start = EventArgs::get_start(matches);
        let end = EventArgs::get_end(matches);
        if let Some(end) = end.filter(|end| *end < start) {
            return Err(format!("End time {end} is before start time {start}").into());
        }

        Ok(Self {
            title: EventArgs::get_title(matches),
            date: EventArgs::get_date(matches),
            start,
            end,
            force: EventArgs::get_force(matches),
        })
    }

    pub async fn run(self, agenda: &mut Agenda, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event...");
        let date = self.date.unwrap_or_else(|| agenda.cursor().date_key());
        let draft = EventDraft {
            date,
            title: self.title,
            start: self.start,
            end: self.end,
        };

        match agenda.add_event(draft, self.force) {
            AddOutcome::Added(event) => {
                println!("{} {}  {}", "Added".green(), event.date(), event);
            }
            AddOutcome::AddedWithConflict(event) => {
                println!(
                    "{} the new event overlaps another event on {}",
                    "Warning:".yellow(),
                    event.date()
                );
                println!("{} {}  {}", "Added".green(), event.date(), event);
            }
            AddOutcome::Rejected => {
                return Err(format!(
                    "The event conflicts with another event on {date}, use --force to add it anyway"
                )
                .into());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventList;

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List all events by date")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, agenda: &mut Agenda, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        if agenda.store().is_empty() {
            println!("{}", "No events found".italic());
            return Ok(());
        }

        render::write_list(&mut io::stdout(), agenda.store())?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventDelete {
    /// The date to delete, `None` for all events
    pub date: Option<DateKey>,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete the events of a date, or all events")
            .arg(ViewArgs::date().help("Date whose events are deleted (MM/DD/YYYY)"))
            .arg(arg!(-a --all "Delete all events"))
            .group(
                ArgGroup::new("target")
                    .args(["date", "all"])
                    .required(true),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let date = match matches.get_flag("all") {
            true => None,
            false => ViewArgs::get_date(matches),
        };
        Self { date }
    }

    pub async fn run(self, agenda: &mut Agenda, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting events...");
        let store = agenda.store_mut();
        match self.date {
            Some(date) => match store.remove(&date) {
                Some(events) => println!("Deleted {} event(s) on {date}", events.len()),
                None => println!("{}", format!("No events on {date}").italic()),
            },
            None => {
                let count = store.len();
                store.clear();
                println!("Deleted all {count} event(s)");
            }
        }
        Ok(())
    }
}
