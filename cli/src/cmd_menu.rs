// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, BufRead, BufReader, Write};

use agenda_core::{
    Agenda, CalendarCursor, ConflictPolicy, DateKey, EventDraft, LoadReport, TimeOfDay,
    parse_time_frame, validate_date_key,
};
use clap::{ArgMatches, Command};

use crate::config::Config;
use crate::render;

const MAIN_PROMPT: &str = "Select one of the following options: \n\
    [L]oad,  [V]iew by,  [C]reate,  [G]o to,  [E]vent list,  [D]elete,  [Q]uit";

#[derive(Debug, Clone, Copy)]
pub struct CmdMenu;

impl CmdMenu {
    pub const NAME: &str = "menu";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Open the interactive menu (default)")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, agenda: &mut Agenda, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!("starting interactive menu...");
        let today = config
            .highlight_today
            .then(|| CalendarCursor::today().date_key());
        let input = BufReader::new(io::stdin());
        Menu::new(agenda, input, io::stdout(), today).run().await?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewKind {
    Day,
    Month,
}

/// Line-oriented interactive menu over a session.
///
/// End of input anywhere is treated as quitting; the caller saves the session.
pub struct Menu<'a, R, W> {
    agenda: &'a mut Agenda,
    input: R,
    output: W,
    today: Option<DateKey>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(agenda: &'a mut Agenda, input: R, output: W, today: Option<DateKey>) -> Self {
        Self {
            agenda,
            input,
            output,
            today,
        }
    }

    pub async fn run(mut self) -> io::Result<()> {
        self.print_month()?;
        writeln!(self.output)?;
        match self.agenda.load_report() {
            LoadReport::Loaded(_) => writeln!(self.output, "Events successfully loaded.\n")?,
            LoadReport::FirstRun => writeln!(self.output, "First run. No events found.\n")?,
            LoadReport::Failed(reason) => {
                writeln!(self.output, "Failed to load events: {reason}\n")?;
            }
        }

        loop {
            writeln!(self.output, "{MAIN_PROMPT}")?;
            let Some(option) = self.read_line()? else {
                break;
            };

            let flow = match option.to_lowercase().as_str() {
                "l" => self.load().await?,
                "v" => self.view()?,
                "c" => self.create()?,
                "g" => self.go_to()?,
                "e" => self.list()?,
                "d" => self.delete()?,
                "q" => Flow::Quit,
                _ => {
                    writeln!(self.output, "Invalid option.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        tracing::debug!("leaving interactive menu");
        self.output.flush()
    }

    async fn load(&mut self) -> io::Result<Flow> {
        match self.agenda.reload().await {
            LoadReport::Loaded(_) => writeln!(self.output, "\nEvents successfully loaded.\n")?,
            LoadReport::FirstRun => writeln!(self.output, "First run. No events found.\n")?,
            LoadReport::Failed(reason) => {
                writeln!(self.output, "Failed to load events: {reason}\n")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn view(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "[D]ay view or [M]onth view?")?;
        let Some(option) = self.choose(&["d", "m"], "Please enter 'D' or 'M'.")? else {
            return Ok(Flow::Quit);
        };

        match option.as_str() {
            "d" => {
                self.print_day()?;
                self.navigate(ViewKind::Day)
            }
            _ => {
                self.print_month()?;
                self.navigate(ViewKind::Month)
            }
        }
    }

    fn navigate(&mut self, kind: ViewKind) -> io::Result<Flow> {
        loop {
            writeln!(self.output, "\n[P]revious, [N]ext, or [M]ain menu?")?;
            let Some(option) = self.choose(&["p", "n", "m"], "Please enter 'P', 'N', or 'M'.")?
            else {
                return Ok(Flow::Quit);
            };

            let delta = match option.as_str() {
                "p" => -1,
                "n" => 1,
                _ => return Ok(Flow::Continue),
            };

            match kind {
                ViewKind::Day => {
                    self.agenda.cursor_mut().advance_day(delta);
                    self.print_day()?;
                }
                ViewKind::Month => {
                    self.agenda.cursor_mut().advance_month(delta);
                    self.print_month()?;
                }
            }
        }
    }

    fn create(&mut self) -> io::Result<Flow> {
        write!(self.output, "Title: ")?;
        let Some(title) = self.read_line()? else {
            return Ok(Flow::Quit);
        };
        let Some(date) = self.read_date()? else {
            return Ok(Flow::Quit);
        };
        let Some((start, end)) = self.read_time_frame()? else {
            return Ok(Flow::Quit);
        };

        let draft = EventDraft {
            date,
            title,
            start,
            end,
        };

        let mut force = false;
        let policy = self.agenda.config().on_conflict;
        if policy != ConflictPolicy::Allow && self.agenda.conflicts(&draft) {
            writeln!(
                self.output,
                "This event conflicts with another event on {date}."
            )?;
            write!(self.output, "Add it anyway? [y/N] ")?;
            let Some(answer) = self.read_line()? else {
                return Ok(Flow::Quit);
            };
            if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
                writeln!(self.output, "Event discarded.\n")?;
                return Ok(Flow::Continue);
            }
            force = true;
        }

        self.agenda.add_event(draft, force);
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn go_to(&mut self) -> io::Result<Flow> {
        let Some(date) = self.read_date()? else {
            return Ok(Flow::Quit);
        };
        self.agenda.cursor_mut().go_to(date);
        self.print_day()?;
        self.navigate(ViewKind::Day)
    }

    fn list(&mut self) -> io::Result<Flow> {
        writeln!(self.output)?;
        render::write_list(&mut self.output, self.agenda.store())?;
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "[S]elected or [A]ll?")?;
        let Some(option) = self.choose(&["s", "a"], "Please enter 'S' or 'A'.")? else {
            return Ok(Flow::Quit);
        };

        if option == "s" {
            let Some(date) = self.read_date()? else {
                return Ok(Flow::Quit);
            };
            self.agenda.store_mut().remove(&date);
        } else {
            self.agenda.store_mut().clear();
        }
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn print_day(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        let key = self.agenda.cursor().date_key();
        render::write_day(&mut self.output, &key, self.agenda.store())
    }

    fn print_month(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        render::write_month(
            &mut self.output,
            self.agenda.cursor(),
            self.agenda.store(),
            self.today,
        )?;
        self.agenda.cursor_mut().reset_month_changed();
        Ok(())
    }

    /// Reads one option, repeating until it is one of `options`.
    fn choose(&mut self, options: &[&str], hint: &str) -> io::Result<Option<String>> {
        loop {
            let Some(option) = self.read_line()? else {
                return Ok(None);
            };
            let option = option.to_lowercase();
            if options.contains(&option.as_str()) {
                return Ok(Some(option));
            }
            writeln!(self.output, "Invalid option. {hint}")?;
        }
    }

    fn read_date(&mut self) -> io::Result<Option<DateKey>> {
        loop {
            write!(self.output, "Date (MM/DD/YYYY): ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match validate_date_key(&line) {
                Ok(date) => return Ok(Some(date)),
                Err(_) => writeln!(self.output, "Invalid date format. Use MM/DD/YYYY.")?,
            }
        }
    }

    /// Reads `HH:MM` or `HH:MM-HH:MM`, repeating until the end is not before the start.
    fn read_time_frame(&mut self) -> io::Result<Option<(TimeOfDay, Option<TimeOfDay>)>> {
        loop {
            write!(self.output, "Time (HH:MM or HH:MM-HH:MM): ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_time_frame(&line) {
                Ok((start, Some(end))) if end < start => {
                    writeln!(self.output, "End time must not be before {start}.")?;
                }
                Ok(frame) => return Ok(Some(frame)),
                Err(_) => writeln!(self.output, "Invalid time format. Use HH:MM or HH:MM-HH:MM.")?,
            }
        }
    }

    /// Reads one trimmed line, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line.trim().to_string())),
        }
    }
}
