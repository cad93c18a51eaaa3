// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use agenda_core::{APP_NAME, Agenda, ConflictPolicy, LoadReport, SaveOutcome};
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_event::{CmdEventDelete, CmdEventList, CmdEventNew};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_menu::CmdMenu;
use crate::cmd_view::{CmdDay, CmdMonth};
use crate::config::{Config, parse_config};

/// Run the agenda command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Overrides the conflict policy of the configuration file
    pub on_conflict: Option<ConflictPolicy>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("A personal scheduler: events by day, month grids and conflict checks.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to the menu
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/agenda/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/agenda/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .arg(
                arg!(--"on-conflict" <POLICY> "How to treat a new event that overlaps another")
                    .value_parser(value_parser!(ConflictPolicy))
                    .global(true),
            )
            .subcommand(CmdMenu::command())
            .subcommand(CmdEventNew::command())
            .subcommand(CmdDay::command())
            .subcommand(CmdMonth::command())
            .subcommand(CmdEventList::command())
            .subcommand(CmdEventDelete::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdMenu::NAME, matches)) => Menu(CmdMenu::from(matches)),
            Some((CmdEventNew::NAME, matches)) => New(CmdEventNew::from(matches)?),
            Some((CmdDay::NAME, matches)) => Day(CmdDay::from(matches)),
            Some((CmdMonth::NAME, matches)) => Month(CmdMonth::from(matches)),
            Some((CmdEventList::NAME, matches)) => List(CmdEventList::from(matches)),
            Some((CmdEventDelete::NAME, matches)) => Delete(CmdEventDelete::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Menu(CmdMenu),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        // global args are propagated to the subcommand matches
        let global = match matches.subcommand() {
            Some((_, sub)) => sub,
            None => &matches,
        };
        let config = global.get_one("config").cloned();
        let on_conflict = global.get_one("on-conflict").copied();
        Ok(Cli {
            config,
            on_conflict,
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config, self.on_conflict).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Open the interactive menu
    Menu(CmdMenu),

    /// Add a new event
    New(CmdEventNew),

    /// Show the events of a day
    Day(CmdDay),

    /// Show a month grid
    Month(CmdMonth),

    /// List all events
    List(CmdEventList),

    /// Delete the events of a date, or all events
    Delete(CmdEventDelete),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(
        self,
        config: Option<PathBuf>,
        on_conflict: Option<ConflictPolicy>,
    ) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        let c = (config, on_conflict, self.warns_on_failed_load());
        match self {
            Menu(a)   => Self::run_with(c, |x, y| a.run(x, y).boxed()).await,
            New(a)    => Self::run_with(c, |x, y| a.run(x, y).boxed()).await,
            Day(a)    => Self::run_with(c, |x, y| a.run(x, y).boxed()).await,
            Month(a)  => Self::run_with(c, |x, y| a.run(x, y).boxed()).await,
            List(a)   => Self::run_with(c, |x, y| a.run(x, y).boxed()).await,
            Delete(a) => Self::run_with(c, |x, y| a.run(x, y).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    /// The menu reports load failures itself.
    fn warns_on_failed_load(&self) -> bool {
        !matches!(self, Commands::Menu(_))
    }

    async fn run_with<F>(
        (config, on_conflict, warn_on_failed_load): (Option<PathBuf>, Option<ConflictPolicy>, bool),
        f: F,
    ) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut Agenda, &'a Config) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let (mut core_config, config) = parse_config(config).await?;
        if let Some(policy) = on_conflict {
            core_config.on_conflict = policy;
        }

        let mut agenda = Agenda::new(core_config).await?;
        if let LoadReport::Failed(reason) = agenda.load_report()
            && warn_on_failed_load
        {
            println!(
                "{} failed to load events from {}: {}",
                "Warning:".yellow(),
                agenda.file().path().display(),
                reason
            );
        }

        f(&mut agenda, &config).await?;

        match agenda.close().await? {
            SaveOutcome::Written(count) => tracing::debug!(count, "events saved"),
            SaveOutcome::Skipped => tracing::debug!("nothing to save"),
        }
        Ok(())
    }
}
