// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of the agenda scheduler.

mod arg;
mod cli;
mod cmd_event;
mod cmd_generate_completion;
mod cmd_menu;
mod cmd_view;
mod config;
mod render;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_menu::Menu;
pub use crate::config::Config;
