// tabstop-complete - Tabstop-aware autocomplete input for the terminal
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

pub mod app;
pub mod config;
pub mod error;
pub mod tabstop;
pub mod ui;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tabstop-complete", about = "Fill structured key:value input with completions")]
pub struct Cli {
    /// JSON array of completion items (`id`, `title`, `type`, `description`, `header`)
    #[arg(long, short)]
    pub completions: Option<std::path::PathBuf>,

    /// JSON array of starting tabstops (`Index`, `Label`, `Value`, `CursorPosition`)
    #[arg(long, short)]
    pub tabstops: Option<std::path::PathBuf>,

    /// Print the starting display string and exit without opening the TUI
    #[arg(long)]
    pub print: bool,

    /// Write tracing output to this file (tracing is disabled without it)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives, overrides `RUST_LOG`
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}
