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

use std::path::PathBuf;

/// Rejected edits and lookups on the tabstop model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TabStopError {
    #[error("cursor {cursor} is past the end of the input ({len} chars)")]
    CursorOutOfRange { cursor: usize, len: usize },
    #[error("no inserted character before cursor {cursor}")]
    NoInsertedChar { cursor: usize },
    #[error("unknown completion id `{0}`")]
    UnknownCompletion(String),
}

/// Startup failures surfaced to the user with a dedicated exit code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to read {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} contains no tabstops", path.display())]
    EmptyTabStops { path: PathBuf },
}

impl AppError {
    pub const CONFIG_READ_EXIT_CODE: i32 = 20;
    pub const CONFIG_PARSE_EXIT_CODE: i32 = 21;
    pub const EMPTY_TABSTOPS_EXIT_CODE: i32 = 22;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigRead { .. } => Self::CONFIG_READ_EXIT_CODE,
            Self::ConfigParse { .. } => Self::CONFIG_PARSE_EXIT_CODE,
            Self::EmptyTabStops { .. } => Self::EMPTY_TABSTOPS_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigRead { path, source } => {
                format!("Could not read {}: {source}", path.display())
            }
            Self::ConfigParse { path, source } => {
                format!("{} is not valid JSON for this input: {source}", path.display())
            }
            Self::EmptyTabStops { path } => {
                format!("{} must contain at least one tabstop.", path.display())
            }
        }
    }
}
