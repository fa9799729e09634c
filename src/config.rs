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

use crate::error::AppError;
use crate::tabstop::{CompletionItem, TabStop};
use serde::de::DeserializeOwned;
use std::path::Path;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| AppError::ConfigRead { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw)
        .map_err(|source| AppError::ConfigParse { path: path.to_path_buf(), source })
}

/// Load a JSON array of completion rows.
pub fn load_completions(path: &Path) -> Result<Vec<CompletionItem>, AppError> {
    let completions: Vec<CompletionItem> = read_json(path)?;
    let selectable = completions.iter().filter(|c| c.is_selectable()).count();
    tracing::info!(
        "Loaded {} completions ({selectable} selectable) from {}",
        completions.len(),
        path.display()
    );
    Ok(completions)
}

/// Load a JSON array of tabstops. An empty array is rejected.
pub fn load_tab_stops(path: &Path) -> Result<Vec<TabStop>, AppError> {
    let tab_stops: Vec<TabStop> = read_json(path)?;
    if tab_stops.is_empty() {
        return Err(AppError::EmptyTabStops { path: path.to_path_buf() });
    }
    tracing::info!("Loaded {} tabstops from {}", tab_stops.len(), path.display());
    Ok(tab_stops)
}

/// Starting input when no tabstop file is given: one blank field.
pub fn default_tab_stops() -> Vec<TabStop> {
    vec![TabStop::new(0)]
}
