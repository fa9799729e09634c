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

pub mod completion;
mod dialog;
pub mod edit;
mod keys;
mod state;

pub use dialog::DialogState;
pub use keys::handle_key;
pub use state::App;

use crate::Cli;
use crate::config;
use crate::error::AppError;
use crossterm::event::Event;

/// Build the app from CLI config. Runs before `ratatui::init()` so errors
/// print to stderr normally.
pub fn create_app(cli: &Cli) -> Result<App, AppError> {
    let tab_stops = match cli.tabstops.as_deref() {
        Some(path) => config::load_tab_stops(path)?,
        None => config::default_tab_stops(),
    };
    let completions = match cli.completions.as_deref() {
        Some(path) => config::load_completions(path)?,
        None => Vec::new(),
    };
    Ok(App::new(tab_stops, completions))
}

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    tracing::info!("TUI started: display={:?}", app.display());

    let result = event_loop(&mut terminal, app);

    ratatui::restore();
    tracing::info!("TUI stopped: submitted={}", app.submitted.is_some());
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| crate::ui::render(f, app))?;
        if let Event::Key(key) = crossterm::event::read()? {
            handle_key(app, key);
        }
    }
    Ok(())
}
