// TUI module: the interactive search screen
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::{App, Focus};
use terminal::TerminalManager;

use crate::search::SearchService;

/// Run the interactive search screen until the user quits
pub fn run_interactive(service: SearchService, initial_query: Option<String>) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let mut app = App::new(service);
    if let Some(query) = initial_query {
        app = app.with_query(query);
    }

    let res = app.run(manager.terminal_mut());
    let restored = manager.restore();
    app_error_first(res, restored)
}

/// A failed restore is reported only when the app itself succeeded
fn app_error_first(res: Result<()>, restored: Result<()>) -> Result<()> {
    res?;
    restored
}
