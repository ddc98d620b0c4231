pub mod app;
pub mod clock;
pub mod config;
pub mod editor;
pub mod error;
pub mod grid;
pub mod logging;
pub mod search;
pub mod shortcuts;
pub mod storage;
pub mod theme;
pub mod ui;
pub mod wallpaper;
pub use error::{AppError, AppResult};

use std::sync::Arc;
use std::time::{Duration, Instant};

use app::{App, Command, StartupConfig, UserAction};
use grid::GridAction;
use storage::{JsonFileStore, StoragePaths};
use ui::{TerminalSurface, LAYOUT_TOKENS};
use wallpaper::HttpImageFetcher;

/// Entrypoint used by the binary: builds the page on a terminal surface and
/// applies one command to it.
pub fn run() -> AppResult<()> {
    logging::init();
    let startup = StartupConfig::from_args()?;
    tracing::info!(command = ?startup.command, "starting tabhome");

    let config = config::load_app_config();
    let paths = StoragePaths::with_default_dirs()?;
    let fetch_timeout = Duration::from_secs(config.fetch_timeout_secs());
    let fetcher = HttpImageFetcher::new(fetch_timeout)?;

    let mut app = App::new(
        &config,
        Box::new(JsonFileStore::new(paths.extension_store)),
        Box::new(JsonFileStore::new(paths.local_storage)),
        Arc::new(fetcher),
        TerminalSurface::new(LAYOUT_TOKENS, startup.assume_yes),
    );
    let now = Instant::now();
    app.start(now);

    for action in command_actions(startup.command) {
        app.handle(action, now);
    }

    if let Some(due) = app.renderer().pending() {
        app.tick(due);
    }
    while app.wallpaper().in_flight() > 0 {
        if !app.wait_for_wallpaper(fetch_timeout + Duration::from_secs(1)) {
            break;
        }
    }

    tracing::info!(
        shortcuts = app.registry().len(),
        theme = app.surface().theme().as_str(),
        "done"
    );
    Ok(())
}

fn command_actions(command: Command) -> Vec<UserAction> {
    match command {
        Command::Show => Vec::new(),
        Command::Refresh => vec![UserAction::RefreshWallpaper],
        Command::Add { name, url, icon } => vec![
            UserAction::Grid(GridAction::AddNew),
            UserAction::EditorName(name),
            UserAction::EditorUrl(url),
            UserAction::EditorIcon(icon),
            UserAction::EditorSave,
        ],
        Command::Delete { index } => vec![UserAction::Grid(GridAction::Delete(index))],
        Command::Engine(engine) => vec![UserAction::SelectEngine(engine)],
        Command::Search(query) => vec![UserAction::Search(query)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_command_walks_the_editor_flow() {
        let actions = command_actions(Command::Add {
            name: "Docs".into(),
            url: "docs.rs".into(),
            icon: String::new(),
        });
        assert_eq!(actions.first(), Some(&UserAction::Grid(GridAction::AddNew)));
        assert_eq!(actions.last(), Some(&UserAction::EditorSave));
        assert_eq!(actions.len(), 5);
    }

    #[test]
    fn show_command_has_no_actions() {
        assert!(command_actions(Command::Show).is_empty());
    }
}
