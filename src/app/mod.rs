use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use crate::clock::Clock;
use crate::config::AppConfig;
use crate::editor::{SaveOutcome, ShortcutEditor};
use crate::grid::{GridAction, GridRenderer};
use crate::search::{search_url, SearchPreference};
use crate::shortcuts::ShortcutRegistry;
use crate::storage::{KeyValueStore, LocalCache};
use crate::ui::PageSurface;
use crate::wallpaper::{
    load_wallpaper, ImageFetcher, WallpaperOutcome, WallpaperPipeline, WallpaperRequest,
    WallpaperSource,
};

mod actions;
mod startup;
mod worker;

pub use actions::{UserAction, DELETE_CONFIRM_MESSAGE};
pub use startup::{Command, StartupConfig};

use self::worker::spawn_worker_action;

/// Composition root of the new-tab page.
///
/// Owns every piece of mutable page state and is driven from a single event
/// thread: user actions go through [`App::handle`], timers and worker results
/// through [`App::tick`]. Only the wallpaper fetch leaves this thread.
pub struct App<S: PageSurface> {
    registry: ShortcutRegistry,
    renderer: GridRenderer,
    editor: ShortcutEditor,
    wallpaper: WallpaperPipeline,
    cache: LocalCache,
    search: SearchPreference,
    clock: Clock,
    fetcher: Arc<dyn ImageFetcher>,
    completions_tx: mpsc::Sender<WallpaperOutcome>,
    completions_rx: mpsc::Receiver<WallpaperOutcome>,
    surface: S,
}

impl<S: PageSurface> App<S> {
    pub fn new(
        config: &AppConfig,
        extension_store: Box<dyn KeyValueStore>,
        local_store: Box<dyn KeyValueStore>,
        fetcher: Arc<dyn ImageFetcher>,
        surface: S,
    ) -> Self {
        let cache = LocalCache::new(local_store);
        let search = SearchPreference::load(&cache);
        let (completions_tx, completions_rx) = mpsc::channel();
        Self {
            registry: ShortcutRegistry::load(extension_store),
            renderer: GridRenderer::default(),
            editor: ShortcutEditor::new(),
            wallpaper: WallpaperPipeline::new(
                WallpaperSource::from_config(config),
                config.fallback_background(),
            ),
            cache,
            search,
            clock: Clock::new(),
            fetcher,
            completions_tx,
            completions_rx,
            surface,
        }
    }

    pub fn registry(&self) -> &ShortcutRegistry {
        &self.registry
    }

    pub fn renderer(&self) -> &GridRenderer {
        &self.renderer
    }

    pub fn editor(&self) -> &ShortcutEditor {
        &self.editor
    }

    pub fn wallpaper(&self) -> &WallpaperPipeline {
        &self.wallpaper
    }

    pub fn search(&self) -> &SearchPreference {
        &self.search
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Draws the clock, the grid and the cached wallpaper, fetching one only
    /// when the cache is empty.
    pub fn start(&mut self, now: Instant) {
        tracing::info!(
            shortcuts = self.registry.len(),
            engine = self.search.engine().id(),
            "starting new tab page"
        );
        self.clock.paint_now(&mut self.surface);
        self.renderer
            .request_render(now, &self.registry, &mut self.surface);
        if let Some(request) = self.wallpaper.initialize(&self.cache, &mut self.surface) {
            self.spawn_wallpaper_fetch(request);
        }
    }

    pub fn handle(&mut self, action: UserAction, now: Instant) {
        tracing::debug!(?action, "handling user action");
        match action {
            UserAction::Grid(GridAction::Open(url)) => self.surface.navigate(&url),
            UserAction::Grid(GridAction::Delete(index)) => self.delete_shortcut(index, now),
            UserAction::Grid(GridAction::AddNew) => {
                if let Err(err) = self.editor.open(&mut self.surface) {
                    tracing::debug!(?err, "ignored editor open");
                }
            }
            UserAction::EditorName(text) => self.editor.set_name(&text),
            UserAction::EditorUrl(text) => self.editor.set_url(&text),
            UserAction::EditorIcon(text) => self.editor.set_icon(&text, &mut self.surface),
            UserAction::EditorSave => {
                match self.editor.save(&mut self.registry, &mut self.surface) {
                    Ok(SaveOutcome::Saved(_)) => {
                        self.renderer
                            .request_render(now, &self.registry, &mut self.surface);
                    }
                    Ok(SaveOutcome::Rejected(_)) => {}
                    Err(err) => tracing::debug!(?err, "ignored editor save"),
                }
            }
            UserAction::EditorCancel => {
                if let Err(err) = self.editor.cancel(&mut self.surface) {
                    tracing::debug!(?err, "ignored editor cancel");
                }
            }
            UserAction::EditorDismissOutside => {
                if let Err(err) = self.editor.dismiss_outside(&mut self.surface) {
                    tracing::debug!(?err, "ignored editor dismissal");
                }
            }
            UserAction::RefreshWallpaper => {
                let request = self.wallpaper.refresh(true, &mut self.surface);
                self.spawn_wallpaper_fetch(request);
            }
            UserAction::SelectEngine(engine) => self.search.set(engine, &self.cache),
            UserAction::Search(query) => {
                if let Some(url) = search_url(self.search.engine(), &query) {
                    self.surface.navigate(&url);
                }
            }
        }
    }

    /// Advances the clock, runs a due deferred render and applies finished
    /// wallpaper loads.
    pub fn tick(&mut self, now: Instant) {
        self.clock.paint_now(&mut self.surface);
        self.renderer.tick(now, &self.registry, &mut self.surface);
        while let Ok(outcome) = self.completions_rx.try_recv() {
            self.wallpaper
                .complete(outcome, &self.cache, &mut self.surface);
        }
    }

    /// Blocks until one wallpaper load finishes or `timeout` passes. Returns
    /// whether a load was applied.
    pub fn wait_for_wallpaper(&mut self, timeout: Duration) -> bool {
        if self.wallpaper.in_flight() == 0 {
            return false;
        }
        match self.completions_rx.recv_timeout(timeout) {
            Ok(outcome) => {
                self.wallpaper
                    .complete(outcome, &self.cache, &mut self.surface);
                true
            }
            Err(err) => {
                tracing::warn!(?err, "gave up waiting for wallpaper");
                false
            }
        }
    }

    fn delete_shortcut(&mut self, index: usize, now: Instant) {
        if index >= self.registry.len() {
            tracing::warn!(index, len = self.registry.len(), "stale delete request ignored");
            return;
        }
        if !self.surface.confirm(DELETE_CONFIRM_MESSAGE) {
            return;
        }
        self.registry.delete_at(index);
        self.renderer
            .request_render(now, &self.registry, &mut self.surface);
    }

    fn spawn_wallpaper_fetch(&self, request: WallpaperRequest) {
        let fetcher = Arc::clone(&self.fetcher);
        spawn_worker_action(
            move || load_wallpaper(fetcher.as_ref(), request),
            self.completions_tx.clone(),
        );
    }
}
