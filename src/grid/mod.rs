use std::time::Instant;

use crate::shortcuts::{Shortcut, ShortcutRegistry};
use crate::ui::GridSurface;

mod throttle;

pub use throttle::{RenderDecision, RenderThrottle, RENDER_INTERVAL};

pub const ADD_TILE_LABEL: &str = "添加";
pub const ADD_TILE_ICON: &str = "fa-solid fa-plus";
pub const DELETE_ICON: &str = "fa-solid fa-xmark";

/// One cell of the launcher grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridTile {
    Shortcut {
        index: usize,
        name: String,
        url: String,
        icon: String,
    },
    AddNew {
        label: &'static str,
        icon: &'static str,
    },
}

/// What activating a part of a tile does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridAction {
    Open(String),
    /// Raised by the delete affordance; never also opens the shortcut.
    Delete(usize),
    AddNew,
}

impl GridTile {
    pub fn primary_action(&self) -> GridAction {
        match self {
            Self::Shortcut { url, .. } => GridAction::Open(url.clone()),
            Self::AddNew { .. } => GridAction::AddNew,
        }
    }

    pub fn delete_action(&self) -> Option<GridAction> {
        match self {
            Self::Shortcut { index, .. } => Some(GridAction::Delete(*index)),
            Self::AddNew { .. } => None,
        }
    }
}

/// Builds the full tile list: one tile per shortcut plus the trailing add tile.
pub fn build_tiles(shortcuts: &[Shortcut]) -> Vec<GridTile> {
    shortcuts
        .iter()
        .enumerate()
        .map(|(index, shortcut)| GridTile::Shortcut {
            index,
            name: shortcut.name.clone(),
            url: shortcut.url.clone(),
            icon: shortcut.icon.clone(),
        })
        .chain(std::iter::once(GridTile::AddNew {
            label: ADD_TILE_LABEL,
            icon: ADD_TILE_ICON,
        }))
        .collect()
}

/// Rebuilds the grid from scratch on every render, throttled to one frame.
#[derive(Debug, Default)]
pub struct GridRenderer {
    throttle: RenderThrottle,
    render_count: u64,
}

impl GridRenderer {
    pub fn new(throttle: RenderThrottle) -> Self {
        Self {
            throttle,
            render_count: 0,
        }
    }

    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn pending(&self) -> Option<Instant> {
        self.throttle.pending()
    }

    pub fn request_render(
        &mut self,
        now: Instant,
        registry: &ShortcutRegistry,
        surface: &mut dyn GridSurface,
    ) -> RenderDecision {
        let decision = self.throttle.request(now);
        match decision {
            RenderDecision::Now => self.render(registry, surface),
            RenderDecision::Deferred(at) => {
                tracing::trace!(?at, "grid render deferred");
            }
            RenderDecision::AlreadyPending => {}
        }
        decision
    }

    /// Runs the deferred render once it is due, reading the registry as it is
    /// at this moment.
    pub fn tick(
        &mut self,
        now: Instant,
        registry: &ShortcutRegistry,
        surface: &mut dyn GridSurface,
    ) -> bool {
        if !self.throttle.poll(now) {
            return false;
        }
        self.render(registry, surface);
        true
    }

    fn render(&mut self, registry: &ShortcutRegistry, surface: &mut dyn GridSurface) {
        let tiles = build_tiles(registry.shortcuts());
        surface.replace_grid(&tiles);
        self.render_count += 1;
        tracing::debug!(tiles = tiles.len(), "rendered shortcut grid");
    }
}
