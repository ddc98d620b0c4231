//! Adapter between the page core and whatever draws it.
//!
//! Each trait groups the named widgets one component talks to. A concrete
//! surface resolves its widgets once when it is built; the core only ever
//! goes through these methods.

pub mod style;
mod terminal;
#[cfg(test)]
pub(crate) mod test_support;

pub use style::{StyleTokens, LAYOUT_TOKENS};
pub use terminal::TerminalSurface;

use crate::grid::GridTile;
use crate::theme::ThemeMode;

/// The launcher grid container.
pub trait GridSurface {
    fn replace_grid(&mut self, tiles: &[GridTile]);
}

/// The page body: background, loading indicator and theme class.
pub trait WallpaperSurface {
    fn has_background(&self) -> bool;
    fn set_background_image(&mut self, url: &str);
    fn set_background_color(&mut self, color: &str);
    fn set_wallpaper_loading(&mut self, loading: bool);
    fn set_theme(&mut self, mode: ThemeMode);
}

/// The add-shortcut modal and its inputs.
pub trait EditorSurface {
    fn show_editor(&mut self);
    fn hide_editor(&mut self);
    fn clear_editor_fields(&mut self);
    fn set_icon_preview(&mut self, glyph: &str);
    fn focus_name_field(&mut self);
}

/// The clock and date labels.
pub trait ClockSurface {
    fn set_clock(&mut self, time: &str, date: &str);
}

/// Blocking user prompts.
pub trait DialogSurface {
    fn alert(&mut self, message: &str);
    fn confirm(&mut self, message: &str) -> bool;
}

pub trait PageSurface:
    GridSurface + WallpaperSurface + EditorSurface + DialogSurface + ClockSurface
{
    fn navigate(&mut self, url: &str);
}
