use std::collections::VecDeque;

use super::{
    ClockSurface, DialogSurface, EditorSurface, GridSurface, PageSurface, WallpaperSurface,
};
use crate::grid::GridTile;
use crate::theme::ThemeMode;

/// Surface double that records every call.
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) grids: Vec<Vec<GridTile>>,
    pub(crate) background_image: Option<String>,
    pub(crate) background_color: Option<String>,
    pub(crate) loading: bool,
    pub(crate) loading_history: Vec<bool>,
    pub(crate) theme: Option<ThemeMode>,
    pub(crate) editor_visible: bool,
    pub(crate) icon_preview: Option<String>,
    pub(crate) name_focused: bool,
    pub(crate) fields_cleared: usize,
    pub(crate) alerts: Vec<String>,
    pub(crate) confirm_answers: VecDeque<bool>,
    pub(crate) confirm_prompts: Vec<String>,
    pub(crate) clock: Option<(String, String)>,
    pub(crate) clock_paints: usize,
    pub(crate) navigations: Vec<String>,
}

impl GridSurface for RecordingSurface {
    fn replace_grid(&mut self, tiles: &[GridTile]) {
        self.grids.push(tiles.to_vec());
    }
}

impl WallpaperSurface for RecordingSurface {
    fn has_background(&self) -> bool {
        self.background_image.is_some()
    }

    fn set_background_image(&mut self, url: &str) {
        self.background_image = Some(url.to_string());
    }

    fn set_background_color(&mut self, color: &str) {
        self.background_color = Some(color.to_string());
    }

    fn set_wallpaper_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.loading_history.push(loading);
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        self.theme = Some(mode);
    }
}

impl EditorSurface for RecordingSurface {
    fn show_editor(&mut self) {
        self.editor_visible = true;
    }

    fn hide_editor(&mut self) {
        self.editor_visible = false;
        self.name_focused = false;
    }

    fn clear_editor_fields(&mut self) {
        self.fields_cleared += 1;
    }

    fn set_icon_preview(&mut self, glyph: &str) {
        self.icon_preview = Some(glyph.to_string());
    }

    fn focus_name_field(&mut self) {
        self.name_focused = true;
    }
}

impl DialogSurface for RecordingSurface {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirm_prompts.push(message.to_string());
        self.confirm_answers.pop_front().unwrap_or(true)
    }
}

impl ClockSurface for RecordingSurface {
    fn set_clock(&mut self, time: &str, date: &str) {
        self.clock = Some((time.to_string(), date.to_string()));
        self.clock_paints += 1;
    }
}

impl PageSurface for RecordingSurface {
    fn navigate(&mut self, url: &str) {
        self.navigations.push(url.to_string());
    }
}
