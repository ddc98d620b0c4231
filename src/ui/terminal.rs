use std::io::{self, BufRead, Write};

use super::{
    ClockSurface, DialogSurface, EditorSurface, GridSurface, PageSurface, StyleTokens,
    WallpaperSurface,
};
use crate::grid::GridTile;
use crate::theme::ThemeMode;

/// Headless surface that prints the page to stdout and prompts on stdin.
pub struct TerminalSurface {
    style: StyleTokens,
    assume_yes: bool,
    background_image: Option<String>,
    background_color: Option<String>,
    theme: ThemeMode,
    editor_visible: bool,
}

impl TerminalSurface {
    pub fn new(style: StyleTokens, assume_yes: bool) -> Self {
        Self {
            style,
            assume_yes,
            background_image: None,
            background_color: None,
            theme: ThemeMode::default(),
            editor_visible: false,
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn background(&self) -> Option<&str> {
        self.background_image
            .as_deref()
            .or(self.background_color.as_deref())
    }

    fn tile_cell(&self, tile: &GridTile) -> String {
        let width = self.style.tile_label_width;
        let label = match tile {
            GridTile::Shortcut { index, name, .. } => format!("{index:>2} {name}"),
            GridTile::AddNew { label, .. } => format!(" + {label}"),
        };
        let clipped: String = label.chars().take(width).collect();
        format!("[{clipped:<width$}]")
    }
}

impl GridSurface for TerminalSurface {
    fn replace_grid(&mut self, tiles: &[GridTile]) {
        let columns = self.style.grid_columns.max(1);
        let mut out = io::stdout().lock();
        for row in tiles.chunks(columns) {
            let line = row
                .iter()
                .map(|tile| self.tile_cell(tile))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(out, "{line}");
        }
    }
}

impl WallpaperSurface for TerminalSurface {
    fn has_background(&self) -> bool {
        self.background_image.is_some()
    }

    fn set_background_image(&mut self, url: &str) {
        println!("wallpaper: {url}");
        self.background_image = Some(url.to_string());
    }

    fn set_background_color(&mut self, color: &str) {
        println!("wallpaper: solid {color}");
        self.background_color = Some(color.to_string());
    }

    fn set_wallpaper_loading(&mut self, loading: bool) {
        if loading {
            println!("loading wallpaper...");
        }
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        self.theme = mode;
        let tokens = mode.color_tokens();
        println!(
            "theme: {} (text {}, panel {})",
            mode.as_str(),
            tokens.text_color,
            tokens.panel_background
        );
    }
}

impl EditorSurface for TerminalSurface {
    fn show_editor(&mut self) {
        self.editor_visible = true;
    }

    fn hide_editor(&mut self) {
        self.editor_visible = false;
    }

    fn clear_editor_fields(&mut self) {}

    fn set_icon_preview(&mut self, glyph: &str) {
        if self.editor_visible {
            tracing::debug!(glyph, "icon preview updated");
        }
    }

    fn focus_name_field(&mut self) {}
}

impl DialogSurface for TerminalSurface {
    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
            Err(err) => {
                tracing::warn!(?err, "failed to read confirmation");
                false
            }
        }
    }
}

impl ClockSurface for TerminalSurface {
    fn set_clock(&mut self, time: &str, date: &str) {
        println!("{time}  {date}");
    }
}

impl PageSurface for TerminalSurface {
    fn navigate(&mut self, url: &str) {
        println!("open: {url}");
    }
}
