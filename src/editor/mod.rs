//! Add-shortcut modal.

mod machine;

pub use machine::{
    EditorError, EditorEvent, EditorMachine, EditorResult, EditorState, EditorTransition,
};

use crate::shortcuts::{Shortcut, ShortcutRegistry, ValidationError};
use crate::ui::{DialogSurface, EditorSurface};

pub const ICON_PLACEHOLDER: &str = "fa-solid fa-circle-question";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorFields {
    pub name: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(Shortcut),
    Rejected(ValidationError),
}

pub fn icon_preview(input: &str) -> &str {
    match input.trim() {
        "" => ICON_PLACEHOLDER,
        glyph => glyph,
    }
}

#[derive(Debug, Default)]
pub struct ShortcutEditor {
    machine: EditorMachine,
    fields: EditorFields,
}

impl ShortcutEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditorState {
        self.machine.state()
    }

    pub fn is_open(&self) -> bool {
        self.machine.state() != EditorState::Closed
    }

    pub fn fields(&self) -> &EditorFields {
        &self.fields
    }

    pub fn open<S: EditorSurface + ?Sized>(&mut self, surface: &mut S) -> EditorResult<()> {
        self.machine.transition(EditorEvent::Open)?;
        self.fields = EditorFields::default();
        surface.clear_editor_fields();
        surface.set_icon_preview(ICON_PLACEHOLDER);
        surface.show_editor();
        surface.focus_name_field();
        Ok(())
    }

    pub fn set_name(&mut self, text: &str) {
        if self.accepts_input() {
            self.fields.name = text.to_string();
        }
    }

    pub fn set_url(&mut self, text: &str) {
        if self.accepts_input() {
            self.fields.url = text.to_string();
        }
    }

    /// Mirrors the icon input into the live preview.
    pub fn set_icon<S: EditorSurface + ?Sized>(&mut self, text: &str, surface: &mut S) {
        if !self.accepts_input() {
            return;
        }
        self.fields.icon = text.to_string();
        surface.set_icon_preview(icon_preview(&self.fields.icon));
    }

    /// Hands the fields to the registry, which validates and stores them. A
    /// rejected save alerts the user and leaves the editor open.
    pub fn save<S>(
        &mut self,
        registry: &mut ShortcutRegistry,
        surface: &mut S,
    ) -> EditorResult<SaveOutcome>
    where
        S: EditorSurface + DialogSurface + ?Sized,
    {
        self.machine.transition(EditorEvent::Save)?;
        let draft = Shortcut::new(
            self.fields.name.clone(),
            self.fields.url.clone(),
            self.fields.icon.clone(),
        );
        match registry.add(draft) {
            Ok(saved) => {
                self.machine.transition(EditorEvent::Commit)?;
                surface.hide_editor();
                Ok(SaveOutcome::Saved(saved))
            }
            Err(err) => {
                tracing::debug!(?err, "shortcut editor rejected input");
                self.machine.transition(EditorEvent::Reject)?;
                surface.alert(err.user_message());
                Ok(SaveOutcome::Rejected(err))
            }
        }
    }

    pub fn cancel<S: EditorSurface + ?Sized>(&mut self, surface: &mut S) -> EditorResult<()> {
        self.close(EditorEvent::Cancel, surface)
    }

    pub fn dismiss_outside<S: EditorSurface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> EditorResult<()> {
        self.close(EditorEvent::DismissOutside, surface)
    }

    fn close<S: EditorSurface + ?Sized>(
        &mut self,
        event: EditorEvent,
        surface: &mut S,
    ) -> EditorResult<()> {
        self.machine.transition(event)?;
        surface.hide_editor();
        Ok(())
    }

    fn accepts_input(&self) -> bool {
        self.machine.state() == EditorState::Open
    }
}
