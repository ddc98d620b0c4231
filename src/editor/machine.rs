use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    Open,
    Saving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    Open,
    Save,
    Commit,
    Reject,
    Cancel,
    DismissOutside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorTransition {
    pub from: EditorState,
    pub event: EditorEvent,
    pub to: EditorState,
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("invalid editor transition: from {from:?} using event {event:?}")]
    InvalidTransition {
        from: EditorState,
        event: EditorEvent,
    },
}

pub type EditorResult<T> = std::result::Result<T, EditorError>;

#[derive(Debug, Default)]
pub struct EditorMachine {
    state: EditorState,
    transition_history: Vec<EditorTransition>,
}

impl EditorMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn can_transition(&self, event: EditorEvent) -> bool {
        self.next_state(event).is_some()
    }

    pub fn next_state(&self, event: EditorEvent) -> Option<EditorState> {
        use EditorEvent::*;
        match (self.state, event) {
            (EditorState::Closed, Open) => Some(EditorState::Open),
            (EditorState::Open, Open) => Some(EditorState::Open),
            (EditorState::Open, Save) => Some(EditorState::Saving),
            (EditorState::Saving, Commit) => Some(EditorState::Closed),
            (EditorState::Saving, Reject) => Some(EditorState::Open),
            (EditorState::Open, Cancel) => Some(EditorState::Closed),
            (EditorState::Open, DismissOutside) => Some(EditorState::Closed),
            _ => None,
        }
    }

    pub fn transition(&mut self, event: EditorEvent) -> EditorResult<EditorState> {
        tracing::debug!(from = ?self.state, event = ?event, "request editor transition");
        let next = self.next_state(event).ok_or_else(|| {
            let from = self.state;
            tracing::warn!(from = ?from, event = ?event, "invalid editor transition requested");
            EditorError::InvalidTransition { from, event }
        })?;

        self.transition_history.push(EditorTransition {
            from: self.state,
            event,
            to: next,
        });
        self.state = next;
        Ok(self.state)
    }

    pub fn history(&self) -> &[EditorTransition] {
        &self.transition_history
    }
}
