//! User actions routed from the surface into the page core.

use crate::grid::GridAction;
use crate::search::SearchEngine;

pub const DELETE_CONFIRM_MESSAGE: &str = "确定要删除这个图标吗？";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Grid(GridAction),
    EditorName(String),
    EditorUrl(String),
    EditorIcon(String),
    EditorSave,
    EditorCancel,
    /// Activation on the backdrop outside the modal content.
    EditorDismissOutside,
    RefreshWallpaper,
    SelectEngine(SearchEngine),
    Search(String),
}
