use serde::{Deserialize, Serialize};
use thiserror::Error;

mod defaults;
mod registry;

pub use defaults::default_shortcuts;
pub use registry::ShortcutRegistry;

pub const DEFAULT_ICON: &str = "fa-solid fa-link";
const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// A launcher tile. Identity is its position in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub name: String,
    pub url: String,
    #[serde(rename = "content", default = "default_icon")]
    pub icon: String,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("shortcut name is empty")]
    MissingName,
    #[error("shortcut url is empty")]
    MissingUrl,
}

impl ValidationError {
    /// Message shown to the user when a save is rejected.
    pub fn user_message(self) -> &'static str {
        "请输入名称和链接"
    }
}

impl Shortcut {
    pub fn new(name: impl Into<String>, url: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            icon: icon.into(),
        }
    }

    /// Trims every field, rejects an empty name or url, defaults the icon and
    /// prefixes `https://` when the url carries no `http` scheme.
    pub fn validated(name: &str, url: &str, icon: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        let url = url.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if url.is_empty() {
            return Err(ValidationError::MissingUrl);
        }

        let icon = match icon.trim() {
            "" => DEFAULT_ICON,
            icon => icon,
        };
        Ok(Self::new(name, normalize_url(url), icon))
    }
}

pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{url}")
    }
}
