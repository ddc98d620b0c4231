use serde_json::Value;

use super::{default_shortcuts, Shortcut, ValidationError};
use crate::storage::KeyValueStore;

const APPS_KEY: &str = "apps";

/// Ordered shortcut list backed by the persistent store.
///
/// Insertion order is display order is persisted order. Every mutation writes
/// the whole list back; write failures are logged and the in-memory list stays
/// authoritative for the session. Accessed from the event thread only.
pub struct ShortcutRegistry {
    shortcuts: Vec<Shortcut>,
    store: Box<dyn KeyValueStore>,
}

impl ShortcutRegistry {
    /// Loads the persisted list, substituting the built-in defaults when the
    /// list is absent, empty or unreadable. Defaults are not written back until
    /// the first mutation.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let shortcuts = read_persisted(store.as_ref()).unwrap_or_else(default_shortcuts);
        tracing::debug!(count = shortcuts.len(), "loaded shortcuts");
        Self { shortcuts, store }
    }

    /// Replaces the in-memory list wholesale with what the store holds now.
    pub fn reload(&mut self) -> &[Shortcut] {
        self.shortcuts = read_persisted(self.store.as_ref()).unwrap_or_else(default_shortcuts);
        &self.shortcuts
    }

    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    pub fn get(&self, index: usize) -> Option<&Shortcut> {
        self.shortcuts.get(index)
    }

    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }

    /// Validates and appends a shortcut, then persists. Returns the stored,
    /// normalized shortcut. A rejected shortcut leaves the list untouched.
    pub fn add(&mut self, shortcut: Shortcut) -> Result<Shortcut, ValidationError> {
        let shortcut = Shortcut::validated(&shortcut.name, &shortcut.url, &shortcut.icon)?;
        tracing::info!(name = %shortcut.name, url = %shortcut.url, "adding shortcut");
        self.shortcuts.push(shortcut.clone());
        self.persist();
        Ok(shortcut)
    }

    /// Removes the shortcut at `index` and persists.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range; indices always come from the
    /// current render.
    pub fn delete_at(&mut self, index: usize) -> Shortcut {
        assert!(
            index < self.shortcuts.len(),
            "shortcut index {index} out of range for {} shortcuts",
            self.shortcuts.len()
        );
        let removed = self.shortcuts.remove(index);
        tracing::info!(index, name = %removed.name, "deleted shortcut");
        self.persist();
        removed
    }

    pub fn persist(&self) {
        let value = match serde_json::to_value(&self.shortcuts) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(?err, "failed to serialize shortcuts");
                return;
            }
        };
        if let Err(err) = self.store.set(APPS_KEY, value) {
            tracing::warn!(?err, "failed to persist shortcuts; keeping in-memory list");
        }
    }
}

fn read_persisted(store: &dyn KeyValueStore) -> Option<Vec<Shortcut>> {
    let value = match store.get(APPS_KEY) {
        Ok(Some(value)) => value,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(?err, "failed to read shortcuts; using defaults");
            return None;
        }
    };
    if value == Value::Null {
        return None;
    }

    match serde_json::from_value::<Vec<Shortcut>>(value) {
        Ok(shortcuts) if !shortcuts.is_empty() => Some(shortcuts),
        Ok(_) => None,
        Err(err) => {
            tracing::warn!(?err, "stored shortcuts are malformed; using defaults");
            None
        }
    }
}
