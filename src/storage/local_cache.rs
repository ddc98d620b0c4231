use serde_json::Value;

use super::KeyValueStore;

const DEFAULT_ENGINE_KEY: &str = "defaultEngine";
const WALLPAPER_URL_KEY: &str = "wallpaperUrl";
const LIGHT_MODE_KEY: &str = "isLightMode";

/// Best-effort string cache for the wallpaper and search preference.
///
/// Values are stored as JSON strings. The wallpaper URL and the theme flag are
/// two independent keys, so a reader may observe one updated without the other.
pub struct LocalCache {
    store: Box<dyn KeyValueStore>,
}

impl LocalCache {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn default_engine(&self) -> Option<String> {
        self.read_string(DEFAULT_ENGINE_KEY)
    }

    pub fn set_default_engine(&self, engine_id: &str) {
        self.write_string(DEFAULT_ENGINE_KEY, engine_id);
    }

    pub fn wallpaper_url(&self) -> Option<String> {
        self.read_string(WALLPAPER_URL_KEY)
            .filter(|url| !url.is_empty())
    }

    pub fn set_wallpaper_url(&self, url: &str) {
        self.write_string(WALLPAPER_URL_KEY, url);
    }

    pub fn is_light_mode(&self) -> Option<bool> {
        match self.read_string(LIGHT_MODE_KEY)?.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            other => {
                tracing::debug!(value = other, "ignoring unrecognised light mode flag");
                None
            }
        }
    }

    pub fn set_light_mode(&self, light: bool) {
        self.write_string(LIGHT_MODE_KEY, if light { "true" } else { "false" });
    }

    fn read_string(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(Some(Value::String(value))) => Some(value),
            Ok(_) => None,
            Err(err) => {
                tracing::debug!(?err, key, "local cache read failed; treating as absent");
                None
            }
        }
    }

    fn write_string(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, Value::String(value.to_string())) {
            tracing::warn!(?err, key, "local cache write failed");
        }
    }
}
