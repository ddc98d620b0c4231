use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

pub(crate) const APP_DIR: &str = "tabhome";
const APP_CONFIG_FILE: &str = "config.json";
pub(crate) const EXTENSION_STORE_FILE: &str = "extension-store.json";
pub(crate) const LOCAL_STORAGE_FILE: &str = "local-storage.json";

const DEFAULT_WALLPAPER_HOST: &str = "bing.biturl.top";
const DEFAULT_WALLPAPER_MARKET: &str = "zh-CN";
const DEFAULT_WALLPAPER_RESOLUTION: u32 = 1920;
const DEFAULT_FALLBACK_BACKGROUND: &str = "#333";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Application-level settings from `config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub wallpaper_host: Option<String>,
    #[serde(default)]
    pub wallpaper_market: Option<String>,
    #[serde(default)]
    pub wallpaper_resolution: Option<u32>,
    #[serde(default)]
    pub fallback_background: Option<String>,
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn wallpaper_host(&self) -> &str {
        self.wallpaper_host
            .as_deref()
            .filter(|host| !host.is_empty())
            .unwrap_or(DEFAULT_WALLPAPER_HOST)
    }

    pub fn wallpaper_market(&self) -> &str {
        self.wallpaper_market
            .as_deref()
            .filter(|market| !market.is_empty())
            .unwrap_or(DEFAULT_WALLPAPER_MARKET)
    }

    pub fn wallpaper_resolution(&self) -> u32 {
        self.wallpaper_resolution
            .filter(|resolution| *resolution > 0)
            .unwrap_or(DEFAULT_WALLPAPER_RESOLUTION)
    }

    pub fn fallback_background(&self) -> &str {
        self.fallback_background
            .as_deref()
            .filter(|color| !color.is_empty())
            .unwrap_or(DEFAULT_FALLBACK_BACKGROUND)
    }

    pub fn fetch_timeout_secs(&self) -> u64 {
        self.fetch_timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS)
    }
}

pub fn load_app_config() -> AppConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_app_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return AppConfig::default(),
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            AppConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            AppConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn data_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = xdg_root(xdg_config_home, home, ".config")?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

/// Directory holding the persisted stores, `$XDG_DATA_HOME/<app_dir>` or
/// `~/.local/share/<app_dir>`.
pub(crate) fn app_data_dir(
    app_dir: &str,
    xdg_data_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = xdg_root(xdg_data_home, home, ".local/share")?;
    path.push(app_dir);
    Ok(path)
}

fn xdg_root(
    xdg_home: Option<&Path>,
    home: Option<&Path>,
    home_fallback: &str,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(home_fallback))
}
