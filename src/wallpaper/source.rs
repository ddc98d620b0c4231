use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::config::AppConfig;

/// Number of daily images the wallpaper service rotates through.
pub const VARIANT_COUNT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallpaperSource {
    host: String,
    resolution: u32,
    market: String,
}

impl WallpaperSource {
    pub fn new(host: impl Into<String>, resolution: u32, market: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            resolution,
            market: market.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.wallpaper_host(),
            config.wallpaper_resolution(),
            config.wallpaper_market(),
        )
    }

    /// Image url for `index`; `cache_bust_ms` appends a `t` parameter so HTTP
    /// caches are bypassed.
    pub fn image_url(&self, index: usize, cache_bust_ms: Option<u128>) -> String {
        let mut url = format!(
            "https://{}/?resolution={}&format=image&index={index}&mkt={}",
            self.host, self.resolution, self.market
        );
        if let Some(timestamp) = cache_bust_ms {
            url.push_str(&format!("&t={timestamp}"));
        }
        url
    }
}

pub fn random_variant() -> usize {
    rand::thread_rng().gen_range(0..VARIANT_COUNT)
}

pub(crate) fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis())
}
