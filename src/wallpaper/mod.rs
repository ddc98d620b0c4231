//! Random wallpaper with a theme derived from its brightness.
//!
//! A cycle goes `Idle -> Loading -> Loaded | Failed`. The fetch and pixel
//! analysis run off the event thread; [`WallpaperPipeline::complete`] applies
//! their outcome back on it.
//!
//! Outstanding fetches are never cancelled. When two overlap, each completion
//! is applied in arrival order, so the last one to arrive owns the background
//! and the cached url.

mod brightness;
mod fetch;
mod source;

pub use brightness::{
    analyze_image, average_luma, luma, AnalysisError, BrightnessReport, LIGHT_THRESHOLD,
    SAMPLE_SIZE,
};
pub use fetch::{decode_image, FetchError, HttpImageFetcher, ImageFetcher};
pub use source::{random_variant, WallpaperSource, VARIANT_COUNT};

use crate::storage::LocalCache;
use crate::theme::ThemeMode;
use crate::ui::WallpaperSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallpaperPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// A fetch the caller must run and report back through `complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallpaperRequest {
    pub index: usize,
    pub url: String,
}

#[derive(Debug)]
pub enum WallpaperOutcome {
    Loaded {
        url: String,
        analysis: Result<BrightnessReport, AnalysisError>,
    },
    Failed {
        url: String,
        error: FetchError,
    },
}

/// Worker body: download the image, decode it and measure it.
pub fn load_wallpaper(fetcher: &dyn ImageFetcher, request: WallpaperRequest) -> WallpaperOutcome {
    let decoded = fetcher
        .fetch(&request.url)
        .and_then(|bytes| decode_image(&bytes));
    match decoded {
        Ok(image) => WallpaperOutcome::Loaded {
            analysis: analyze_image(&image),
            url: request.url,
        },
        Err(error) => WallpaperOutcome::Failed {
            url: request.url,
            error,
        },
    }
}

#[derive(Debug)]
pub struct WallpaperPipeline {
    source: WallpaperSource,
    fallback_background: String,
    phase: WallpaperPhase,
    in_flight: usize,
}

impl WallpaperPipeline {
    pub fn new(source: WallpaperSource, fallback_background: impl Into<String>) -> Self {
        Self {
            source,
            fallback_background: fallback_background.into(),
            phase: WallpaperPhase::Idle,
            in_flight: 0,
        }
    }

    pub fn phase(&self) -> WallpaperPhase {
        self.phase
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Paints the cached wallpaper and theme without touching the network.
    /// Returns a fetch request only when nothing is cached.
    pub fn initialize<S: WallpaperSurface + ?Sized>(
        &mut self,
        cache: &LocalCache,
        surface: &mut S,
    ) -> Option<WallpaperRequest> {
        let Some(url) = cache.wallpaper_url() else {
            tracing::info!("no cached wallpaper; fetching a fresh one");
            return Some(self.refresh(false, surface));
        };

        surface.set_background_image(&url);
        if let Some(is_light) = cache.is_light_mode() {
            surface.set_theme(ThemeMode::from_light_flag(is_light));
        }
        tracing::debug!(%url, "applied cached wallpaper");
        None
    }

    /// Picks a random variant. `force` defeats HTTP caching and always shows
    /// the loading indicator.
    pub fn refresh<S: WallpaperSurface + ?Sized>(
        &mut self,
        force: bool,
        surface: &mut S,
    ) -> WallpaperRequest {
        self.refresh_variant(random_variant(), force, surface)
    }

    pub fn refresh_variant<S: WallpaperSurface + ?Sized>(
        &mut self,
        index: usize,
        force: bool,
        surface: &mut S,
    ) -> WallpaperRequest {
        let cache_bust = force.then(source::epoch_millis);
        let url = self.source.image_url(index, cache_bust);

        if force || !surface.has_background() {
            surface.set_wallpaper_loading(true);
        }
        self.phase = WallpaperPhase::Loading;
        self.in_flight += 1;
        tracing::info!(index, force, in_flight = self.in_flight, "requesting wallpaper");

        WallpaperRequest { index, url }
    }

    pub fn complete<S: WallpaperSurface + ?Sized>(
        &mut self,
        outcome: WallpaperOutcome,
        cache: &LocalCache,
        surface: &mut S,
    ) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match outcome {
            WallpaperOutcome::Loaded { url, analysis } => {
                surface.set_background_image(&url);
                cache.set_wallpaper_url(&url);
                surface.set_wallpaper_loading(false);
                self.phase = WallpaperPhase::Loaded;

                let is_light = match analysis {
                    Ok(report) => {
                        tracing::info!(
                            brightness = report.brightness,
                            is_light = report.is_light,
                            "analyzed wallpaper brightness"
                        );
                        report.is_light
                    }
                    Err(err) => {
                        tracing::warn!(?err, "wallpaper analysis failed; forcing dark theme");
                        false
                    }
                };
                surface.set_theme(ThemeMode::from_light_flag(is_light));
                cache.set_light_mode(is_light);
            }
            WallpaperOutcome::Failed { url, error } => {
                tracing::error!(?error, %url, "wallpaper load failed");
                surface.set_wallpaper_loading(false);
                if !surface.has_background() {
                    surface.set_background_color(&self.fallback_background);
                }
                self.phase = WallpaperPhase::Failed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::ui::test_support::RecordingSurface;
    use image::{Rgb, RgbImage};

    struct StaticFetcher(Result<Vec<u8>, u16>);

    impl ImageFetcher for StaticFetcher {
        fn fetch(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
            self.0
                .clone()
                .map_err(|status| FetchError::Status { status })
        }
    }

    fn pipeline() -> WallpaperPipeline {
        WallpaperPipeline::new(WallpaperSource::new("walls.test", 1920, "zh-CN"), "#333")
    }

    fn cache() -> (MemoryStore, LocalCache) {
        let store = MemoryStore::new();
        let cache = LocalCache::new(Box::new(store.clone()));
        (store, cache)
    }

    fn png(value: u8) -> Vec<u8> {
        brightness::encode_png(&RgbImage::from_pixel(64, 64, Rgb([value, value, value])))
    }

    #[test]
    fn initialize_with_cache_paints_immediately_without_fetching() {
        let (_store, cache) = cache();
        cache.set_wallpaper_url("https://walls.test/cached.jpg");
        cache.set_light_mode(true);
        let mut surface = RecordingSurface::default();
        let mut pipeline = pipeline();

        assert!(pipeline.initialize(&cache, &mut surface).is_none());
        assert_eq!(
            surface.background_image.as_deref(),
            Some("https://walls.test/cached.jpg")
        );
        assert_eq!(surface.theme, Some(ThemeMode::Light));
        assert_eq!(pipeline.phase(), WallpaperPhase::Idle);
        assert!(surface.loading_history.is_empty());
    }

    #[test]
    fn initialize_with_cached_url_but_no_flag_leaves_theme_alone() {
        let (_store, cache) = cache();
        cache.set_wallpaper_url("https://walls.test/cached.jpg");
        let mut surface = RecordingSurface::default();

        assert!(pipeline().initialize(&cache, &mut surface).is_none());
        assert_eq!(surface.theme, None);
    }

    #[test]
    fn initialize_without_cache_starts_loading() {
        let (_store, cache) = cache();
        let mut surface = RecordingSurface::default();
        let mut pipeline = pipeline();

        let request = pipeline.initialize(&cache, &mut surface).expect("fetch needed");
        assert!(request.index < VARIANT_COUNT);
        assert!(!request.url.contains("&t="));
        assert_eq!(pipeline.phase(), WallpaperPhase::Loading);
        assert!(surface.loading);
    }

    #[test]
    fn organic_refresh_over_existing_background_shows_no_indicator() {
        let mut surface = RecordingSurface::default();
        surface.set_background_image("https://walls.test/old.jpg");
        surface.loading_history.clear();

        let request = pipeline().refresh_variant(2, false, &mut surface);
        assert!(surface.loading_history.is_empty());
        assert!(request.url.ends_with("index=2&mkt=zh-CN"));

        let forced = pipeline().refresh_variant(2, true, &mut surface);
        assert_eq!(surface.loading_history, vec![true]);
        assert!(forced.url.contains("&t="));
    }

    #[test]
    fn successful_load_applies_caches_and_themes() {
        let (store, cache) = cache();
        let mut surface = RecordingSurface::default();
        let mut pipeline = pipeline();
        let request = pipeline.refresh_variant(1, false, &mut surface);
        let url = request.url.clone();

        let outcome = load_wallpaper(&StaticFetcher(Ok(png(255))), request);
        pipeline.complete(outcome, &cache, &mut surface);

        assert_eq!(pipeline.phase(), WallpaperPhase::Loaded);
        assert_eq!(pipeline.in_flight(), 0);
        assert_eq!(surface.background_image.as_deref(), Some(url.as_str()));
        assert!(!surface.loading);
        assert_eq!(surface.theme, Some(ThemeMode::Light));
        assert_eq!(cache.wallpaper_url().as_deref(), Some(url.as_str()));
        assert_eq!(
            store.get("isLightMode").unwrap(),
            Some(serde_json::json!("true"))
        );
    }

    #[test]
    fn restricted_analysis_forces_dark_regardless_of_content() {
        let (_store, cache) = cache();
        cache.set_light_mode(true);
        let mut surface = RecordingSurface::default();
        let mut pipeline = pipeline();
        let request = pipeline.refresh_variant(0, true, &mut surface);

        pipeline.complete(
            WallpaperOutcome::Loaded {
                url: request.url,
                analysis: Err(AnalysisError::Restricted {
                    message: "tainted canvas".to_string(),
                }),
            },
            &cache,
            &mut surface,
        );

        assert_eq!(surface.theme, Some(ThemeMode::Dark));
        assert_eq!(cache.is_light_mode(), Some(false));
    }

    #[test]
    fn failed_load_falls_back_to_solid_color_only_without_background() {
        let (_store, cache) = cache();
        cache.set_light_mode(true);
        let mut surface = RecordingSurface::default();
        let mut pipeline = pipeline();

        let request = pipeline.refresh_variant(4, false, &mut surface);
        let outcome = load_wallpaper(&StaticFetcher(Err(503)), request);
        pipeline.complete(outcome, &cache, &mut surface);

        assert_eq!(pipeline.phase(), WallpaperPhase::Failed);
        assert_eq!(surface.background_color.as_deref(), Some("#333"));
        assert!(!surface.loading);
        assert_eq!(surface.theme, None);
        assert_eq!(cache.is_light_mode(), Some(true));
        assert_eq!(cache.wallpaper_url(), None);

        let mut shown = RecordingSurface::default();
        shown.set_background_image("https://walls.test/old.jpg");
        let request = pipeline.refresh_variant(4, true, &mut shown);
        let outcome = load_wallpaper(&StaticFetcher(Err(404)), request);
        pipeline.complete(outcome, &cache, &mut shown);
        assert_eq!(shown.background_color, None);
        assert_eq!(
            shown.background_image.as_deref(),
            Some("https://walls.test/old.jpg")
        );
    }

    #[test]
    fn non_image_body_is_a_failed_load_and_keeps_the_cache() {
        let (_store, cache) = cache();
        cache.set_wallpaper_url("https://walls.test/good.jpg");
        cache.set_light_mode(true);
        let mut surface = RecordingSurface::default();
        let mut pipeline = pipeline();
        assert!(pipeline.initialize(&cache, &mut surface).is_none());

        let request = pipeline.refresh_variant(3, true, &mut surface);
        let html = StaticFetcher(Ok(b"<html>rate limited</html>".to_vec()));
        let outcome = load_wallpaper(&html, request);
        assert!(matches!(
            outcome,
            WallpaperOutcome::Failed {
                error: FetchError::Decode(_),
                ..
            }
        ));
        pipeline.complete(outcome, &cache, &mut surface);

        assert_eq!(pipeline.phase(), WallpaperPhase::Failed);
        assert_eq!(
            cache.wallpaper_url().as_deref(),
            Some("https://walls.test/good.jpg")
        );
        assert_eq!(
            surface.background_image.as_deref(),
            Some("https://walls.test/good.jpg")
        );
        assert_eq!(cache.is_light_mode(), Some(true));
        assert_eq!(surface.theme, Some(ThemeMode::Light));
        assert!(!surface.loading);
    }

    #[test]
    fn overlapping_fetches_resolve_to_the_last_completion() {
        let (_store, cache) = cache();
        let mut surface = RecordingSurface::default();
        let mut pipeline = pipeline();

        let organic = pipeline.refresh_variant(1, false, &mut surface);
        let forced = pipeline.refresh_variant(6, true, &mut surface);
        assert_eq!(pipeline.in_flight(), 2);

        // The forced fetch lands first, the organic one last.
        let forced_outcome = load_wallpaper(&StaticFetcher(Ok(png(0))), forced);
        let organic_url = organic.url.clone();
        let organic_outcome = load_wallpaper(&StaticFetcher(Ok(png(255))), organic);
        pipeline.complete(forced_outcome, &cache, &mut surface);
        pipeline.complete(organic_outcome, &cache, &mut surface);

        assert_eq!(pipeline.in_flight(), 0);
        assert_eq!(surface.background_image.as_deref(), Some(organic_url.as_str()));
        assert_eq!(cache.wallpaper_url().as_deref(), Some(organic_url.as_str()));
        assert_eq!(surface.theme, Some(ThemeMode::Light));
    }
}
