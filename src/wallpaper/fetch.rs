use std::time::Duration;

use image::DynamicImage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http request failed")]
    Client(#[from] reqwest::Error),
    #[error("image service returned status {status}")]
    Status { status: u16 },
    #[error("failed to read image body")]
    Body(#[source] reqwest::Error),
    #[error("response body is not a decodable image")]
    Decode(#[from] image::ImageError),
}

/// Turns a fetched body into pixels. A body that is not an image counts as a
/// failed load, like a network error.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, FetchError> {
    Ok(image::load_from_memory(bytes)?)
}

/// Downloads wallpaper image bytes. Implementations run on a worker thread.
pub trait ImageFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

pub struct HttpImageFetcher {
    client: reqwest::blocking::Client,
}

impl HttpImageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl ImageFetcher for HttpImageFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        let body = response.bytes().map_err(FetchError::Body)?;
        tracing::debug!(bytes = body.len(), %url, "fetched wallpaper image");
        Ok(body.to_vec())
    }
}
