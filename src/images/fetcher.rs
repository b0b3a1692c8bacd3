use image::imageops::FilterType;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{GalleryError, Result};

/// Decoded RGBA8 thumbnail, ready to be wrapped in an iced image handle
#[derive(Clone, PartialEq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl std::fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thumbnail")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// HTTP image fetcher with retry and exponential backoff
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: Client,
    max_retries: u32,
}

impl HttpImageFetcher {
    pub fn new(max_retries: u32, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Failed to build HTTP client with timeout ({}), using defaults", e);
                Client::new()
            });

        Self {
            client,
            // Zero retries would mean never trying at all
            max_retries: max_retries.max(1),
        }
    }

    /// Download the raw bytes behind `url`
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let mut last_error = None;

        for attempt in 0..self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(100 * 2u64.pow(attempt));
                tokio::time::sleep(delay).await;
            }

            match self.fetch_once(url).await {
                Ok(bytes) => return Ok(bytes),
                Err(e) => {
                    log::debug!("Attempt {} for {} failed: {}", attempt + 1, url, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| GalleryError::Fetch {
            url: url.to_string(),
            reason: "no attempts made".to_string(),
        }))
    }

    async fn fetch_once(&self, url: &str) -> Result<Vec<u8>> {
        let fetch_error = |e: reqwest::Error| GalleryError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GalleryError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(fetch_error)?;
        Ok(bytes.to_vec())
    }
}

/// Decode image bytes and shrink them to fit within `max_side` pixels.
/// Images already smaller than that are left at their size.
pub fn decode_thumbnail(bytes: &[u8], max_side: u32) -> Result<Thumbnail> {
    let img = image::load_from_memory(bytes)?;

    let img = if img.width() > max_side || img.height() > max_side {
        img.resize(max_side, max_side, FilterType::Triangle)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    Ok(Thumbnail {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

/// Fetch `url` and decode it into a thumbnail.
/// Decoding is CPU-bound, so it runs on the blocking pool.
pub async fn resolve(fetcher: Arc<HttpImageFetcher>, url: String, max_side: u32) -> Result<Thumbnail> {
    let bytes = fetcher.fetch(&url).await?;

    tokio::task::spawn_blocking(move || decode_thumbnail(&bytes, max_side)).await?
}
