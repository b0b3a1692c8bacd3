use iced::widget::image::Handle;
use std::collections::HashMap;

use super::fetcher::Thumbnail;
use crate::error::GalleryError;

/// Load state of a single url
#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Loaded(Handle),
    /// The view draws a placeholder instead
    Failed,
}

/// In-memory map from picture url to its load state.
///
/// The cache does not know about pictures; its owner prunes urls that
/// are no longer shown.
#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    entries: HashMap<String, ImageState>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<&ImageState> {
        self.entries.get(url)
    }

    /// Mark `url` as loading and report whether a fetch should start.
    /// Urls that are loading or loaded are skipped; failed ones are retried.
    pub fn begin(&mut self, url: &str) -> bool {
        match self.entries.get(url) {
            Some(ImageState::Loading) | Some(ImageState::Loaded(_)) => false,
            Some(ImageState::Failed) | None => {
                self.entries.insert(url.to_string(), ImageState::Loading);
                true
            }
        }
    }

    /// Keep only the entries whose url satisfies `keep`
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.entries.retain(|url, _| keep(url));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Record the outcome of a fetch started with [`ImageCache::begin`]
    pub fn finish(&mut self, url: String, result: Result<Thumbnail, GalleryError>) {
        let state = match result {
            Ok(thumbnail) => ImageState::Loaded(Handle::from_rgba(
                thumbnail.width,
                thumbnail.height,
                thumbnail.pixels,
            )),
            Err(e) => {
                log::warn!("Image unavailable, showing placeholder: {}", e);
                ImageState::Failed
            }
        };

        self.entries.insert(url, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumbnail() -> Thumbnail {
        Thumbnail {
            width: 1,
            height: 1,
            pixels: vec![0, 0, 0, 255],
        }
    }

    #[test]
    fn test_begin_once_per_url() {
        let mut cache = ImageCache::new();

        assert!(cache.begin("a"));
        assert!(!cache.begin("a"));
        assert!(cache.begin("b"));
        assert!(matches!(cache.get("a"), Some(ImageState::Loading)));
    }

    #[test]
    fn test_loaded_is_not_refetched() {
        let mut cache = ImageCache::new();
        cache.begin("a");
        cache.finish("a".to_string(), Ok(thumbnail()));

        assert!(matches!(cache.get("a"), Some(ImageState::Loaded(_))));
        assert!(!cache.begin("a"));
    }

    #[test]
    fn test_failure_becomes_placeholder_and_retries() {
        let mut cache = ImageCache::new();
        cache.begin("a");
        cache.finish(
            "a".to_string(),
            Err(GalleryError::Status {
                url: "a".to_string(),
                status: 404,
            }),
        );

        assert!(matches!(cache.get("a"), Some(ImageState::Failed)));
        assert!(cache.begin("a"));
    }

    #[test]
    fn test_retain_drops_unused_urls() {
        let mut cache = ImageCache::new();
        cache.begin("a");
        cache.begin("b");
        cache.finish("b".to_string(), Ok(thumbnail()));
        cache.begin("c");

        cache.retain(|url| url != "b");

        assert_eq!(cache.len(), 2);
        assert!(cache.get("b").is_none());
        // A dropped url is fetched again if it comes back
        assert!(cache.begin("b"));

        cache.clear();
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_unknown_url() {
        let cache = ImageCache::new();
        assert!(cache.get("nope").is_none());
    }
}
