/// Error types for the gallery
///
/// The store itself never fails. Everything here comes from the edges:
/// fetching picture URLs, decoding the bytes that come back, and reading
/// the config file. Errors carry plain strings so they can be cloned into
/// iced messages.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GalleryError>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GalleryError {
    /// Transport-level failure (DNS, connect, timeout, body read)
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The server answered, but not with a success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("invalid config {path}: {reason}")]
    Config { path: String, reason: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("task join error: {0}")]
    TaskJoin(String),
}

impl From<std::io::Error> for GalleryError {
    fn from(err: std::io::Error) -> Self {
        GalleryError::Io(err.to_string())
    }
}

impl From<image::ImageError> for GalleryError {
    fn from(err: image::ImageError) -> Self {
        GalleryError::Decode(err.to_string())
    }
}

impl From<tokio::task::JoinError> for GalleryError {
    fn from(err: tokio::task::JoinError) -> Self {
        GalleryError::TaskJoin(err.to_string())
    }
}
