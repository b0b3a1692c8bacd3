/// Image resolution module
///
/// This module turns a picture url into something the UI can draw:
/// - Fetching bytes over HTTP with retries (fetcher.rs)
/// - Decoding and downscaling to a thumbnail (fetcher.rs)
/// - Tracking per-url load state so failures become placeholders (cache.rs)

pub mod cache;
pub mod fetcher;
