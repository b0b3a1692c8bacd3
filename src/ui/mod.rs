/// View helpers for the gallery window
///
/// `gallery.rs` builds the list and grid layouts out of picture cards.

pub mod gallery;
