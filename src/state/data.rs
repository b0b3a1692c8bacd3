/// Shared data structures for the application state
/// 
/// These structs represent the data model that flows between
/// the store and the UI layer.

/// Identifier of a picture inside the gallery
pub type PictureId = u64;

/// Represents a single entry in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Picture {
    /// Unique within the store by convention (max + 1 on creation)
    pub id: PictureId,
    /// Display label, also the field searched by the filter
    pub author: String,
    /// Where the image bytes live; opaque to the store
    pub url: String,
}

impl Picture {
    pub fn new(id: PictureId, author: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            url: url.into(),
        }
    }
}
