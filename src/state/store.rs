use super::data::Picture;

/// A change applied to the store, delivered to every subscriber
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Added(Picture),
    Removed(Picture),
    Cleared,
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// The GalleryStore owns the ordered list of pictures shown by the UI.
///
/// Insertion order is display order. The store is single-writer and
/// synchronous: listeners run inline, after the mutation has been applied.
pub struct GalleryStore {
    pictures: Vec<Picture>,
    listeners: Vec<Listener>,
}

impl Default for GalleryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_pictures(Vec::new())
    }

    /// Create a store seeded with an initial set (no events are emitted)
    pub fn with_pictures(pictures: Vec<Picture>) -> Self {
        Self {
            pictures,
            listeners: Vec::new(),
        }
    }

    /// Register a listener that is called after every change
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Current contents in display order
    pub fn list(&self) -> &[Picture] {
        &self.pictures
    }

    pub fn len(&self) -> usize {
        self.pictures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pictures.is_empty()
    }

    /// Pictures whose author contains `query`, in display order.
    /// An empty query matches everything.
    pub fn filter_by_author(&self, query: &str, case_insensitive: bool) -> Vec<Picture> {
        if query.is_empty() {
            return self.pictures.clone();
        }

        if case_insensitive {
            let needle = query.to_lowercase();
            self.pictures
                .iter()
                .filter(|picture| picture.author.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        } else {
            self.pictures
                .iter()
                .filter(|picture| picture.author.contains(query))
                .cloned()
                .collect()
        }
    }

    /// Append a picture to the end. Ids are not checked for uniqueness.
    pub fn add(&mut self, picture: Picture) {
        log::debug!("Adding picture {} ({})", picture.id, picture.author);
        self.pictures.push(picture.clone());
        self.notify(StoreEvent::Added(picture));
    }

    /// Remove the first picture equal to `picture`.
    /// Absent pictures are ignored and no event is emitted.
    pub fn remove(&mut self, picture: &Picture) -> Option<Picture> {
        let index = self.pictures.iter().position(|p| p == picture)?;
        let removed = self.pictures.remove(index);

        log::debug!("Removed picture {} ({})", removed.id, removed.author);
        self.notify(StoreEvent::Removed(removed.clone()));
        Some(removed)
    }

    pub fn clear(&mut self) {
        log::debug!("Clearing {} pictures", self.pictures.len());
        self.pictures.clear();
        self.notify(StoreEvent::Cleared);
    }

    fn notify(&mut self, event: StoreEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl std::fmt::Debug for GalleryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryStore")
            .field("pictures", &self.pictures)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
