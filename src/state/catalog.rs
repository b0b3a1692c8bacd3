/// Built-in sample catalog
///
/// The gallery starts with one picture per catalog entry, and the "add"
/// action draws the next unused entry from the same list. Once every url is
/// taken, new pictures fall back to a placeholder service keyed by id.

use super::data::{Picture, PictureId};

/// Author label used for catalog pictures ("Artist <id>")
const DEFAULT_AUTHOR_TEMPLATE: &str = "Художник";

/// Author label used once the catalog is exhausted
const FALLBACK_AUTHOR_TEMPLATE: &str = "Случайный художник";

const SAMPLE_URLS: [&str; 5] = [
    "https://i.pinimg.com/736x/4e/53/a9/4e53a93987fbf7c50ef00fd1ced6334e.jpg",
    "https://i.pinimg.com/736x/e7/05/09/e70509b37a0241242798b8a2db663e41.jpg",
    "https://i.pinimg.com/736x/cc/c1/5d/ccc15dc2c841a7d3eeb092cd2606c90c.jpg",
    "https://i.pinimg.com/736x/33/76/2b/33762b2f1eda889046c0c39d47a88046.jpg",
    "https://i.pinimg.com/736x/d7/52/b7/d752b7b12c8b7999486c768a2b319011.jpg",
];

/// One reference entry: the author prefix and the image url
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub author_template: String,
    pub url: String,
}

impl CatalogEntry {
    pub fn new(author_template: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            author_template: author_template.into(),
            url: url.into(),
        }
    }
}

/// Ordered, fixed list of catalog entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(
            SAMPLE_URLS
                .iter()
                .map(|url| CatalogEntry::new(DEFAULT_AUTHOR_TEMPLATE, *url))
                .collect(),
        )
    }
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// The startup set: one picture per entry, ids counting from 1
    pub fn sample_pictures(&self) -> Vec<Picture> {
        self.entries()
            .iter()
            .zip(1..)
            .map(|(entry, id)| {
                Picture::new(id, format!("{} {}", entry.author_template, id), &entry.url)
            })
            .collect()
    }

    pub fn next_sample_picture(&self, existing: &[Picture]) -> Picture {
        next_sample_picture(self.entries(), existing)
    }
}

/// Compute the picture the "add" action should append.
///
/// The id is one past the largest id in `existing` (or 1 for an empty
/// gallery). The url is the first catalog url no existing picture uses; when
/// all are taken a placeholder url parameterized by the id is used instead.
///
/// Ids are not checked against removed pictures, so removing the current
/// maximum and adding again hands the same id out a second time.
pub fn next_sample_picture(catalog: &[CatalogEntry], existing: &[Picture]) -> Picture {
    let new_id: PictureId = existing
        .iter()
        .map(|picture| picture.id)
        .max()
        .unwrap_or(0)
        .saturating_add(1);

    let unused = catalog
        .iter()
        .find(|entry| !existing.iter().any(|picture| picture.url == entry.url));

    match unused {
        Some(entry) => Picture::new(
            new_id,
            format!("{} {}", entry.author_template, new_id),
            &entry.url,
        ),
        None => Picture::new(
            new_id,
            format!("{} {}", FALLBACK_AUTHOR_TEMPLATE, new_id),
            fallback_url(new_id),
        ),
    }
}

fn fallback_url(id: PictureId) -> String {
    format!("https://picsum.photos/400/400?random={}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_pictures_match_catalog() {
        let catalog = Catalog::default();
        let samples = catalog.sample_pictures();

        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], Picture::new(1, "Художник 1", SAMPLE_URLS[0]));
        assert_eq!(samples[4], Picture::new(5, "Художник 5", SAMPLE_URLS[4]));
    }

    #[test]
    fn test_empty_gallery_gets_first_entry() {
        let catalog = Catalog::default();
        let picture = catalog.next_sample_picture(&[]);

        assert_eq!(picture.id, 1);
        assert_eq!(picture.url, catalog.entries()[0].url);
        assert_eq!(picture.author, "Художник 1");
    }

    #[test]
    fn test_skips_used_urls() {
        let catalog = Catalog::default();
        let existing: Vec<Picture> = catalog.sample_pictures().into_iter().take(4).collect();

        let picture = catalog.next_sample_picture(&existing);

        assert_eq!(picture.id, 5);
        assert_eq!(picture.url, catalog.entries()[4].url);
    }

    #[test]
    fn test_id_follows_max_not_len() {
        let catalog = Catalog::default();
        let existing = vec![Picture::new(42, "Художник 42", SAMPLE_URLS[1])];

        let picture = catalog.next_sample_picture(&existing);

        assert_eq!(picture.id, 43);
        // Entry 0 is still free even though entry 1 is taken
        assert_eq!(picture.url, SAMPLE_URLS[0]);
        assert_eq!(picture.author, "Художник 43");
    }

    #[test]
    fn test_exhausted_catalog_falls_back() {
        let catalog = Catalog::default();
        let existing = catalog.sample_pictures();

        let picture = catalog.next_sample_picture(&existing);

        assert_eq!(picture.id, 6);
        assert!(catalog.entries().iter().all(|entry| entry.url != picture.url));
        assert_eq!(picture.author, "Случайный художник 6");
        assert!(picture.url.ends_with("random=6"));
    }

    #[test]
    fn test_is_deterministic() {
        let catalog = Catalog::default();
        let existing: Vec<Picture> = catalog.sample_pictures().into_iter().skip(2).collect();

        assert_eq!(
            catalog.next_sample_picture(&existing),
            catalog.next_sample_picture(&existing)
        );
    }

    #[test]
    fn test_removed_max_id_is_reused() {
        // Known limitation: ids only look at the current maximum
        let catalog = Catalog::default();
        let mut pictures = catalog.sample_pictures();

        let added = catalog.next_sample_picture(&pictures);
        assert_eq!(added.id, 6);
        pictures.push(added.clone());
        pictures.retain(|picture| picture != &added);

        let again = catalog.next_sample_picture(&pictures);
        assert_eq!(again.id, added.id);
    }

    #[test]
    fn test_id_saturates() {
        let existing = vec![Picture::new(PictureId::MAX, "x", "u")];
        let picture = next_sample_picture(&[], &existing);
        assert_eq!(picture.id, PictureId::MAX);
    }
}
