use std::collections::HashSet;
use std::path::Path;

use super::data::{Category, ImageRecord};
use crate::error::{GalleryError, Result};

/// Catalog compiled into the binary
const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog.json");

/// The Catalog is the ordered, read-only list of images the gallery shows.
///
/// It is built once at startup and never mutated afterwards: there is no
/// `&mut` access to the records, only slices and lookups.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    images: Vec<ImageRecord>,
}

impl Catalog {
    /// Load the catalog embedded at build time
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load a catalog from a JSON file on disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| GalleryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse a JSON array of image records and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let images: Vec<ImageRecord> = serde_json::from_str(json)?;
        Self::new(images)
    }

    /// Build a catalog from records, rejecting duplicate ids and
    /// records tagged with the `all` pseudo-category
    pub fn new(images: Vec<ImageRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(images.len());
        for image in &images {
            if image.category == Category::All {
                return Err(GalleryError::FilterCategoryOnRecord(image.id.clone()));
            }
            if !seen.insert(image.id.as_str()) {
                return Err(GalleryError::DuplicateId(image.id.clone()));
            }
        }

        Ok(Catalog { images })
    }

    /// All records, in catalog order
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&ImageRecord> {
        self.images.iter().find(|image| image.id == id)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.is_empty());

        // Every real category should be represented
        for category in &Category::FILTERS[1..] {
            assert!(
                catalog.images().iter().any(|image| image.category == *category),
                "no image in {}",
                category
            );
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id":"1","src":"a.jpg","alt":"a","title":"A","category":"nature"},
            {"id":"1","src":"b.jpg","alt":"b","title":"B","category":"people"}
        ]"#;

        match Catalog::from_json(json) {
            Err(GalleryError::DuplicateId(id)) => assert_eq!(id, "1"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_all_category_rejected() {
        let json = r#"[{"id":"7","src":"a.jpg","alt":"a","title":"A","category":"all"}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(GalleryError::FilterCategoryOnRecord(id)) if id == "7"
        ));
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let json = r#"[{"id":"1","src":"a.jpg","alt":"a","title":"A","category":"food"}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(GalleryError::CatalogParse(_))
        ));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::embedded().unwrap();
        let first = &catalog.images()[0];
        assert_eq!(catalog.get(&first.id), Some(first));
        assert_eq!(catalog.get("no-such-id"), None);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Catalog::from_path(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(GalleryError::Io { .. })));
    }
}
