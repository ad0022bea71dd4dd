/// Filter and search engine
///
/// Pure functions over the catalog. They are cheap enough to rerun on
/// every keystroke, so `view()` calls them directly instead of caching.

use super::data::{Category, ImageRecord};
use super::selection::Selection;

/// Transient UI filter state. Lives for one session, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Category button currently pressed (`All` = no category filter)
    pub active_category: Category,
    /// Raw search text, exactly as typed
    pub search_term: String,
    /// Image open in the lightbox, if any
    pub selection: Selection,
}

impl FilterState {
    /// The images matching the current category and search term
    pub fn apply<'a>(&self, images: &'a [ImageRecord]) -> Vec<&'a ImageRecord> {
        filter(images, self.active_category, &self.search_term)
    }
}

/// Return the catalog records matching `category` and `search_term`, in catalog order.
///
/// The category predicate runs first, then the search predicate. Search is a
/// case-insensitive substring match against the title, each tag, and the alt
/// text. Only an exactly-empty term disables search; whitespace is not trimmed.
pub fn filter<'a>(
    images: &'a [ImageRecord],
    category: Category,
    search_term: &str,
) -> Vec<&'a ImageRecord> {
    let by_category = images
        .iter()
        .filter(|image| category == Category::All || image.category == category);

    if search_term.is_empty() {
        return by_category.collect();
    }

    let needle = search_term.to_lowercase();
    by_category.filter(|image| matches_search(image, &needle)).collect()
}

/// `needle` must already be lowercased
fn matches_search(image: &ImageRecord, needle: &str) -> bool {
    image.title.to_lowercase().contains(needle)
        || image.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
        || image.alt.to_lowercase().contains(needle)
}

/// Number of catalog images per category, including `All`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    counts: [usize; Category::FILTERS.len()],
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    /// `(category, count)` pairs in button order
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::FILTERS.iter().map(move |c| (*c, self.get(*c)))
    }
}

/// Count images per category over the whole catalog.
///
/// Search and the active filter are deliberately ignored so the button
/// counts stay stable while the user types.
pub fn count_by_category(images: &[ImageRecord]) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    counts.counts[Category::All.index()] = images.len();
    for image in images {
        counts.counts[image.category.index()] += 1;
    }
    counts
}
