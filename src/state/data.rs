/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog, the filter engine and the UI layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of gallery categories.
///
/// `All` is only ever a filter value; no record carries it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Nature,
    Architecture,
    Technology,
    People,
    Ghibli,
}

impl Category {
    /// Every filter value, in the order the filter buttons are shown
    pub const FILTERS: [Category; 6] = [
        Category::All,
        Category::Nature,
        Category::Architecture,
        Category::Technology,
        Category::People,
        Category::Ghibli,
    ];

    /// Lowercase identifier, as stored in the catalog
    pub fn as_str(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Nature => "nature",
            Category::Architecture => "architecture",
            Category::Technology => "technology",
            Category::People => "people",
            Category::Ghibli => "ghibli",
        }
    }

    /// Human-readable label for buttons and badges
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Nature => "Nature",
            Category::Architecture => "Architecture",
            Category::Technology => "Technology",
            Category::People => "People",
            Category::Ghibli => "Ghibli",
        }
    }

    /// Position in `FILTERS`, used to index count tables
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a single image in the catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Unique, stable identifier
    pub id: String,
    /// Where the image bytes live (relative to the image root, or absolute)
    pub src: String,
    /// Description text, also searched
    pub alt: String,
    /// Display name
    pub title: String,
    pub category: Category,
    /// Free-text labels, in display order
    #[serde(default)]
    pub tags: Vec<String>,
    /// Attribution, absent for some records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photographer: Option<String>,
}
