use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the catalog, the config file, or image bytes.
///
/// None of these are fatal to the UI: the app logs them and falls back
/// (embedded catalog, default config, placeholder thumbnail).
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The catalog JSON could not be parsed
    #[error("failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Two records share the same id
    #[error("duplicate image id `{0}` in catalog")]
    DuplicateId(String),

    /// A record claims the `all` pseudo-category
    #[error("image `{0}` uses the `all` filter as its category")]
    FilterCategoryOnRecord(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The `src` is not something we can map to a local file (e.g. a URL)
    #[error("image source `{0}` does not resolve to a local file")]
    UnresolvableSource(String),

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GalleryError>;
