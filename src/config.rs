use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, Result};

/// Edge length of generated card thumbnails (square bound)
const DEFAULT_THUMBNAIL_SIZE: u32 = 256;

/// Bundled sample images, anchored to the crate rather than the launch directory
const BUNDLED_IMAGE_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/images");

/// User configuration, read from `config.json`.
///
/// The file lives in the user's config directory:
/// - Linux: ~/.config/photo-gallery/config.json
/// - macOS: ~/Library/Application Support/photo-gallery/config.json
/// - Windows: %APPDATA%\photo-gallery\config.json
///
/// Every field is optional; missing ones take their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    /// External catalog to use instead of the embedded one
    pub catalog_path: Option<PathBuf>,
    /// Directory that relative image `src` values are resolved against
    pub image_root: PathBuf,
    /// Thumbnail bound in pixels
    pub thumbnail_size: u32,
    /// Card width in logical pixels
    pub card_width: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            image_root: PathBuf::from(BUNDLED_IMAGE_ROOT),
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            card_width: 280.0,
        }
    }
}

impl GalleryConfig {
    /// Load the config from the default location.
    ///
    /// A missing file (or no config directory at all) yields defaults;
    /// a file that exists but does not parse is an error.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load the config from an explicit file
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| GalleryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&json).map_err(|source| GalleryError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the path where the config file is expected
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("photo-gallery");
        path.push("config.json");
        Some(path)
    }
}
