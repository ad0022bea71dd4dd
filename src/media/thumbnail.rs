use iced::widget::image::Handle;
use image::{imageops::FilterType, RgbaImage};
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, Result};

/// Resolve a catalog `src` to a local file.
///
/// Absolute paths are used as-is, relative ones are joined onto `image_root`.
/// Anything URL-shaped (`scheme://...`) has no local file and is rejected.
pub fn resolve_src(image_root: &Path, src: &str) -> Result<PathBuf> {
    if src.is_empty() || src.contains("://") {
        return Err(GalleryError::UnresolvableSource(src.to_string()));
    }

    let path = Path::new(src);
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(image_root.join(path))
    }
}

/// Load a card thumbnail for the image at `path`.
///
/// Reads the file with tokio, then decodes + resizes on a blocking worker.
/// Errors are stringified: they travel inside a `Message`, which is `Clone`.
pub async fn load_thumbnail(path: PathBuf, size: u32) -> std::result::Result<Handle, String> {
    let bytes = tokio::fs::read(&path).await.map_err(|source| {
        GalleryError::Io {
            path: path.clone(),
            source,
        }
        .to_string()
    })?;

    let thumbnail = tokio::task::spawn_blocking(move || decode_thumbnail(&bytes, size))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
        .map_err(|e| e.to_string())?;

    let (width, height) = thumbnail.dimensions();
    Ok(Handle::from_rgba(width, height, thumbnail.into_raw()))
}

/// Decode encoded image bytes and shrink them to fit in a `size` x `size` box,
/// preserving aspect ratio
pub fn decode_thumbnail(bytes: &[u8], size: u32) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)?;

    // Only downscale; small images stay as they are
    let img = if img.width() > size || img.height() > size {
        img.resize(size, size, FilterType::Lanczos3)
    } else {
        img
    };

    Ok(img.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::new(width, height));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let root = Path::new("/photos");
        assert_eq!(
            resolve_src(root, "nature/lake.jpg").unwrap(),
            PathBuf::from("/photos/nature/lake.jpg")
        );
        assert_eq!(
            resolve_src(root, "/tmp/lake.jpg").unwrap(),
            PathBuf::from("/tmp/lake.jpg")
        );
    }

    #[test]
    fn test_resolve_rejects_urls() {
        let result = resolve_src(Path::new("/photos"), "https://example.com/a.jpg");
        assert!(matches!(result, Err(GalleryError::UnresolvableSource(_))));
        assert!(resolve_src(Path::new("/photos"), "").is_err());
    }

    #[test]
    fn test_decode_downscales_preserving_aspect() {
        let thumb = decode_thumbnail(&png_bytes(64, 32), 16).unwrap();
        assert_eq!(thumb.dimensions(), (16, 8));
    }

    #[test]
    fn test_decode_keeps_small_images() {
        let thumb = decode_thumbnail(&png_bytes(10, 20), 256).unwrap();
        assert_eq!(thumb.dimensions(), (10, 20));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode_thumbnail(b"definitely not an image", 64);
        assert!(matches!(result, Err(GalleryError::Decode(_))));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = load_thumbnail(PathBuf::from("/nonexistent/path.jpg"), 64).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_real_file() {
        let path = std::env::temp_dir().join(format!("photo-gallery-thumb-{}.png", std::process::id()));
        std::fs::write(&path, png_bytes(40, 40)).unwrap();

        let result = load_thumbnail(path.clone(), 16).await;
        std::fs::remove_file(&path).ok();

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_load_bundled_image() {
        let config = crate::config::GalleryConfig::default();
        let path = resolve_src(&config.image_root, "nature/mountain-lake.png").unwrap();

        assert!(load_thumbnail(path, config.thumbnail_size).await.is_ok());
    }
}
