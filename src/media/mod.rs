/// Image loading module
///
/// This module handles:
/// - Resolving a catalog `src` to a local file
/// - Reading and decoding image bytes off the UI thread
/// - Downscaling to card thumbnails (kept in memory only)

pub mod thumbnail;
