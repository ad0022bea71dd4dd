/// State management module
///
/// This module handles all application state, including:
/// - The read-only image catalog (catalog.rs)
/// - Shared data structures (data.rs)
/// - Category filtering, search and counts (filter.rs)
/// - Lightbox selection and navigation (selection.rs)

pub mod catalog;
pub mod data;
pub mod filter;
pub mod selection;
