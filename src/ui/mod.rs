/// Presentation layer
///
/// Stateless view builders; all domain state is passed in.
/// - controls.rs: header, search box, category buttons, summary and empty state
/// - card.rs: grid cards and the per-card thumbnail store
/// - lightbox.rs: full-screen overlay for the selected image

pub mod card;
pub mod controls;
pub mod lightbox;
