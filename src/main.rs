use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::widget::{column, container, scrollable, Row, Stack};
use iced::widget::image::Handle;
use iced::{Alignment, Color, Element, Length, Subscription, Task, Theme};

mod config;
mod error;
mod media;
mod state;
mod ui;

use config::GalleryConfig;
use media::thumbnail;
use state::catalog::Catalog;
use state::filter::{count_by_category, FilterState};
use ui::card::Thumbnails;

/// Main application state
struct Gallery {
    /// The read-only image catalog
    catalog: Catalog,
    config: GalleryConfig,
    /// Active category, search term and lightbox selection
    filter: FilterState,
    /// Card thumbnails loaded so far (view state, not domain state)
    thumbnails: Thumbnails,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked a category button
    CategorySelected(state::data::Category),
    /// User edited the search box
    SearchChanged(String),
    /// User clicked a grid card (image id)
    CardPressed(String),
    /// Close button or Escape
    CloseLightbox,
    /// Next button or ArrowRight
    NextImage,
    /// Previous button or ArrowLeft
    PreviousImage,
    /// Background thumbnail load finished for an image id
    ThumbnailLoaded(String, Result<Handle, String>),
}

impl Gallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = GalleryConfig::load().unwrap_or_else(|e| {
            log::warn!("⚠️  {}; using default config", e);
            GalleryConfig::default()
        });

        let catalog = load_catalog(&config);
        log::info!("🎨 Gallery initialized with {} images", catalog.len());

        let gallery = Gallery::with_catalog(catalog, config);
        let task = gallery.load_thumbnails();
        (gallery, task)
    }

    /// Build the application around an already loaded catalog
    fn with_catalog(catalog: Catalog, config: GalleryConfig) -> Self {
        Gallery {
            catalog,
            config,
            filter: FilterState::default(),
            thumbnails: Thumbnails::default(),
        }
    }

    /// Launch one background thumbnail load per catalog image.
    /// Images whose `src` has no local file keep their placeholder.
    fn load_thumbnails(&self) -> Task<Message> {
        let size = self.config.thumbnail_size;

        let tasks = self.catalog.images().iter().filter_map(|record| {
            let path = match thumbnail::resolve_src(&self.config.image_root, &record.src) {
                Ok(path) => path,
                Err(e) => {
                    log::debug!("Skipping thumbnail for {}: {}", record.id, e);
                    return None;
                }
            };

            let id = record.id.clone();
            Some(Task::perform(
                thumbnail::load_thumbnail(path, size),
                move |result| Message::ThumbnailLoaded(id.clone(), result),
            ))
        });

        Task::batch(tasks)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CategorySelected(category) => {
                log::debug!("Category filter set to {}", category);
                self.filter.active_category = category;
            }
            Message::SearchChanged(term) => {
                self.filter.search_term = term;
            }
            Message::CardPressed(id) => match self.catalog.get(&id) {
                Some(record) => {
                    log::debug!("Opening {} in lightbox", record.id);
                    self.filter.selection.open(record);
                }
                None => log::warn!("⚠️  Card for unknown image {}", id),
            },
            Message::CloseLightbox => {
                self.filter.selection.close();
            }
            Message::NextImage => {
                let filtered = self.filter.apply(self.catalog.images());
                self.filter.selection.next(&filtered);
            }
            Message::PreviousImage => {
                let filtered = self.filter.apply(self.catalog.images());
                self.filter.selection.previous(&filtered);
            }
            Message::ThumbnailLoaded(id, Ok(handle)) => {
                self.thumbnails.insert(id, handle);
                if self.thumbnails.len() == self.catalog.len() {
                    log::info!("📸 All {} thumbnails loaded", self.catalog.len());
                }
            }
            Message::ThumbnailLoaded(id, Err(e)) => {
                // Placeholder stays up for this card
                log::warn!("⚠️  Thumbnail for {} failed: {}", id, e);
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let images = self.catalog.images();
        let filtered = self.filter.apply(images);
        let counts = count_by_category(images);
        let search_term = self.filter.search_term.as_str();

        let results: Element<Message> = if filtered.is_empty() {
            ui::controls::empty_state(search_term, self.filter.active_category)
        } else {
            let cards = filtered.iter().map(|&record| {
                ui::card::view(record, self.thumbnails.get(&record.id), self.config.card_width)
            });
            Row::with_children(cards).spacing(24).wrap().into()
        };

        let page = column![
            ui::controls::header(),
            ui::controls::search_bar(search_term),
            ui::controls::filter_bar(counts, self.filter.active_category),
            ui::controls::results_summary(filtered.len(), images.len(), search_term),
            results,
        ]
        .spacing(32)
        .padding(32)
        .align_x(Alignment::Center);

        let grid = scrollable(container(page).center_x(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill);

        // The grid is always the first layer so its scroll offset survives
        // the lightbox opening and closing on top of it
        let mut layers: Vec<Element<Message>> = vec![grid.into()];

        let selected = self
            .filter
            .selection
            .current_id()
            .and_then(|id| self.catalog.get(id));
        if let Some(record) = selected {
            let position = self.filter.selection.position(&filtered);
            layers.push(ui::lightbox::view(record, position, &self.config.image_root));
        }

        container(Stack::with_children(layers).width(Length::Fill).height(Length::Fill))
            .style(|_theme: &Theme| container::Style {
                background: Some(Color::from_rgb(0.98, 0.98, 0.98).into()),
                ..container::Style::default()
            })
            .into()
    }

    /// Keyboard shortcuts exist only while the lightbox is open; once
    /// `subscription()` stops returning the listener, iced tears it down
    fn subscription(&self) -> Subscription<Message> {
        if self.filter.selection.is_open() {
            keyboard::on_key_press(lightbox_key)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Map a key press to a lightbox action
fn lightbox_key(key: Key, _modifiers: Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::Escape) => Some(Message::CloseLightbox),
        Key::Named(Named::ArrowRight) => Some(Message::NextImage),
        Key::Named(Named::ArrowLeft) => Some(Message::PreviousImage),
        _ => None,
    }
}

/// Use the configured external catalog if there is one and it loads,
/// otherwise the embedded catalog
fn load_catalog(config: &GalleryConfig) -> Catalog {
    if let Some(path) = &config.catalog_path {
        match Catalog::from_path(path) {
            Ok(catalog) => {
                log::info!("📁 Catalog loaded from {}", path.display());
                return catalog;
            }
            Err(e) => log::warn!("⚠️  {}; falling back to embedded catalog", e),
        }
    }

    let catalog = Catalog::embedded().unwrap_or_else(|e| {
        log::error!("❌ Embedded catalog is invalid: {}", e);
        Catalog::default()
    });
    if catalog.is_empty() {
        log::warn!("⚠️  Catalog is empty, nothing to show");
    }
    catalog
}

fn main() -> iced::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`)
    env_logger::init();

    iced::application("Gallery", Gallery::update, Gallery::view)
        .subscription(Gallery::subscription)
        .theme(Gallery::theme)
        .centered()
        .run_with(Gallery::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::data::Category;

    fn gallery() -> Gallery {
        Gallery::with_catalog(Catalog::embedded().unwrap(), GalleryConfig::default())
    }

    fn ids_in(gallery: &Gallery, category: Category) -> Vec<String> {
        gallery
            .catalog
            .images()
            .iter()
            .filter(|r| r.category == category)
            .map(|r| r.id.clone())
            .collect()
    }

    #[test]
    fn test_filter_messages_update_state() {
        let mut gallery = gallery();

        let _ = gallery.update(Message::CategorySelected(Category::Nature));
        let _ = gallery.update(Message::SearchChanged("lake".to_string()));

        assert_eq!(gallery.filter.active_category, Category::Nature);
        assert_eq!(gallery.filter.search_term, "lake");
    }

    #[test]
    fn test_lightbox_navigation_through_messages() {
        let mut gallery = gallery();
        let nature = ids_in(&gallery, Category::Nature);
        assert!(nature.len() >= 2);

        let _ = gallery.update(Message::CategorySelected(Category::Nature));
        let _ = gallery.update(Message::CardPressed(nature[0].clone()));
        assert!(gallery.filter.selection.is_open());

        let _ = gallery.update(Message::NextImage);
        assert_eq!(gallery.filter.selection.current_id(), Some(nature[1].as_str()));

        let _ = gallery.update(Message::PreviousImage);
        let _ = gallery.update(Message::PreviousImage);
        assert_eq!(gallery.filter.selection.current_id(), nature.last().map(String::as_str));

        let _ = gallery.update(Message::CloseLightbox);
        assert!(!gallery.filter.selection.is_open());
    }

    #[test]
    fn test_filter_change_while_open_is_safe() {
        let mut gallery = gallery();
        let people = ids_in(&gallery, Category::People);

        let _ = gallery.update(Message::CardPressed(people[0].clone()));
        let _ = gallery.update(Message::CategorySelected(Category::Ghibli));
        let _ = gallery.update(Message::NextImage);
        let _ = gallery.update(Message::PreviousImage);

        assert_eq!(gallery.filter.selection.current_id(), Some(people[0].as_str()));

        // Still renders with the selection outside the filtered set
        let _ = gallery.view();
    }

    #[test]
    fn test_keyboard_hook_follows_lightbox() {
        let mut gallery = gallery();
        let first = gallery.catalog.images()[0].id.clone();
        assert!(!gallery.filter.selection.is_open());

        let _ = gallery.update(Message::CardPressed(first));
        assert!(gallery.filter.selection.is_open());

        // Escape maps to close, which drops the key subscription
        let close = lightbox_key(Key::Named(Named::Escape), Modifiers::default()).unwrap();
        let _ = gallery.update(close);
        assert!(!gallery.filter.selection.is_open());

        // A second close is a no-op
        let _ = gallery.update(Message::CloseLightbox);
        assert!(!gallery.filter.selection.is_open());
    }

    #[test]
    fn test_unknown_card_is_ignored() {
        let mut gallery = gallery();
        let _ = gallery.update(Message::CardPressed("no-such-id".to_string()));
        assert!(!gallery.filter.selection.is_open());
    }

    #[test]
    fn test_thumbnail_results() {
        let mut gallery = gallery();
        let first = gallery.catalog.images()[0].id.clone();
        let second = gallery.catalog.images()[1].id.clone();

        let handle = Handle::from_rgba(1, 1, vec![255, 255, 255, 255]);
        let _ = gallery.update(Message::ThumbnailLoaded(first.clone(), Ok(handle)));
        let _ = gallery.update(Message::ThumbnailLoaded(second.clone(), Err("boom".to_string())));

        assert!(gallery.thumbnails.get(&first).is_some());
        assert!(gallery.thumbnails.get(&second).is_none());
    }

    #[test]
    fn test_lightbox_keys() {
        assert!(matches!(
            lightbox_key(Key::Named(Named::Escape), Modifiers::default()),
            Some(Message::CloseLightbox)
        ));
        assert!(matches!(
            lightbox_key(Key::Named(Named::ArrowRight), Modifiers::default()),
            Some(Message::NextImage)
        ));
        assert!(matches!(
            lightbox_key(Key::Named(Named::ArrowLeft), Modifiers::default()),
            Some(Message::PreviousImage)
        ));
        assert!(lightbox_key(Key::Character("a".into()), Modifiers::default()).is_none());
    }

    #[test]
    fn test_broken_external_catalog_falls_back() {
        let config = GalleryConfig {
            catalog_path: Some("/nonexistent/catalog.json".into()),
            ..GalleryConfig::default()
        };
        let catalog = load_catalog(&config);
        assert_eq!(catalog.len(), Catalog::embedded().unwrap().len());
    }

    #[test]
    fn test_view_builds_for_empty_results() {
        let mut gallery = gallery();
        let _ = gallery.update(Message::SearchChanged("zzzz-no-match".to_string()));
        let _ = gallery.view();
    }
}
