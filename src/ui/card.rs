use std::collections::HashMap;

use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, stack, text, Row};
use iced::{Border, Color, ContentFit, Element, Length, Shadow, Theme, Vector};

use crate::state::data::ImageRecord;
use crate::Message;

/// How many tags a card shows before truncating
const CARD_TAG_LIMIT: usize = 3;

/// Shown in place of a thumbnail that has not arrived (and may never)
const PLACEHOLDER_GLYPH: &str = "\u{1F5BC}";

/// Thumbnails that have finished loading, by image id.
///
/// This is per-card view state: an id missing here simply renders the
/// placeholder. Failed loads are never inserted, so their placeholder stays.
#[derive(Debug, Default)]
pub struct Thumbnails {
    loaded: HashMap<String, Handle>,
}

impl Thumbnails {
    pub fn insert(&mut self, id: String, handle: Handle) {
        self.loaded.insert(id, handle);
    }

    pub fn get(&self, id: &str) -> Option<&Handle> {
        self.loaded.get(id)
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }
}

/// A grid card: thumbnail with category badge, title, attribution, first tags
pub fn view<'a>(record: &'a ImageRecord, thumbnail: Option<&Handle>, width: f32) -> Element<'a, Message> {
    let picture_height = width * 0.75;

    let picture: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(picture_height)
            .content_fit(ContentFit::Cover)
            .into(),
        None => placeholder(picture_height),
    };

    let badge = container(
        container(text(record.category.label()).size(12).color(Color::from_rgb(0.12, 0.16, 0.22)))
            .padding([4, 12])
            .style(|_theme: &Theme| container::Style {
                background: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.9).into()),
                border: Border {
                    radius: 999.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            }),
    )
    .padding(12);

    let mut details = column![text(record.title.as_str()).size(18)].spacing(6);
    if let Some(photographer) = &record.photographer {
        details = details.push(
            text(format!("\u{1F464} {}", photographer))
                .size(14)
                .color(Color::from_rgb(0.42, 0.45, 0.5)),
        );
    }
    details = details.push(tag_row(&record.tags[..record.tags.len().min(CARD_TAG_LIMIT)]));

    button(column![
        stack![picture, badge],
        container(details).padding(16),
    ])
    .on_press(Message::CardPressed(record.id.clone()))
    .padding(0)
    .width(width)
    .style(card_style)
    .into()
}

/// `#tag` chips, wrapped onto as many lines as needed
pub fn tag_row<'a>(tags: &'a [String]) -> Element<'a, Message> {
    let chips = tags.iter().map(|tag| -> Element<'a, Message> {
        container(text(format!("#{}", tag)).size(12).color(Color::from_rgb(0.29, 0.33, 0.39)))
            .padding([4, 8])
            .style(|_theme: &Theme| container::Style {
                background: Some(Color::from_rgb(0.95, 0.96, 0.96).into()),
                border: Border {
                    radius: 6.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            })
            .into()
    });

    Row::with_children(chips).spacing(4).wrap().into()
}

/// Grey box with a picture glyph, shown while there is no thumbnail
fn placeholder<'a>(height: f32) -> Element<'a, Message> {
    container(text(PLACEHOLDER_GLYPH).size(28).color(Color::from_rgb(0.6, 0.62, 0.65)))
        .width(Length::Fill)
        .height(height)
        .center_x(Length::Fill)
        .center_y(height)
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::from_rgb(0.95, 0.96, 0.96).into()),
            ..container::Style::default()
        })
        .into()
}

fn card_style(_theme: &Theme, status: button::Status) -> button::Style {
    // Hover feedback is the button's own status, nothing is stored
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);

    button::Style {
        background: Some(Color::WHITE.into()),
        text_color: Color::from_rgb(0.07, 0.09, 0.15),
        border: Border {
            color: if hovered {
                Color::from_rgb(0.8, 0.82, 0.85)
            } else {
                Color::from_rgb(0.93, 0.94, 0.95)
            },
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, if hovered { 0.18 } else { 0.08 }),
            offset: Vector::new(0.0, if hovered { 8.0 } else { 2.0 }),
            blur_radius: if hovered { 24.0 } else { 8.0 },
        },
    }
}
