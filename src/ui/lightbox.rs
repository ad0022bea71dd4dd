use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use iced::widget::{
    button, column, container, horizontal_rule, horizontal_space, image, opaque, row, text, Space,
};
use iced::{Alignment, Border, Color, ContentFit, Element, Length, Theme};

use crate::media::thumbnail::resolve_src;
use crate::state::data::ImageRecord;
use crate::state::selection::Position;
use crate::ui::card::tag_row;
use crate::Message;

/// Width reserved for each side navigation zone, shown or not
const NAV_ZONE_WIDTH: f32 = 64.0;

/// "Image 3 of 12", or a note that the image has been filtered out
pub fn position_text(position: Option<Position>) -> String {
    match position {
        Some(position) => format!("Image {} of {}", position.index + 1, position.len),
        None => "Not in current results".to_string(),
    }
}

/// Full-screen overlay for the selected image.
///
/// Wrapped in `opaque` so the grid underneath gets no clicks or scroll
/// events while it is open.
pub fn view<'a>(
    record: &'a ImageRecord,
    position: Option<Position>,
    image_root: &Path,
) -> Element<'a, Message> {
    let close = button(text("\u{2715}").size(20).color(Color::WHITE))
        .on_press(Message::CloseLightbox)
        .padding([8, 14])
        .style(nav_button_style);

    let (has_previous, has_next) = nav_visibility(position);

    let previous = nav_zone(has_previous, "\u{2039}", Message::PreviousImage);
    let next = nav_zone(has_next, "\u{203A}", Message::NextImage);

    let body = row![
        previous,
        container(full_image(record, image_root)).center(Length::Fill),
        info_panel(record, position),
        next,
    ]
    .spacing(24)
    .align_y(Alignment::Center)
    .height(Length::Fill);

    opaque(
        container(column![row![horizontal_space(), close], body].spacing(12))
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.9).into()),
                ..container::Style::default()
            }),
    )
}

/// Which of (previous, next) to show.
///
/// Boundary controls are hidden rather than wrapping; the keyboard still wraps.
/// Both are hidden when the image is no longer in the filtered results.
pub fn nav_visibility(position: Option<Position>) -> (bool, bool) {
    match position {
        Some(position) => (!position.is_first(), !position.is_last()),
        None => (false, false),
    }
}

/// Local file for the full-size image, if `src` resolves and the file exists
fn full_image_path(record: &ImageRecord, image_root: &Path) -> Option<PathBuf> {
    resolve_src(image_root, &record.src)
        .ok()
        .filter(|path| path.is_file())
}

fn full_image<'a>(record: &'a ImageRecord, image_root: &Path) -> Element<'a, Message> {
    match full_image_path(record, image_root) {
        // iced decodes the file itself and caches it by path
        Some(path) => image(Handle::from_path(path))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => text(record.alt.as_str())
            .size(16)
            .color(Color::from_rgb(0.7, 0.7, 0.7))
            .into(),
    }
}

fn nav_zone<'a>(visible: bool, glyph: &'a str, message: Message) -> Element<'a, Message> {
    if visible {
        container(
            button(text(glyph).size(40).color(Color::WHITE))
                .on_press(message)
                .padding([4, 18])
                .style(nav_button_style),
        )
        .width(NAV_ZONE_WIDTH)
        .center_x(NAV_ZONE_WIDTH)
        .into()
    } else {
        Space::with_width(NAV_ZONE_WIDTH).into()
    }
}

/// Title, description, attribution, category, every tag, position
fn info_panel<'a>(record: &'a ImageRecord, position: Option<Position>) -> Element<'a, Message> {
    let muted = Color::from_rgb(0.29, 0.33, 0.39);

    let mut details = column![
        text(record.title.as_str()).size(26),
        text(record.alt.as_str()).size(14).color(muted),
    ]
    .spacing(16);

    if let Some(photographer) = &record.photographer {
        details = details.push(text(format!("\u{1F464} by {}", photographer)).size(14));
    }

    details = details
        .push(column![text("Category").size(14), text(record.category.label()).size(14).color(muted)].spacing(6))
        .push(column![text("Tags").size(14), tag_row(&record.tags)].spacing(6))
        .push(horizontal_rule(1))
        .push(text(position_text(position)).size(12).color(muted));

    container(details)
        .width(320.0)
        .padding(24)
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.95).into()),
            text_color: Some(Color::from_rgb(0.07, 0.09, 0.15)),
            border: Border {
                radius: 8.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn nav_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.2,
        _ => 0.1,
    };

    button::Style {
        background: Some(Color::from_rgba(1.0, 1.0, 1.0, alpha).into()),
        text_color: Color::WHITE,
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
