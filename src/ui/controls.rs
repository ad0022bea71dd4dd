use iced::widget::{button, column, container, row, text, text_input, Row};
use iced::{Alignment, Border, Color, Element, Length, Shadow, Theme, Vector};

use crate::state::data::Category;
use crate::state::filter::CategoryCounts;
use crate::Message;

const INK: Color = Color::from_rgb(0.07, 0.09, 0.15);
const MUTED: Color = Color::from_rgb(0.29, 0.33, 0.39);

/// Page header: camera glyph, title and tagline
pub fn header<'a>() -> Element<'a, Message> {
    let logo = container(text("\u{1F4F7}").size(32))
        .padding(12)
        .style(|_theme: &Theme| container::Style {
            background: Some(INK.into()),
            border: Border {
                radius: 12.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    column![
        row![logo, text("Gallery").size(40).color(INK)]
            .spacing(12)
            .align_y(Alignment::Center),
        text("Explore our curated collection of professional photography across various categories")
            .size(18)
            .color(MUTED),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}

/// Search box bound to the current search term
pub fn search_bar(search_term: &str) -> Element<'_, Message> {
    container(
        text_input("Search images by title, tags, or description...", search_term)
            .on_input(Message::SearchChanged)
            .padding(14)
            .size(16),
    )
    .max_width(640.0)
    .into()
}

/// One button per category, each annotated with its catalog-wide count
pub fn filter_bar<'a>(counts: CategoryCounts, active: Category) -> Element<'a, Message> {
    let buttons = counts
        .iter()
        .map(|(category, count)| filter_button(category, count, category == active));

    Row::with_children(buttons).spacing(12).wrap().into()
}

fn filter_button<'a>(category: Category, count: usize, is_active: bool) -> Element<'a, Message> {
    let (label_color, pill_background, pill_color) = if is_active {
        (Color::WHITE, Color::from_rgba(1.0, 1.0, 1.0, 0.2), Color::WHITE)
    } else {
        (INK, Color::from_rgb(0.95, 0.96, 0.96), MUTED)
    };

    let pill = container(text(count.to_string()).size(12).color(pill_color))
        .padding([2, 8])
        .style(move |_theme: &Theme| container::Style {
            background: Some(pill_background.into()),
            border: Border {
                radius: 999.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    button(
        row![text(category.label()).color(label_color), pill]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .on_press(Message::CategorySelected(category))
    .padding([12, 24])
    .style(move |_theme: &Theme, status| filter_button_style(is_active, status))
    .into()
}

fn filter_button_style(is_active: bool, status: button::Status) -> button::Style {
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);

    let background = match (is_active, hovered) {
        (true, _) => INK,
        (false, true) => Color::from_rgb(0.98, 0.98, 0.98),
        (false, false) => Color::WHITE,
    };

    button::Style {
        background: Some(background.into()),
        text_color: if is_active { Color::WHITE } else { INK },
        border: Border {
            color: if is_active { INK } else { Color::from_rgb(0.9, 0.91, 0.92) },
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: if is_active || hovered {
            Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            }
        } else {
            Shadow::default()
        },
    }
}

/// "Showing 3 of 24 images", plus the search term when one is active
pub fn results_summary_text(shown: usize, total: usize, search_term: &str) -> String {
    if search_term.is_empty() {
        format!("Showing {} of {} images", shown, total)
    } else {
        format!("Showing {} of {} images for \"{}\"", shown, total, search_term)
    }
}

pub fn results_summary<'a>(shown: usize, total: usize, search_term: &str) -> Element<'a, Message> {
    text(results_summary_text(shown, total, search_term))
        .color(MUTED)
        .into()
}

/// Explains why nothing matched. A search term takes precedence over the category.
pub fn empty_state_text(search_term: &str, category: Category) -> String {
    if search_term.is_empty() {
        format!("No images in the {} category", category)
    } else {
        format!("No images match your search \"{}\"", search_term)
    }
}

pub fn empty_state<'a>(search_term: &str, category: Category) -> Element<'a, Message> {
    container(
        column![
            text("\u{1F4F7}").size(32),
            text("No images found").size(18).color(INK),
            text(empty_state_text(search_term, category)).color(MUTED),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .padding([64, 0])
    .center_x(Length::Fill)
    .into()
}
