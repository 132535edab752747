//! Theming and color definitions.
//!
//! Uses ANSI colors that adapt to the terminal's color palette, with darker
//! indexed variants when the terminal reports a light background.

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

use crate::app::ToastLevel;
use crate::document::LineType;

static LIGHT_BACKGROUND: OnceLock<bool> = OnceLock::new();

/// Whether the terminal advertises a light background via `COLORFGBG`.
pub fn is_light_background() -> bool {
    *LIGHT_BACKGROUND
        .get_or_init(|| light_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref()))
}

fn light_from_colorfgbg(colorfgbg: Option<&str>) -> bool {
    let Some(value) = colorfgbg else {
        return false;
    };
    let bg_str = value.rsplit(';').next().unwrap_or(value);
    bg_str.parse::<u8>().is_ok_and(|bg| bg >= 7)
}

/// Get the style for a document body line.
pub fn style_for_line_type(line_type: &LineType) -> Style {
    let light_bg = is_light_background();
    match line_type {
        LineType::Heading(1) => Style::default()
            .fg(if light_bg {
                Color::Indexed(24)
            } else {
                Color::Cyan
            })
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        LineType::Heading(2) => Style::default()
            .fg(if light_bg {
                Color::Indexed(22)
            } else {
                Color::Green
            })
            .add_modifier(Modifier::BOLD),
        LineType::Heading(_) => Style::default()
            .fg(if light_bg {
                Color::Indexed(58)
            } else {
                Color::Yellow
            })
            .add_modifier(Modifier::BOLD),
        LineType::Paragraph | LineType::Clause { .. } | LineType::Empty => Style::default(),
    }
}

/// Style for the bold "Label:" prefix of a regulation clause.
pub fn clause_label_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Secondary text: hints, metadata, placeholders.
pub fn dim_style() -> Style {
    Style::default().fg(if is_light_background() {
        Color::Indexed(242)
    } else {
        Color::Indexed(245)
    })
}

pub fn accent_style() -> Style {
    Style::default().fg(if is_light_background() {
        Color::Indexed(25)
    } else {
        Color::Cyan
    })
}

pub fn section_style() -> Style {
    Style::default()
        .fg(if is_light_background() {
            Color::Indexed(58)
        } else {
            Color::Yellow
        })
        .add_modifier(Modifier::BOLD)
}

/// Border style for a pane, highlighted while it has keyboard focus.
pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

pub fn toast_style(level: ToastLevel) -> Style {
    match level {
        ToastLevel::Info => Style::default().bg(Color::DarkGray).fg(Color::White),
        ToastLevel::Warning => Style::default().bg(Color::Yellow).fg(Color::Black),
        ToastLevel::Error => Style::default().bg(Color::Red).fg(Color::White),
    }
}
