use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Focus, Model, Tab};

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let location = if let Some(doc) = model.open_document() {
        format!(
            "{}  [{}%]  Line {}/{}",
            doc.title,
            model.doc_viewport.scroll_percent(),
            model.doc_viewport.offset() + 1,
            model.doc_viewport.total_lines()
        )
    } else if model.tab == Tab::Documents {
        let count = model.visible_documents().len();
        let noun = if count == 1 { "document" } else { "documents" };
        format!("{} \u{b7} {count} {noun}", model.tab)
    } else {
        model.tab.to_string()
    };

    let focus_indicator = match model.focus {
        Focus::Main => "",
        Focus::Search => " [search]",
        Focus::Chat => " [chat]",
    };
    let pending_indicator = if model.pending_replies > 0 {
        " [waiting for reply]"
    } else {
        ""
    };
    let sources_hint = if model.selectable_citations().is_empty() {
        ""
    } else {
        "  [ ]:sources"
    };

    let status = format!(
        " {location}{focus_indicator}{pending_indicator}{sources_hint}  c:chat  ?:help"
    );
    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let prefix = match level {
        crate::app::ToastLevel::Info => "[info]",
        crate::app::ToastLevel::Warning => "[warn]",
        crate::app::ToastLevel::Error => "[error]",
    };
    let toast =
        Paragraph::new(format!("{prefix} {message}")).style(super::style::toast_style(level));
    frame.render_widget(toast, area);
}
