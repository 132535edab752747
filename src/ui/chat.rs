use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{Focus, Model};
use crate::assistant::{ChatMessage, Role, SUGGESTED_QUESTIONS};
use crate::document::{display_width, wrap_text};

use super::style::{accent_style, border_style, dim_style, section_style};

pub const CHAT_TITLE: &str = "Covenant AI Assistant";
pub const INPUT_PLACEHOLDER: &str = "Ask about community rules...";
pub const INPUT_HINT: &str = "AI answers from your HOA documents";
pub const SUGGESTIONS_HEADING: &str = "Here are some questions you can ask:";
pub const TYPING_INDICATOR: &str = "Assistant is typing\u{2026}";

/// Lay out the chat transcript for a pane `width` columns wide.
///
/// Citation chips are numbered per message. Only the chips of the latest
/// cited reply are selectable, and the active excerpt is shown beneath it.
pub fn transcript_lines(model: &Model, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.max(8));
    let latest_cited_id = model.chat.latest_cited().map(|m| m.id);
    let mut lines = Vec::new();

    for message in model.chat.messages() {
        let selectable = latest_cited_id == Some(message.id);
        push_message(
            &mut lines,
            message,
            width,
            selectable.then_some(model.active_citation).flatten(),
        );
        lines.push(Line::raw(""));
    }

    if model.pending_replies > 0 {
        lines.push(Line::styled(
            format!("  {TYPING_INDICATOR}"),
            dim_style().add_modifier(Modifier::ITALIC),
        ));
    }

    lines
}

fn push_message(
    lines: &mut Vec<Line<'static>>,
    message: &ChatMessage,
    width: usize,
    active_citation: Option<usize>,
) {
    let (author, author_style) = match message.role {
        Role::System => ("Assistant", accent_style().add_modifier(Modifier::BOLD)),
        Role::User => ("You", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
    };
    lines.push(Line::styled(author, author_style));
    for line in wrap_text(&message.content, width, "  ", "  ") {
        lines.push(Line::raw(line));
    }

    let citations = message.citations();
    if citations.is_empty() {
        return;
    }
    lines.push(Line::styled("  Sources:", dim_style()));
    for (idx, citation) in citations.iter().enumerate() {
        let chip = format!("[{}] {}", idx + 1, citation.label());
        let style = if active_citation == Some(idx) {
            accent_style().add_modifier(Modifier::REVERSED)
        } else {
            accent_style()
        };
        lines.push(Line::from(vec![Span::raw("  "), Span::styled(chip, style)]));
    }

    if let Some(citation) = active_citation.and_then(|idx| citations.get(idx)) {
        let bar_style = accent_style();
        let excerpt = format!("\"{}\"", citation.excerpt);
        for line in wrap_text(&excerpt, width.saturating_sub(4), "", "") {
            lines.push(Line::from(vec![
                Span::styled("  \u{2502} ", bar_style),
                Span::styled(line, Style::default().add_modifier(Modifier::ITALIC)),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("  \u{2502} ", bar_style),
            Span::styled(
                format!("Source: {}, Page {}", citation.title, citation.page),
                dim_style(),
            ),
        ]));
    }
}

/// Render the assistant panel: transcript, suggestions, and input box.
pub fn render_chat_panel(model: &mut Model, frame: &mut Frame, area: Rect) {
    let focused = model.focus == Focus::Chat;
    let block = Block::default()
        .title(CHAT_TITLE)
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let suggestions_visible = model.suggestions_visible();
    #[allow(clippy::cast_possible_truncation)]
    let suggestion_rows = if suggestions_visible {
        SUGGESTED_QUESTIONS.len() as u16 + 1
    } else {
        0
    };
    let [transcript_area, suggestion_area, input_area, hint_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(suggestion_rows),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let lines = transcript_lines(model, transcript_area.width);
    model.chat_viewport.set_height(transcript_area.height);
    model.chat_viewport.set_total_lines(lines.len());
    let range = model.chat_viewport.visible_range();
    let visible: Vec<Line> = lines[range].to_vec();
    frame.render_widget(Paragraph::new(visible), transcript_area);

    if suggestions_visible {
        render_suggestions(model, frame, suggestion_area);
    }
    render_input(model, frame, input_area, focused);
    frame.render_widget(
        Paragraph::new(Line::styled(INPUT_HINT, dim_style())).alignment(Alignment::Center),
        hint_area,
    );
}

fn render_suggestions(model: &Model, frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::styled(SUGGESTIONS_HEADING, section_style())];
    for (idx, question) in SUGGESTED_QUESTIONS.iter().enumerate() {
        let selected = model.suggestion_cursor == Some(idx);
        let marker = if selected { ">" } else { " " };
        let style = if selected {
            accent_style().add_modifier(Modifier::REVERSED)
        } else {
            accent_style()
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{marker} ")),
            Span::styled((*question).to_string(), style),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_input(model: &Model, frame: &mut Frame, area: Rect, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    let inner_width = usize::from(block.inner(area).width);

    let line = if model.chat_input.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(Span::raw("\u{258f}"));
        }
        spans.push(Span::styled(INPUT_PLACEHOLDER, dim_style()));
        Line::from(spans)
    } else {
        let cursor = if focused { "\u{258f}" } else { "" };
        let available = inner_width.saturating_sub(display_width(cursor));
        Line::raw(format!("{}{cursor}", tail_fitting(&model.chat_input, available)))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// The longest suffix of `text` that fits in `width` columns.
fn tail_fitting(text: &str, width: usize) -> &str {
    if display_width(text) <= width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Message, Profile, update};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn answered(question: &str) -> Model {
        [
            Message::Send(question.to_string()),
            Message::DeliverReply(question.to_string()),
        ]
        .into_iter()
        .fold(Model::new(Profile::default()), update)
    }

    #[test]
    fn test_transcript_starts_with_welcome() {
        let model = Model::new(Profile::default());
        let lines = transcript_lines(&model, 40);
        assert_eq!(line_text(&lines[0]), "Assistant");
        assert!(line_text(&lines[1]).starts_with("  Welcome to Oakridge Estates"));
    }

    #[test]
    fn test_transcript_lists_numbered_sources() {
        let model = answered("fence?");
        let texts: Vec<String> = transcript_lines(&model, 60).iter().map(line_text).collect();
        assert!(texts.iter().any(|t| t == "  Sources:"));
        assert!(texts.iter().any(|t| t == "  [1] Architectural Guidelines, p.4"));
        assert!(texts.iter().any(|t| t == "  [2] Architectural Guidelines, p.5"));
    }

    #[test]
    fn test_active_citation_shows_excerpt_block() {
        let model = update(answered("pets"), Message::ToggleCitation(1));
        let texts: Vec<String> = transcript_lines(&model, 200).iter().map(line_text).collect();
        assert!(texts.iter().any(|t| t.contains("Dogs must be leashed")));
        assert!(texts.iter().any(|t| t.ends_with("Source: Pet Policies, Page 2")));
    }

    #[test]
    fn test_excerpt_only_under_latest_cited_reply() {
        let model = answered("fence");
        let model = [
            Message::Send("noise".to_string()),
            Message::DeliverReply("noise".to_string()),
            Message::ToggleCitation(0),
        ]
        .into_iter()
        .fold(model, update);
        let texts: Vec<String> = transcript_lines(&model, 200).iter().map(line_text).collect();
        let sources: Vec<_> = texts.iter().filter(|t| t.contains("Source: ")).collect();
        assert_eq!(sources.len(), 1);
        assert!(sources[0].contains("Noise Restrictions, Page 1"));
    }

    #[test]
    fn test_typing_indicator_while_reply_pending() {
        let model = update(
            Model::new(Profile::default()),
            Message::Send("fence?".to_string()),
        );
        let lines = transcript_lines(&model, 40);
        let last = lines.last().map(line_text).unwrap_or_default();
        assert!(last.contains(TYPING_INDICATOR));
    }

    #[test]
    fn test_tail_fitting_keeps_end_of_input() {
        assert_eq!(tail_fitting("hello", 10), "hello");
        assert_eq!(tail_fitting("hello world", 5), "world");
        assert_eq!(tail_fitting("abc", 0), "");
    }
}
