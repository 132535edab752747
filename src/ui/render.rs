use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Tabs, Wrap};

use crate::app::{Focus, Model, Tab};
use crate::dashboard::{CARDS, COMMON_RULES, Card, PAYMENTS_BLURB, SUMMARY, SUPPORT_BLURB};
use crate::document::{self, Document, LAST_UPDATED, LineType, RenderedLine};

use super::style::{
    accent_style, border_style, clause_label_style, dim_style, section_style, style_for_line_type,
};
use super::{CHAT_WIDTH_PERCENT, DOCUMENT_PADDING, MAIN_WIDTH_PERCENT, chat, overlays, status};

pub const NO_MATCHES: &str = "No documents match your search criteria.";
pub const ASK_PROMPT: &str = "Have a question about this document? Press a to ask the assistant.";

/// Split the body into the main pane and the assistant panel.
pub fn split_body_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(MAIN_WIDTH_PERCENT),
            Constraint::Percentage(CHAT_WIDTH_PERCENT),
        ])
        .split(area)
}

/// Render the complete UI.
///
/// Takes the model mutably so the scrolling panes can record their height
/// and content length for the current terminal size.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();
    let toast_active = model.active_toast().is_some();
    let footer_rows = 1 + u16::from(toast_active);

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(footer_rows),
    ])
    .areas(area);

    render_header(model, frame, header_area);

    if model.chat_open {
        let columns = split_body_columns(body_area);
        render_main(model, frame, columns[0]);
        chat::render_chat_panel(model, frame, columns[1]);
    } else {
        render_main(model, frame, body_area);
    }

    let status_area = Rect {
        y: footer_area.y + footer_area.height.saturating_sub(1),
        height: 1,
        ..footer_area
    };
    if toast_active {
        let toast_area = Rect {
            height: 1,
            ..footer_area
        };
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, status_area);

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_header(model: &Model, frame: &mut Frame, area: Rect) {
    let titles = Tab::ALL
        .iter()
        .enumerate()
        .map(|(idx, tab)| format!("{} {}", idx + 1, tab.title()));
    let block = Block::default()
        .title(Line::styled(
            format!("{} \u{b7} Covenant Hub", model.profile.community),
            accent_style().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL);
    let tabs = Tabs::new(titles)
        .select(model.tab.index())
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
        .block(block);
    frame.render_widget(tabs, area);
}

fn render_main(model: &mut Model, frame: &mut Frame, area: Rect) {
    if let Some(doc) = model.open_document() {
        render_document_viewer(model, doc, frame, area);
        return;
    }
    match model.tab {
        Tab::Dashboard => render_dashboard(model, frame, area),
        Tab::Documents => render_documents(model, frame, area),
        Tab::Payments => render_blurb(frame, area, "Payments", PAYMENTS_BLURB),
        Tab::Support => render_blurb(frame, area, "Support", SUPPORT_BLURB),
    }
}

fn render_dashboard(model: &Model, frame: &mut Frame, area: Rect) {
    let [banner_area, cards_area, rules_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(7),
        Constraint::Min(3),
    ])
    .areas(area);

    let banner = Paragraph::new(vec![
        Line::styled(
            format!("Welcome back, {}!", model.profile.resident),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(SUMMARY),
    ])
    .block(Block::default().borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(banner, banner_area);

    #[allow(clippy::cast_possible_truncation)]
    let constraints = vec![Constraint::Ratio(1, CARDS.len() as u32); CARDS.len()];
    let card_areas = Layout::horizontal(constraints).split(cards_area);
    for (card, card_area) in CARDS.iter().zip(card_areas.iter()) {
        render_card(card, frame, *card_area);
    }

    render_rules(model, frame, rules_area);
}

fn render_card(card: &Card, frame: &mut Frame, area: Rect) {
    let mut block = Block::default()
        .title(Line::styled(card.title, Style::default().add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1));
    if let Some(badge) = card.badge {
        block = block.title_top(Line::styled(format!(" {badge} "), section_style()).right_aligned());
    }

    let mut lines = vec![Line::styled(card.subtitle, accent_style())];
    lines.extend(card.lines.iter().map(|line| Line::raw(*line)));
    lines.push(Line::styled(format!("\u{2192} {}", card.action), dim_style()));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_rules(model: &Model, frame: &mut Frame, area: Rect) {
    let selectable = model.focus == Focus::Main;
    let mut lines = Vec::new();
    for (idx, rule) in COMMON_RULES.iter().enumerate() {
        let selected = selectable && model.rule_cursor == idx;
        let marker = if selected { ">" } else { " " };
        let title_style = if selected {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{marker} ")),
            Span::styled(rule.title, title_style),
        ]));
        lines.push(Line::styled(format!("  {}", rule.summary), dim_style()));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled("Enter: ask the assistant \u{b7} o: open the document", dim_style()));

    let block = Block::default()
        .title("Commonly Referenced Rules")
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Lines of the documents list and the index of the selected row's line.
fn document_list_lines(model: &Model) -> (Vec<Line<'static>>, Option<usize>) {
    let filtered = crate::search::filter_documents(&model.search_query);
    let groups = document::group_by_category(&filtered);
    let mut lines = Vec::new();
    if groups.is_empty() {
        lines.push(Line::styled(NO_MATCHES, dim_style()));
        return (lines, None);
    }

    let selectable = model.focus == Focus::Main;
    let mut row = 0;
    let mut cursor_line = None;
    for (category, docs) in groups {
        lines.push(Line::styled(category.heading(), section_style()));
        for doc in docs {
            let selected = row == model.doc_cursor;
            if selected {
                cursor_line = Some(lines.len());
            }
            lines.push(document_title_line(doc, &model.search_query, selected && selectable));
            lines.push(Line::styled(
                format!(
                    "    {} pages \u{b7} Last updated: {LAST_UPDATED}",
                    doc.page_count
                ),
                dim_style(),
            ));
            row += 1;
        }
        lines.push(Line::raw(""));
    }
    lines.pop();
    (lines, cursor_line)
}

fn document_title_line(doc: &Document, query: &str, selected: bool) -> Line<'static> {
    let base = if selected {
        Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let marker = if selected { "> " } else { "  " };
    let mut spans = vec![Span::raw(marker)];
    spans.extend(highlight_matches(doc.title, query, base));
    Line::from(spans)
}

/// Split `text` into spans, highlighting case-insensitive matches of `query`.
fn highlight_matches(text: &str, query: &str, base: Style) -> Vec<Span<'static>> {
    let needle = query.to_lowercase();
    let haystack = text.to_lowercase();
    // Byte offsets only line up when lowercasing preserves length.
    if needle.is_empty() || haystack.len() != text.len() {
        return vec![Span::styled(text.to_string(), base)];
    }

    let highlight = base.bg(Color::Yellow).fg(Color::Black);
    let mut spans = Vec::new();
    let mut pos = 0;
    for (start, matched) in haystack.match_indices(&needle) {
        if start > pos {
            spans.push(Span::styled(text[pos..start].to_string(), base));
        }
        let end = start + matched.len();
        spans.push(Span::styled(text[start..end].to_string(), highlight));
        pos = end;
    }
    if pos < text.len() {
        spans.push(Span::styled(text[pos..].to_string(), base));
    }
    spans
}

fn render_documents(model: &Model, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title("Covenant Documents")
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [search_area, _, list_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(inner);

    let searching = model.focus == Focus::Search;
    let search_line = if searching {
        Line::from(vec![
            Span::styled("Search: ", section_style()),
            Span::raw(format!("{}\u{258f}", model.search_query)),
            Span::styled("  Enter: done  Esc: clear", dim_style()),
        ])
    } else if model.search_query.is_empty() {
        Line::styled("/ to search documents by title or category", dim_style())
    } else {
        Line::from(vec![
            Span::styled("Search: ", dim_style()),
            Span::raw(model.search_query.clone()),
            Span::styled("  Esc: clear", dim_style()),
        ])
    };
    frame.render_widget(
        Paragraph::new(search_line).style(border_style(searching)),
        search_area,
    );

    let (lines, cursor_line) = document_list_lines(model);
    let height = list_area.height as usize;
    let offset = cursor_line.map_or(0, |line| (line + 2).saturating_sub(height));
    let visible: Vec<Line> = lines.into_iter().skip(offset).take(height).collect();
    frame.render_widget(Paragraph::new(visible), list_area);
}

fn render_blurb(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .padding(Padding::uniform(1));
    frame.render_widget(
        Paragraph::new(text.to_string())
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_document_viewer(model: &mut Model, doc: &Document, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Line::styled(
            format!(" {} ", doc.title),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::styled(" Esc: back ", dim_style()).right_aligned())
        .borders(Borders::ALL)
        .padding(Padding::horizontal(DOCUMENT_PADDING));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body_area, _, prompt_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let body = document::layout_body(doc, &model.profile.community, body_area.width);
    model.doc_viewport.set_height(body_area.height);
    model.doc_viewport.set_total_lines(body.len());

    let content: Vec<Line> = body[model.doc_viewport.visible_range()]
        .iter()
        .map(styled_body_line)
        .collect();
    frame.render_widget(Paragraph::new(content), body_area);

    frame.render_widget(
        Paragraph::new(Line::styled(ASK_PROMPT, accent_style())),
        prompt_area,
    );
}

fn styled_body_line(line: &RenderedLine) -> Line<'static> {
    let line_type = line.line_type();
    let text = line.content();
    match line_type {
        LineType::Clause { label_len } if label_len > 0 => {
            let split = text
                .char_indices()
                .nth(label_len)
                .map_or(text.len(), |(idx, _)| idx);
            Line::from(vec![
                Span::styled(text[..split].to_string(), clause_label_style()),
                Span::raw(text[split..].to_string()),
            ])
        }
        _ => Line::styled(text.to_string(), style_for_line_type(&line_type)),
    }
}
