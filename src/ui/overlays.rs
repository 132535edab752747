use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

use super::style::{dim_style, section_style};

/// Every line of the help overlay, before scrolling.
pub fn help_lines(model: &Model) -> Vec<Line<'static>> {
    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section = section_style();
    let mut all_lines: Vec<Line> = Vec::new();

    all_lines.push(Line::styled("Navigation", section));
    all_lines.push(Line::raw("  1-4                 Dashboard / Documents / Payments / Support"));
    all_lines.push(Line::raw("  Tab / Shift-Tab     Next / previous tab"));
    all_lines.push(Line::raw("  j/k or Up/Down      Move selection"));
    all_lines.push(Line::raw("  Enter               Open document / ask about rule"));
    all_lines.push(Line::raw("  o                   Open a dashboard rule's document"));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("Documents", section));
    all_lines.push(Line::raw("  /                   Search by title or category"));
    all_lines.push(Line::raw("  Enter               Keep search, back to list"));
    all_lines.push(Line::raw("  Esc                 Clear search"));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("Document Viewer", section));
    all_lines.push(Line::raw("  j/k, Space/b        Scroll / page"));
    all_lines.push(Line::raw("  g / G               Top / bottom"));
    all_lines.push(Line::raw("  a                   Ask the assistant about it"));
    all_lines.push(Line::raw("  Esc / h             Back"));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("Assistant", section));
    all_lines.push(Line::raw("  c                   Toggle chat panel"));
    all_lines.push(Line::raw("  i                   Focus chat input"));
    all_lines.push(Line::raw("  Enter               Send question or suggestion"));
    all_lines.push(Line::raw("  Up/Down             Pick suggestion / scroll"));
    all_lines.push(Line::raw("  Left/Right or [ ]   Select source"));
    all_lines.push(Line::raw("  Ctrl-o or v         View cited document"));
    all_lines.push(Line::raw("  Ctrl-y or y         Copy source excerpt"));
    all_lines.push(Line::raw("  + / -               Rate the answer"));
    all_lines.push(Line::raw("  Esc                 Leave chat input"));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("Other", section));
    all_lines.push(Line::raw("  q / Ctrl-c          Quit"));
    all_lines.push(Line::raw("  ? / F1              Toggle help"));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("Config", section));
    all_lines.push(Line::raw(format!("  Global: {global_cfg}")));
    all_lines.push(Line::raw(format!("  Local override: {local_cfg}")));

    all_lines
}

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(6).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let all_lines = help_lines(model);

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    // Inner area: border(1) + padding(1) on each side = 4
    let inner = Rect::new(
        popup.x + 2,
        popup.y + 2,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(4),
    );

    // Reserve 1 row at bottom for footer hint
    let content_height_u16 = inner.height.saturating_sub(1);
    let content_height = content_height_u16 as usize;
    let max_scroll = all_lines.len().saturating_sub(content_height);
    let scroll = model.help_scroll_offset.min(max_scroll);

    let end = (scroll + content_height).min(all_lines.len());
    let visible: Vec<Line> = all_lines[scroll..end].to_vec();

    let content_area = Rect::new(inner.x, inner.y, inner.width, content_height_u16);
    frame.render_widget(Paragraph::new(visible), content_area);

    let footer_area = Rect::new(inner.x, inner.y + content_height_u16, inner.width, 1);
    let footer = Line::styled("j/k scroll \u{2502} any other key closes", dim_style());
    frame.render_widget(Paragraph::new(footer), footer_area);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
