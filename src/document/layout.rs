//! Word wrapping and body layout.

use unicode_width::UnicodeWidthStr;

use super::types::{Document, LineType, RenderedLine};
use super::body::{COMMUNITY_PLACEHOLDER, PREAMBLE, specific_regulations};

/// Wrap `text` to `width` display columns.
///
/// Words longer than the width are kept whole on their own line. Every
/// returned line starts with `prefix_first` (first line) or `prefix_next`
/// (continuations), and the prefixes count toward the width.
pub fn wrap_text(text: &str, width: usize, prefix_first: &str, prefix_next: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = prefix_first.to_string();
    let mut current_len = display_width(prefix_first);
    let mut has_word = false;

    for token in split_tokens(text) {
        let token_len = display_width(token);
        let token_is_ws = token.chars().all(char::is_whitespace);

        if current_len + token_len > width && has_word {
            lines.push(current.trim_end().to_string());
            current = prefix_next.to_string();
            current_len = display_width(prefix_next);
            has_word = false;
        }

        if token_is_ws && !has_word {
            // Drop leading whitespace at wrapped line starts.
            continue;
        }

        current.push_str(token);
        current_len += token_len;
        if !token_is_ws {
            has_word = true;
        }
    }

    lines.push(current.trim_end().to_string());
    lines
}

pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn split_tokens(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut ws_state: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let is_ws = ch.is_whitespace();
        match ws_state {
            Some(state) if state == is_ws => {}
            Some(_) => {
                out.push(&text[start..idx]);
                start = idx;
                ws_state = Some(is_ws);
            }
            None => ws_state = Some(is_ws),
        }
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

/// Lay out the full body of `doc` as display lines wrapped to `width`.
pub fn layout_body(doc: &Document, community: &str, width: u16) -> Vec<RenderedLine> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();

    push_wrapped(&mut lines, doc.title, width, LineType::Heading(1));
    push_wrapped(
        &mut lines,
        &format!("{} pages \u{b7} {}", doc.page_count, doc.category),
        width,
        LineType::Paragraph,
    );
    lines.push(RenderedLine::empty());

    push_wrapped(&mut lines, "I. Purpose and Scope", width, LineType::Heading(2));
    push_wrapped(
        &mut lines,
        &format!(
            "This document outlines the policies and regulations regarding {} for the {} Homeowners Association, as approved by the Board of Directors.",
            doc.title.to_lowercase(),
            community
        ),
        width,
        LineType::Paragraph,
    );
    lines.push(RenderedLine::empty());
    for subsection in PREAMBLE {
        push_wrapped(&mut lines, subsection.heading, width, LineType::Heading(3));
        for clause in subsection.clauses {
            let text = clause.text.replace(COMMUNITY_PLACEHOLDER, community);
            push_wrapped(&mut lines, &text, width, LineType::Paragraph);
        }
        lines.push(RenderedLine::empty());
    }

    let specific = specific_regulations(doc.id);
    if !specific.is_empty() {
        push_wrapped(&mut lines, "II. Specific Regulations", width, LineType::Heading(2));
        for subsection in specific {
            push_wrapped(&mut lines, subsection.heading, width, LineType::Heading(3));
            for clause in subsection.clauses {
                let label = format!("{}: ", clause.label);
                let label_len = label.chars().count();
                for (i, line) in wrap_text(&format!("{label}{}", clause.text), width, "", "")
                    .into_iter()
                    .enumerate()
                {
                    let label_len = if i == 0 { label_len.min(line.chars().count()) } else { 0 };
                    lines.push(RenderedLine::new(line, LineType::Clause { label_len }));
                }
            }
            lines.push(RenderedLine::empty());
        }
    }

    while lines.last().is_some_and(|l| l.line_type() == LineType::Empty) {
        lines.pop();
    }
    lines
}

fn push_wrapped(lines: &mut Vec<RenderedLine>, text: &str, width: usize, line_type: LineType) {
    for line in wrap_text(text, width, "", "") {
        lines.push(RenderedLine::new(line, line_type));
    }
}
