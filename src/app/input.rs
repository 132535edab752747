use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;

use crate::app::{App, Focus, Message, Model, Tab};
use crate::assistant::SUGGESTED_QUESTIONS;
use crate::dashboard::COMMON_RULES;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Resize(w, h) => {
                crate::perf::log_event("event.resize", format!("width={w} height={h}"));
                Some(Message::Redraw)
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return match key.code {
                KeyCode::Char('j') | KeyCode::Down => Some(Message::HelpScrollDown),
                KeyCode::Char('k') | KeyCode::Up => Some(Message::HelpScrollUp),
                _ => Some(Message::HideHelp),
            };
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Message::Quit);
        }

        match model.focus {
            Focus::Search => Self::handle_search_key(key, model),
            Focus::Chat if model.chat_open => Self::handle_chat_key(key, model),
            Focus::Main | Focus::Chat => Self::handle_main_key(key, model),
        }
    }

    fn handle_search_key(key: KeyEvent, model: &Model) -> Option<Message> {
        match key.code {
            KeyCode::Esc => Some(Message::ClearSearch),
            KeyCode::Enter => Some(Message::EndSearch),
            KeyCode::Backspace => {
                let mut next = model.search_query.clone();
                next.pop();
                Some(Message::SearchInput(next))
            }
            KeyCode::Char(c) if is_plain(key) => {
                let mut next = model.search_query.clone();
                next.push(c);
                Some(Message::SearchInput(next))
            }
            _ => None,
        }
    }

    fn handle_chat_key(key: KeyEvent, model: &Model) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc | KeyCode::Tab => Some(Message::FocusMain),
            KeyCode::Enter => {
                if model.chat_input.trim().is_empty() {
                    model
                        .suggestion_cursor
                        .filter(|_| model.suggestions_visible())
                        .and_then(|idx| SUGGESTED_QUESTIONS.get(idx))
                        .map(|question| Message::Send((*question).to_string()))
                } else {
                    Some(Message::Send(model.chat_input.clone()))
                }
            }
            KeyCode::Backspace => {
                let mut next = model.chat_input.clone();
                next.pop();
                Some(Message::ChatInput(next))
            }
            KeyCode::Char('o') if ctrl => Some(Message::ViewCitedDocument),
            KeyCode::Char('y') if ctrl => Some(Message::CopyCitation),
            KeyCode::Char(c) if is_plain(key) => {
                let mut next = model.chat_input.clone();
                next.push(c);
                Some(Message::ChatInput(next))
            }
            KeyCode::Up if model.suggestions_visible() => Some(Message::SuggestionUp),
            KeyCode::Down if model.suggestions_visible() => Some(Message::SuggestionDown),
            KeyCode::Up => Some(Message::ChatScrollUp(1)),
            KeyCode::Down => Some(Message::ChatScrollDown(1)),
            KeyCode::PageUp => Some(Message::ChatScrollUp(model.chat_viewport.height() as usize)),
            KeyCode::PageDown => {
                Some(Message::ChatScrollDown(model.chat_viewport.height() as usize))
            }
            KeyCode::Left => Some(Message::PrevCitation),
            KeyCode::Right => Some(Message::NextCitation),
            _ => None,
        }
    }

    fn handle_main_key(key: KeyEvent, model: &Model) -> Option<Message> {
        // Keys that work everywhere outside text entry
        match key.code {
            KeyCode::Char('q') => return Some(Message::Quit),
            KeyCode::Char('?') | KeyCode::F(1) => return Some(Message::ToggleHelp),
            KeyCode::Char(c @ '1'..='4') => {
                let idx = (c as usize) - ('1' as usize);
                return Tab::ALL.get(idx).map(|tab| Message::SelectTab(*tab));
            }
            KeyCode::Tab => return Some(Message::NextTab),
            KeyCode::BackTab => return Some(Message::PrevTab),
            KeyCode::Char('c') => return Some(Message::ToggleChat),
            KeyCode::Char('i') => {
                return Some(if model.chat_open {
                    Message::FocusChat
                } else {
                    Message::OpenChat
                });
            }
            KeyCode::Char('[') => return Some(Message::PrevCitation),
            KeyCode::Char(']') => return Some(Message::NextCitation),
            KeyCode::Char('v') => return Some(Message::ViewCitedDocument),
            KeyCode::Char('y') => return Some(Message::CopyCitation),
            KeyCode::Char('+') => return Some(Message::Feedback(true)),
            KeyCode::Char('-') => return Some(Message::Feedback(false)),
            _ => {}
        }

        if model.open_document().is_some() {
            return Self::handle_viewer_key(key, model);
        }

        match model.tab {
            Tab::Dashboard => match key.code {
                KeyCode::Char('j') | KeyCode::Down => Some(Message::CursorDown),
                KeyCode::Char('k') | KeyCode::Up => Some(Message::CursorUp),
                KeyCode::Enter => COMMON_RULES
                    .get(model.rule_cursor)
                    .map(|rule| Message::Send(rule.question.to_string())),
                KeyCode::Char('o') => COMMON_RULES
                    .get(model.rule_cursor)
                    .map(|rule| Message::OpenDocument(rule.document_id)),
                _ => None,
            },
            Tab::Documents => match key.code {
                KeyCode::Char('j') | KeyCode::Down => Some(Message::CursorDown),
                KeyCode::Char('k') | KeyCode::Up => Some(Message::CursorUp),
                KeyCode::Enter => model
                    .visible_documents()
                    .get(model.doc_cursor)
                    .map(|doc| Message::OpenDocument(doc.id)),
                KeyCode::Char('/') => Some(Message::StartSearch),
                KeyCode::Esc if !model.search_query.is_empty() => Some(Message::ClearSearch),
                _ => None,
            },
            Tab::Payments | Tab::Support => None,
        }
    }

    fn handle_viewer_key(key: KeyEvent, model: &Model) -> Option<Message> {
        let vp = &model.doc_viewport;
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
                Some(Message::CloseDocument)
            }
            KeyCode::Char('j') | KeyCode::Down => vp.can_scroll_down().then_some(Message::ScrollDown(1)),
            KeyCode::Char('k') | KeyCode::Up => vp.can_scroll_up().then_some(Message::ScrollUp(1)),
            KeyCode::Char(' ') | KeyCode::PageDown => vp.can_scroll_down().then_some(Message::PageDown),
            KeyCode::Char('b') | KeyCode::PageUp => vp.can_scroll_up().then_some(Message::PageUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Message::GoToTop),
            KeyCode::Char('G') | KeyCode::End => Some(Message::GoToBottom),
            KeyCode::Char('a') => Some(Message::AskAboutDocument),
            _ => None,
        }
    }

    pub(super) fn view(model: &mut Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}
