use crate::app::Model;
use crate::app::model::{Focus, Tab, ToastLevel};
use crate::assistant::{self, SUGGESTED_QUESTIONS};
use crate::dashboard::COMMON_RULES;
use crate::document::{self, DocumentId};
use crate::ui::viewport::Viewport;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Tabs
    /// Switch to a tab; an open document stays open
    SelectTab(Tab),
    NextTab,
    PrevTab,

    // Lists
    /// Move the dashboard or documents cursor up
    CursorUp,
    /// Move the dashboard or documents cursor down
    CursorDown,

    // Document viewer
    /// Show a document; unknown ids are ignored
    OpenDocument(DocumentId),
    CloseDocument,
    ScrollUp(usize),
    ScrollDown(usize),
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    /// Open the chat prefilled with a question about the open document
    AskAboutDocument,

    // Search
    StartSearch,
    SearchInput(String),
    /// Stop editing, keep the query
    EndSearch,
    /// Stop editing and drop the query
    ClearSearch,

    // Chat
    ToggleChat,
    OpenChat,
    CloseChat,
    FocusChat,
    FocusMain,
    ChatInput(String),
    /// Post a question; blank text is ignored
    Send(String),
    /// The simulated assistant answers a previously sent question
    DeliverReply(String),
    SuggestionUp,
    SuggestionDown,
    ChatScrollUp(usize),
    ChatScrollDown(usize),
    NextCitation,
    PrevCitation,
    /// Select a citation chip, or deselect it when already active
    ToggleCitation(usize),
    /// Open the document referenced by the active citation
    ViewCitedDocument,
    /// Copy the active citation excerpt to the clipboard
    CopyCitation,
    /// Rate the latest answer
    Feedback(bool),

    // Help
    ToggleHelp,
    HideHelp,
    HelpScrollUp,
    HelpScrollDown,

    // Window
    /// Redraw screen
    Redraw,

    // Application
    Quit,
}

/// Whether `text` would be accepted by [`Message::Send`].
pub fn is_sendable(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// Clipboard writes and reply scheduling happen in the event loop.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Tabs
        Message::SelectTab(tab) => select_tab(&mut model, tab),
        Message::NextTab => {
            let tab = model.tab.next();
            select_tab(&mut model, tab);
        }
        Message::PrevTab => {
            let tab = model.tab.prev();
            select_tab(&mut model, tab);
        }

        // Lists
        Message::CursorUp => match model.tab {
            Tab::Dashboard => model.rule_cursor = model.rule_cursor.saturating_sub(1),
            Tab::Documents => model.doc_cursor = model.doc_cursor.saturating_sub(1),
            Tab::Payments | Tab::Support => {}
        },
        Message::CursorDown => match model.tab {
            Tab::Dashboard => {
                model.rule_cursor = (model.rule_cursor + 1).min(COMMON_RULES.len() - 1);
            }
            Tab::Documents => {
                model.doc_cursor += 1;
                model.clamp_doc_cursor();
            }
            Tab::Payments | Tab::Support => {}
        },

        // Document viewer
        Message::OpenDocument(id) => open_document(&mut model, id),
        Message::CloseDocument => {
            model.document_view = None;
        }
        Message::ScrollUp(n) => model.doc_viewport.scroll_up(n),
        Message::ScrollDown(n) => model.doc_viewport.scroll_down(n),
        Message::PageUp => model.doc_viewport.page_up(),
        Message::PageDown => model.doc_viewport.page_down(),
        Message::GoToTop => model.doc_viewport.go_to_top(),
        Message::GoToBottom => model.doc_viewport.go_to_bottom(),
        Message::AskAboutDocument => {
            if let Some(doc) = model.open_document() {
                model.chat_input = format!("Can you explain the {} rules?", doc.title);
                model.chat_open = true;
                model.focus = Focus::Chat;
            }
        }

        // Search
        Message::StartSearch => {
            model.tab = Tab::Documents;
            model.focus = Focus::Search;
        }
        Message::SearchInput(query) => {
            model.search_query = query;
            model.doc_cursor = 0;
        }
        Message::EndSearch => {
            model.focus = Focus::Main;
        }
        Message::ClearSearch => {
            model.search_query.clear();
            model.doc_cursor = 0;
            model.focus = Focus::Main;
        }

        // Chat
        Message::ToggleChat => {
            model.chat_open = !model.chat_open;
            model.focus = if model.chat_open {
                Focus::Chat
            } else {
                Focus::Main
            };
        }
        Message::OpenChat => {
            model.chat_open = true;
            model.focus = Focus::Chat;
        }
        Message::CloseChat => {
            model.chat_open = false;
            if model.focus == Focus::Chat {
                model.focus = Focus::Main;
            }
        }
        Message::FocusChat => {
            if model.chat_open {
                model.focus = Focus::Chat;
            }
        }
        Message::FocusMain => {
            model.focus = Focus::Main;
        }
        Message::ChatInput(text) => {
            model.chat_input = text;
        }
        Message::Send(text) => {
            if is_sendable(&text) {
                model.chat.push_user(text);
                model.chat_input.clear();
                model.show_suggestions = false;
                model.suggestion_cursor = None;
                model.pending_replies += 1;
                model.chat_viewport.follow();
                if !model.chat_open {
                    model.show_toast(ToastLevel::Info, "Question sent, press c to see the answer");
                }
            }
        }
        Message::DeliverReply(question) => {
            let reply = assistant::dispatch(&question);
            if !reply.citations.is_empty() {
                model.active_citation = None;
            }
            model.chat.push_reply(reply);
            model.pending_replies = model.pending_replies.saturating_sub(1);
            model.chat_viewport.follow();
        }
        Message::SuggestionUp => {
            if model.suggestions_visible() {
                model.suggestion_cursor = match model.suggestion_cursor {
                    None | Some(0) => Some(0),
                    Some(i) => Some(i - 1),
                };
            }
        }
        Message::SuggestionDown => {
            if model.suggestions_visible() {
                let last = SUGGESTED_QUESTIONS.len() - 1;
                model.suggestion_cursor = Some(model.suggestion_cursor.map_or(0, |i| (i + 1).min(last)));
            }
        }
        Message::ChatScrollUp(n) => model.chat_viewport.scroll_up(n),
        Message::ChatScrollDown(n) => {
            model.chat_viewport.scroll_down(n);
            if !model.chat_viewport.can_scroll_down() {
                model.chat_viewport.follow();
            }
        }
        Message::NextCitation => {
            let count = model.selectable_citations().len();
            model.active_citation = match model.active_citation {
                _ if count == 0 => None,
                None => Some(0),
                Some(i) if i + 1 < count => Some(i + 1),
                Some(_) => None,
            };
        }
        Message::PrevCitation => {
            let count = model.selectable_citations().len();
            model.active_citation = match model.active_citation {
                _ if count == 0 => None,
                None => Some(count - 1),
                Some(0) => None,
                Some(i) => Some(i - 1),
            };
        }
        Message::ToggleCitation(idx) => {
            if idx < model.selectable_citations().len() {
                model.active_citation = if model.active_citation == Some(idx) {
                    None
                } else {
                    Some(idx)
                };
            }
        }
        Message::ViewCitedDocument => {
            if let Some(id) = model.active_citation_ref().map(|c| c.document_id) {
                open_document(&mut model, id);
                model.focus = Focus::Main;
            }
        }
        Message::CopyCitation => {
            if model.active_citation_ref().is_none() {
                model.show_toast(ToastLevel::Info, "Select a source first ([ or ])");
            }
        }
        Message::Feedback(helpful) => {
            let text = if helpful {
                "Thanks for the feedback!"
            } else {
                "Thanks, we'll use this to improve answers."
            };
            model.show_toast(ToastLevel::Info, text);
        }

        // Help
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
            model.help_scroll_offset = 0;
        }
        Message::HideHelp => {
            model.help_visible = false;
            model.help_scroll_offset = 0;
        }
        Message::HelpScrollUp => {
            model.help_scroll_offset = model.help_scroll_offset.saturating_sub(1);
        }
        Message::HelpScrollDown => {
            model.help_scroll_offset += 1;
        }

        Message::Redraw => {}
        Message::Quit => {
            model.should_quit = true;
        }
    }

    model
}

fn select_tab(model: &mut Model, tab: Tab) {
    model.tab = tab;
    if model.focus == Focus::Search {
        model.focus = Focus::Main;
    }
}

fn open_document(model: &mut Model, id: DocumentId) {
    if document::find(id).is_none() {
        return;
    }
    model.document_view = Some(id);
    model.doc_viewport = Viewport::new(model.doc_viewport.height(), 0);
}
