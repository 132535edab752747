use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::assistant::{FALLBACK_CONTENT, Role, SUGGESTED_QUESTIONS};
use crate::dashboard::COMMON_RULES;

use super::event_loop::ReplyTimer;
use super::{App, Focus, Message, Model, Profile, Tab, ToastLevel, update};

fn create_test_model() -> Model {
    Model::new(Profile::default())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn apply(model: Model, msgs: impl IntoIterator<Item = Message>) -> Model {
    msgs.into_iter().fold(model, update)
}

fn ask_and_answer(model: Model, question: &str) -> Model {
    apply(
        model,
        [
            Message::Send(question.to_string()),
            Message::DeliverReply(question.to_string()),
        ],
    )
}

#[test]
fn test_initial_state() {
    let model = create_test_model();
    assert_eq!(model.tab, Tab::Dashboard);
    assert_eq!(model.focus, Focus::Main);
    assert!(model.document_view.is_none());
    assert!(!model.chat_open);
    assert_eq!(model.chat.len(), 1);
    assert!(model.suggestions_visible());
    assert_eq!(model.pending_replies, 0);
}

#[test]
fn test_select_tab_changes_active_tab() {
    let model = update(create_test_model(), Message::SelectTab(Tab::Payments));
    assert_eq!(model.tab, Tab::Payments);
}

#[test]
fn test_next_and_prev_tab_wrap() {
    let model = update(create_test_model(), Message::PrevTab);
    assert_eq!(model.tab, Tab::Support);
    let model = update(model, Message::NextTab);
    assert_eq!(model.tab, Tab::Dashboard);
}

#[test]
fn test_switching_tab_keeps_document_viewer_open() {
    let model = apply(
        create_test_model(),
        [
            Message::SelectTab(Tab::Documents),
            Message::OpenDocument(2),
            Message::SelectTab(Tab::Payments),
        ],
    );
    assert_eq!(model.tab, Tab::Payments);
    assert_eq!(model.document_view, Some(2));

    let model = apply(model, [Message::NextTab, Message::PrevTab]);
    assert_eq!(model.document_view, Some(2));
}

#[test]
fn test_start_search_keeps_document_viewer_open() {
    let model = apply(
        create_test_model(),
        [Message::OpenDocument(4), Message::StartSearch],
    );
    assert_eq!(model.tab, Tab::Documents);
    assert_eq!(model.focus, Focus::Search);
    assert_eq!(model.document_view, Some(4));
}

#[test]
fn test_open_document_sets_view_and_resets_scroll() {
    let mut model = create_test_model();
    model.doc_viewport = crate::ui::viewport::Viewport::new(10, 50);
    model.doc_viewport.scroll_down(20);

    let model = update(model, Message::OpenDocument(3));
    assert_eq!(model.document_view, Some(3));
    assert_eq!(model.doc_viewport.offset(), 0);
    assert_eq!(model.doc_viewport.height(), 10);
}

#[test]
fn test_open_unknown_document_is_ignored() {
    let model = update(create_test_model(), Message::OpenDocument(2));
    let model = update(model, Message::OpenDocument(42));
    assert_eq!(model.document_view, Some(2));

    let model = update(create_test_model(), Message::OpenDocument(0));
    assert!(model.document_view.is_none());
}

#[test]
fn test_close_document() {
    let model = apply(
        create_test_model(),
        [Message::OpenDocument(1), Message::CloseDocument],
    );
    assert!(model.document_view.is_none());
}

#[test]
fn test_ask_about_document_prefills_chat() {
    let model = apply(
        create_test_model(),
        [Message::OpenDocument(2), Message::AskAboutDocument],
    );
    assert_eq!(model.chat_input, "Can you explain the Pet Policies rules?");
    assert!(model.chat_open);
    assert_eq!(model.focus, Focus::Chat);
    assert_eq!(model.chat.len(), 1);
}

#[test]
fn test_ask_about_document_without_document_does_nothing() {
    let model = update(create_test_model(), Message::AskAboutDocument);
    assert!(model.chat_input.is_empty());
    assert!(!model.chat_open);
}

#[test]
fn test_toggle_chat_preserves_transcript() {
    let model = update(create_test_model(), Message::ToggleChat);
    assert!(model.chat_open);
    assert_eq!(model.focus, Focus::Chat);

    let model = ask_and_answer(model, "pets?");
    assert_eq!(model.chat.len(), 3);

    let model = update(model, Message::ToggleChat);
    assert!(!model.chat_open);
    assert_eq!(model.focus, Focus::Main);
    let model = update(model, Message::ToggleChat);
    assert_eq!(model.chat.len(), 3);
}

#[test]
fn test_send_appends_user_message_and_clears_input() {
    let mut model = create_test_model();
    model.chat_input = "Can I paint my door?".to_string();

    let model = update(model, Message::Send("Can I paint my door?".to_string()));
    assert_eq!(model.chat.len(), 2);
    let last = &model.chat.messages()[1];
    assert_eq!(last.role, Role::User);
    assert_eq!(last.content, "Can I paint my door?");
    assert!(model.chat_input.is_empty());
    assert_eq!(model.pending_replies, 1);
    assert!(!model.suggestions_visible());
}

#[test]
fn test_send_blank_text_is_ignored() {
    let mut model = create_test_model();
    model.chat_input = "   ".to_string();

    let model = update(model, Message::Send("   ".to_string()));
    assert_eq!(model.chat.len(), 1);
    assert_eq!(model.chat_input, "   ");
    assert_eq!(model.pending_replies, 0);
    assert!(model.suggestions_visible());
}

#[test]
fn test_send_keeps_leading_and_trailing_whitespace() {
    let model = update(create_test_model(), Message::Send("  fence?  ".to_string()));
    assert_eq!(model.chat.messages()[1].content, "  fence?  ");
}

#[test]
fn test_rule_shortcut_leaves_chat_closed() {
    let model = update(
        create_test_model(),
        Message::Send(COMMON_RULES[2].question.to_string()),
    );
    assert!(!model.chat_open);
    assert_eq!(model.chat.messages()[1].content, COMMON_RULES[2].question);
    assert_eq!(model.pending_replies, 1);

    let (text, level) = model.active_toast().unwrap();
    assert_eq!(level, ToastLevel::Info);
    assert!(text.contains("press c"));
}

#[test]
fn test_send_with_chat_open_shows_no_toast() {
    let model = apply(
        create_test_model(),
        [Message::OpenChat, Message::Send("fence?".to_string())],
    );
    assert!(model.chat_open);
    assert!(model.active_toast().is_none());
}

#[test]
fn test_deliver_reply_appends_canned_answer() {
    let model = ask_and_answer(create_test_model(), "What about fence height?");
    assert_eq!(model.chat.len(), 3);
    assert_eq!(model.pending_replies, 0);

    let reply = &model.chat.messages()[2];
    assert_eq!(reply.role, Role::System);
    assert!(reply.content.contains("6 feet"));
    assert_eq!(reply.citations().len(), 2);
    assert_eq!(reply.citations()[0].page, 4);
}

#[test]
fn test_deliver_reply_fallback_has_no_citations() {
    let model = ask_and_answer(create_test_model(), "When is trash pickup?");
    let reply = &model.chat.messages()[2];
    assert_eq!(reply.content, FALLBACK_CONTENT);
    assert!(reply.citations().is_empty());
}

#[test]
fn test_replies_arrive_in_order_for_concurrent_questions() {
    let model = apply(
        create_test_model(),
        [
            Message::Send("fence?".to_string()),
            Message::Send("pets?".to_string()),
        ],
    );
    assert_eq!(model.pending_replies, 2);

    let model = apply(
        model,
        [
            Message::DeliverReply("fence?".to_string()),
            Message::DeliverReply("pets?".to_string()),
        ],
    );
    assert_eq!(model.pending_replies, 0);
    let contents: Vec<_> = model
        .chat
        .messages()
        .iter()
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(contents[1], "fence?");
    assert_eq!(contents[2], "pets?");
    assert!(contents[3].contains("Architectural Guidelines"));
    assert!(contents[4].contains("Pet Policies"));
}

#[test]
fn test_message_ids_are_unique() {
    let model = ask_and_answer(create_test_model(), "fence");
    let model = ask_and_answer(model, "noise");
    let mut ids: Vec<_> = model.chat.messages().iter().map(|m| m.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 5);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_suggestion_cursor_moves_and_clamps() {
    let model = apply(
        create_test_model(),
        [Message::OpenChat, Message::SuggestionDown],
    );
    assert_eq!(model.suggestion_cursor, Some(0));

    let model = apply(model, std::iter::repeat_n(Message::SuggestionDown, 10));
    assert_eq!(model.suggestion_cursor, Some(SUGGESTED_QUESTIONS.len() - 1));

    let model = apply(model, std::iter::repeat_n(Message::SuggestionUp, 10));
    assert_eq!(model.suggestion_cursor, Some(0));
}

#[test]
fn test_suggestions_never_return_after_first_send() {
    let model = ask_and_answer(create_test_model(), "hello");
    assert!(!model.show_suggestions);
    let model = apply(model, [Message::CloseChat, Message::OpenChat]);
    assert!(!model.suggestions_visible());
    let model = update(model, Message::SuggestionDown);
    assert!(model.suggestion_cursor.is_none());
}

#[test]
fn test_citation_navigation_cycles_through_none() {
    let model = ask_and_answer(create_test_model(), "noise");
    assert!(model.active_citation.is_none());

    let model = update(model, Message::NextCitation);
    assert_eq!(model.active_citation, Some(0));
    let model = update(model, Message::NextCitation);
    assert_eq!(model.active_citation, Some(1));
    let model = update(model, Message::NextCitation);
    assert!(model.active_citation.is_none());

    let model = update(model, Message::PrevCitation);
    assert_eq!(model.active_citation, Some(1));
}

#[test]
fn test_citation_navigation_without_citations_is_noop() {
    let model = update(create_test_model(), Message::NextCitation);
    assert!(model.active_citation.is_none());
    let model = update(model, Message::ToggleCitation(0));
    assert!(model.active_citation.is_none());
}

#[test]
fn test_toggle_citation_selects_and_deselects() {
    let model = ask_and_answer(create_test_model(), "parking");
    let model = update(model, Message::ToggleCitation(1));
    assert_eq!(model.active_citation, Some(1));
    assert_eq!(
        model.active_citation_ref().map(|c| c.page),
        Some(3),
        "second parking citation"
    );
    let model = update(model, Message::ToggleCitation(1));
    assert!(model.active_citation.is_none());
}

#[test]
fn test_new_cited_reply_resets_active_citation() {
    let model = ask_and_answer(create_test_model(), "fence");
    let model = update(model, Message::ToggleCitation(1));
    let model = ask_and_answer(model, "pets");
    assert!(model.active_citation.is_none());
}

#[test]
fn test_fallback_reply_keeps_previous_citations_selectable() {
    let model = ask_and_answer(create_test_model(), "fence");
    let model = update(model, Message::ToggleCitation(0));
    let model = ask_and_answer(model, "trash day?");
    assert_eq!(model.active_citation, Some(0));
    assert_eq!(model.selectable_citations().len(), 2);
    assert_eq!(model.selectable_citations()[0].document_id, 1);
}

#[test]
fn test_view_cited_document_opens_it() {
    let model = ask_and_answer(create_test_model(), "guest parking");
    let model = apply(
        model,
        [Message::NextCitation, Message::ViewCitedDocument],
    );
    assert_eq!(model.document_view, Some(5));
    assert_eq!(model.focus, Focus::Main);
}

#[test]
fn test_copy_citation_without_selection_shows_hint() {
    let model = update(create_test_model(), Message::CopyCitation);
    let (text, level) = model.active_toast().unwrap();
    assert_eq!(level, ToastLevel::Info);
    assert!(text.contains("Select a source"));
}

#[test]
fn test_feedback_shows_toast() {
    let model = update(create_test_model(), Message::Feedback(true));
    assert!(model.active_toast().is_some());
}

#[test]
fn test_search_filters_and_resets_cursor() {
    let model = apply(
        create_test_model(),
        [Message::StartSearch, Message::CursorDown],
    );
    assert_eq!(model.tab, Tab::Documents);
    assert_eq!(model.focus, Focus::Search);

    let model = update(model, Message::SearchInput("lifestyle".to_string()));
    assert_eq!(model.doc_cursor, 0);
    let ids: Vec<_> = model.visible_documents().iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![2, 3]);

    let model = update(model, Message::EndSearch);
    assert_eq!(model.focus, Focus::Main);
    assert_eq!(model.search_query, "lifestyle");

    let model = update(model, Message::ClearSearch);
    assert!(model.search_query.is_empty());
    assert_eq!(model.visible_documents().len(), 7);
}

#[test]
fn test_visible_documents_are_grouped_by_category() {
    let model = create_test_model();
    let ids: Vec<_> = model.visible_documents().iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 4, 5, 2, 3, 6, 7]);
}

#[test]
fn test_document_cursor_clamps_to_visible_list() {
    let model = apply(
        create_test_model(),
        [
            Message::SelectTab(Tab::Documents),
            Message::SearchInput("policies".to_string()),
        ],
    );
    let model = apply(model, std::iter::repeat_n(Message::CursorDown, 5));
    assert_eq!(model.doc_cursor, 1);
}

#[test]
fn test_rule_cursor_clamps() {
    let model = apply(create_test_model(), std::iter::repeat_n(Message::CursorDown, 9));
    assert_eq!(model.rule_cursor, COMMON_RULES.len() - 1);
    let model = apply(model, std::iter::repeat_n(Message::CursorUp, 9));
    assert_eq!(model.rule_cursor, 0);
}

#[test]
fn test_help_toggle_and_scroll() {
    let model = apply(
        create_test_model(),
        [Message::ToggleHelp, Message::HelpScrollDown, Message::HelpScrollDown],
    );
    assert!(model.help_visible);
    assert_eq!(model.help_scroll_offset, 2);
    let model = update(model, Message::HideHelp);
    assert!(!model.help_visible);
    assert_eq!(model.help_scroll_offset, 0);
}

#[test]
fn test_quit_sets_flag() {
    let model = update(create_test_model(), Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_initial_model_applies_app_options() {
    let app = App::new(Profile {
        community: "Maple Grove".to_string(),
        resident: "Sam".to_string(),
    })
    .with_tab(Tab::Documents)
    .with_chat_open(true);
    let model = app.initial_model();
    assert_eq!(model.tab, Tab::Documents);
    assert!(model.chat_open);
    assert!(model.chat.messages()[0].content.contains("Maple Grove"));
}

// Key mapping

#[test]
fn test_key_q_quits_from_main() {
    let model = create_test_model();
    assert_eq!(App::handle_key(key(KeyCode::Char('q')), &model), Some(Message::Quit));
}

#[test]
fn test_ctrl_c_quits_while_typing() {
    let model = update(create_test_model(), Message::OpenChat);
    assert_eq!(App::handle_key(ctrl('c'), &model), Some(Message::Quit));
}

#[test]
fn test_number_keys_select_tabs() {
    let model = create_test_model();
    assert_eq!(
        App::handle_key(key(KeyCode::Char('2')), &model),
        Some(Message::SelectTab(Tab::Documents))
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Char('4')), &model),
        Some(Message::SelectTab(Tab::Support))
    );
}

#[test]
fn test_chat_focus_captures_letters() {
    let model = update(create_test_model(), Message::OpenChat);
    assert_eq!(
        App::handle_key(key(KeyCode::Char('q')), &model),
        Some(Message::ChatInput("q".to_string()))
    );
}

#[test]
fn test_chat_enter_sends_input() {
    let mut model = update(create_test_model(), Message::OpenChat);
    model.chat_input = "pets?".to_string();
    assert_eq!(
        App::handle_key(key(KeyCode::Enter), &model),
        Some(Message::Send("pets?".to_string()))
    );
}

#[test]
fn test_chat_enter_sends_selected_suggestion() {
    let model = apply(
        create_test_model(),
        [Message::OpenChat, Message::SuggestionDown, Message::SuggestionDown],
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Enter), &model),
        Some(Message::Send(SUGGESTED_QUESTIONS[1].to_string()))
    );
}

#[test]
fn test_chat_enter_with_blank_input_and_no_suggestion_does_nothing() {
    let model = update(create_test_model(), Message::OpenChat);
    assert_eq!(App::handle_key(key(KeyCode::Enter), &model), None);
}

#[test]
fn test_chat_arrows_scroll_once_suggestions_are_gone() {
    let model = ask_and_answer(update(create_test_model(), Message::OpenChat), "hi");
    assert_eq!(
        App::handle_key(key(KeyCode::Up), &model),
        Some(Message::ChatScrollUp(1))
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Right), &model),
        Some(Message::NextCitation)
    );
}

#[test]
fn test_escape_in_chat_returns_focus() {
    let model = update(create_test_model(), Message::OpenChat);
    assert_eq!(
        App::handle_key(key(KeyCode::Esc), &model),
        Some(Message::FocusMain)
    );
}

#[test]
fn test_search_focus_edits_query() {
    let mut model = update(create_test_model(), Message::StartSearch);
    model.search_query = "pe".to_string();
    assert_eq!(
        App::handle_key(key(KeyCode::Char('t')), &model),
        Some(Message::SearchInput("pet".to_string()))
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Backspace), &model),
        Some(Message::SearchInput("p".to_string()))
    );
}

#[test]
fn test_enter_on_documents_opens_selected() {
    let model = apply(
        create_test_model(),
        [Message::SelectTab(Tab::Documents), Message::CursorDown],
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Enter), &model),
        Some(Message::OpenDocument(4))
    );
}

#[test]
fn test_enter_on_dashboard_asks_rule_question() {
    let model = update(create_test_model(), Message::CursorDown);
    assert_eq!(
        App::handle_key(key(KeyCode::Enter), &model),
        Some(Message::Send(COMMON_RULES[1].question.to_string()))
    );
}

#[test]
fn test_o_on_dashboard_opens_rule_document() {
    let model = apply(create_test_model(), [Message::CursorDown, Message::CursorDown]);
    assert_eq!(
        App::handle_key(key(KeyCode::Char('o')), &model),
        Some(Message::OpenDocument(COMMON_RULES[2].document_id))
    );
}

#[test]
fn test_viewer_keys() {
    let model = update(create_test_model(), Message::OpenDocument(1));
    assert_eq!(
        App::handle_key(key(KeyCode::Esc), &model),
        Some(Message::CloseDocument)
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Char('a')), &model),
        Some(Message::AskAboutDocument)
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Char('g')), &model),
        Some(Message::GoToTop)
    );
}

#[test]
fn test_any_key_closes_help() {
    let model = update(create_test_model(), Message::ToggleHelp);
    assert_eq!(
        App::handle_key(key(KeyCode::Char('x')), &model),
        Some(Message::HideHelp)
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Char('j')), &model),
        Some(Message::HelpScrollDown)
    );
}

#[test]
fn test_resize_event_requests_redraw() {
    let model = create_test_model();
    assert_eq!(
        App::handle_event(&Event::Resize(100, 40), &model),
        Some(Message::Redraw)
    );
}

// Reply timer

#[test]
fn test_reply_timer_waits_for_delay() {
    let mut timer = ReplyTimer::new(1000);
    timer.queue("fence?".to_string(), 100);
    assert!(timer.is_pending());
    assert_eq!(timer.take_ready(500), None);
    assert_eq!(timer.next_due_in(500), Some(600));
    assert_eq!(timer.take_ready(1100).as_deref(), Some("fence?"));
    assert!(!timer.is_pending());
}

#[test]
fn test_reply_timer_fires_in_queue_order() {
    let mut timer = ReplyTimer::new(1000);
    timer.queue("first".to_string(), 0);
    timer.queue("second".to_string(), 10);
    assert_eq!(timer.take_ready(5000).as_deref(), Some("first"));
    assert_eq!(timer.take_ready(5000).as_deref(), Some("second"));
    assert_eq!(timer.take_ready(5000), None);
}

#[test]
fn test_reply_timer_with_zero_delay_is_immediate() {
    let mut timer = ReplyTimer::new(0);
    timer.queue("now".to_string(), 42);
    assert_eq!(timer.next_due_in(42), Some(0));
    assert_eq!(timer.take_ready(42).as_deref(), Some("now"));
}
