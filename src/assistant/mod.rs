//! Scripted covenant assistant.
//!
//! - [`dispatch`]: maps a question to a canned [`Reply`]
//! - [`ChatLog`]: append-only session transcript
//! - [`SUGGESTED_QUESTIONS`]: starter prompts offered in a fresh chat

mod dispatcher;
mod message;

pub use dispatcher::{FALLBACK_CONTENT, all_canned_citations, dispatch};
pub use message::{ChatLog, ChatMessage, Citation, Reply, Role, welcome_message};

/// Questions offered before the resident sends anything.
pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "What are the rules about fence height?",
    "Can I have a pet in my unit?",
    "What are the quiet hours in our community?",
    "Do I need approval to paint my house?",
    "Where can guests park overnight?",
];
