// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. assistant::ChatMessage)
    clippy::module_name_repetitions
)]

//! # Covenant Hub
//!
//! A terminal resident portal for a homeowners association.
//!
//! Covenant Hub shows residents:
//! - A dashboard with meeting, fee, and announcement cards
//! - A searchable catalog of covenant documents with a reader
//! - An assistant panel that answers rule questions with cited excerpts
//!
//! The assistant is scripted: a keyword table maps questions to canned
//! answers, delivered after a short simulated delay.
//!
//! ## Architecture
//!
//! Covenant Hub uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`assistant`]: Chat transcript and the canned-reply dispatcher
//! - [`document`]: Document catalog and body layout
//! - [`dashboard`]: Static dashboard content
//! - [`search`]: Document filtering
//! - [`config`]: Saved defaults
//! - [`ui`]: Terminal UI components

pub mod app;
pub mod assistant;
pub mod config;
pub mod dashboard;
pub mod document;
pub mod perf;
pub mod search;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model, Tab};
    pub use crate::assistant::{ChatLog, Citation, Reply, dispatch};
    pub use crate::document::Document;
    pub use crate::ui::viewport::Viewport;
}
