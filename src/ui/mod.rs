//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Scroll position and visible range management
//! - [`style`]: Theming and colors
//!
//! Rendering is split by screen region: the tab content and document viewer,
//! the assistant panel, the footer bars, and the help overlay.

pub mod style;
pub mod viewport;

mod chat;
mod overlays;
mod render;
mod status;

pub use chat::transcript_lines;
pub use render::{render, split_body_columns};

/// Left and right padding inside the document viewer.
pub const DOCUMENT_PADDING: u16 = 1;
pub const MAIN_WIDTH_PERCENT: u16 = 60;
pub const CHAT_WIDTH_PERCENT: u16 = 40;
