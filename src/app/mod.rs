//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Focus, Model, Profile, Tab, ToastLevel};
pub use update::{Message, is_sendable, update};

use std::path::PathBuf;

use crate::config::DEFAULT_REPLY_DELAY_MS;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    profile: Profile,
    initial_tab: Tab,
    chat_open: bool,
    reply_delay_ms: u64,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            initial_tab: Tab::Dashboard,
            chat_open: false,
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Set the tab shown at startup.
    pub const fn with_tab(mut self, tab: Tab) -> Self {
        self.initial_tab = tab;
        self
    }

    /// Start with the chat panel open.
    pub const fn with_chat_open(mut self, open: bool) -> Self {
        self.chat_open = open;
        self
    }

    /// Simulated assistant latency.
    pub const fn with_reply_delay_ms(mut self, delay_ms: u64) -> Self {
        self.reply_delay_ms = delay_ms;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }

    /// Build the startup model from the configured options.
    pub fn initial_model(&self) -> Model {
        let mut model = Model::new(self.profile.clone());
        model.tab = self.initial_tab;
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);
        if self.chat_open {
            model = update(model, Message::OpenChat);
        }
        model
    }
}

#[cfg(test)]
mod tests;
