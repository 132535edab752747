use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::assistant::{ChatLog, Citation};
use crate::config::{DEFAULT_COMMUNITY, DEFAULT_RESIDENT};
use crate::document::{self, Document, DocumentId};
use crate::ui::viewport::Viewport;

/// Top-level navigation tabs, in header order.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Documents,
    Payments,
    Support,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Documents, Self::Payments, Self::Support];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Documents => "documents",
            Self::Payments => "payments",
            Self::Support => "support",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Documents => "Documents",
            Self::Payments => "Payments",
            Self::Support => "Support",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.as_str() == s)
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Which control receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Main,
    Search,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Names shown in the header and greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub community: String,
    pub resident: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            community: DEFAULT_COMMUNITY.to_string(),
            resident: DEFAULT_RESIDENT.to_string(),
        }
    }
}

/// The complete application state.
///
/// All state lives here - no global or scattered state. The cells are
/// independent; the only cross-cell rule is that `document_view` only ever
/// holds an id present in the catalog.
#[derive(Debug)]
pub struct Model {
    pub profile: Profile,
    /// Active header tab
    pub tab: Tab,
    /// Control receiving typed keys
    pub focus: Focus,
    /// Document shown in the viewer, replacing the tab content
    pub document_view: Option<DocumentId>,
    /// Scroll state of the document viewer
    pub doc_viewport: Viewport,
    /// Documents tab filter text
    pub search_query: String,
    /// Selected row in the documents list (display order)
    pub doc_cursor: usize,
    /// Selected "commonly referenced rules" shortcut on the dashboard
    pub rule_cursor: usize,
    /// Session transcript
    pub chat: ChatLog,
    pub chat_open: bool,
    pub chat_input: String,
    /// Cleared by the first send; suggestions never come back
    pub show_suggestions: bool,
    pub suggestion_cursor: Option<usize>,
    /// Selected citation chip of the latest cited reply
    pub active_citation: Option<usize>,
    /// Questions sent whose reply has not arrived yet
    pub pending_replies: usize,
    /// Scroll state of the chat transcript
    pub chat_viewport: Viewport,
    pub help_visible: bool,
    pub help_scroll_offset: usize,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    toast: Option<Toast>,
    pub should_quit: bool,
}

impl Model {
    pub fn new(profile: Profile) -> Self {
        let chat = ChatLog::new(&profile.community);
        Self {
            profile,
            tab: Tab::Dashboard,
            focus: Focus::Main,
            document_view: None,
            doc_viewport: Viewport::default(),
            search_query: String::new(),
            doc_cursor: 0,
            rule_cursor: 0,
            chat,
            chat_open: false,
            chat_input: String::new(),
            show_suggestions: true,
            suggestion_cursor: None,
            active_citation: None,
            pending_replies: 0,
            chat_viewport: Viewport::tailing(20, 0),
            help_visible: false,
            help_scroll_offset: 0,
            config_global_path: None,
            config_local_path: None,
            toast: None,
            should_quit: false,
        }
    }

    /// Documents listed on the documents tab, in display order
    /// (filtered, then grouped by category).
    pub fn visible_documents(&self) -> Vec<&'static Document> {
        let filtered = crate::search::filter_documents(&self.search_query);
        document::group_by_category(&filtered)
            .into_iter()
            .flat_map(|(_, docs)| docs)
            .collect()
    }

    pub fn open_document(&self) -> Option<&'static Document> {
        self.document_view.and_then(document::find)
    }

    /// Suggested questions only accompany an untouched transcript.
    pub const fn suggestions_visible(&self) -> bool {
        self.show_suggestions && self.chat.len() == 1
    }

    /// Citations of the reply whose chips are selectable.
    pub fn selectable_citations(&self) -> &[Citation] {
        self.chat
            .latest_cited()
            .map(crate::assistant::ChatMessage::citations)
            .unwrap_or_default()
    }

    pub fn active_citation_ref(&self) -> Option<&Citation> {
        self.active_citation
            .and_then(|idx| self.selectable_citations().get(idx))
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }

    pub(super) fn clamp_doc_cursor(&mut self) {
        let len = self.visible_documents().len();
        self.doc_cursor = self.doc_cursor.min(len.saturating_sub(1));
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}
