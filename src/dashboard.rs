//! Static dashboard content.

use crate::document::DocumentId;

/// A dashboard summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub badge: Option<&'static str>,
    pub lines: &'static [&'static str],
    pub action: &'static str,
}

pub const CARDS: &[Card] = &[
    Card {
        title: "Next HOA Meeting",
        subtitle: "May 15th, 7:00 PM",
        badge: Some("Upcoming"),
        lines: &[
            "Location: Community Clubhouse",
            "Agenda: Budget Review, Summer Events, Pool Maintenance",
        ],
        action: "Add to Calendar",
    },
    Card {
        title: "HOA Fees Status",
        subtitle: "For April 2025",
        badge: Some("Paid"),
        lines: &["Last payment: April 2, 2025", "Next due: May 1, 2025"],
        action: "Payment History",
    },
    Card {
        title: "Recent Announcements",
        subtitle: "2 new updates",
        badge: None,
        lines: &[
            "Pool Closure for Maintenance \u{b7} Apr 25, 2025",
            "Summer BBQ Event \u{b7} Apr 18, 2025",
        ],
        action: "View All Updates",
    },
];

/// A "commonly referenced rules" shortcut that asks the assistant a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleShortcut {
    pub title: &'static str,
    pub summary: &'static str,
    pub question: &'static str,
    /// Catalog document that governs the rule
    pub document_id: DocumentId,
}

pub const COMMON_RULES: &[RuleShortcut] = &[
    RuleShortcut {
        title: "Fence Requirements",
        summary: "Height restrictions, materials, and approval process",
        question: "What are the rules about fence height?",
        document_id: 1,
    },
    RuleShortcut {
        title: "Pet Policies",
        summary: "Pet types, quantity limits, and common area rules",
        question: "Can I have a pet in my unit?",
        document_id: 2,
    },
    RuleShortcut {
        title: "Noise Restrictions",
        summary: "Quiet hours, noise limitations, and enforcement",
        question: "What are the quiet hours in our community?",
        document_id: 3,
    },
    RuleShortcut {
        title: "Parking Regulations",
        summary: "Visitor parking, permits, and street parking rules",
        question: "Where can guests park overnight?",
        document_id: 5,
    },
];

/// Banner line under the greeting.
pub const SUMMARY: &str = "You have 2 community announcements and 1 upcoming event.";

pub const PAYMENTS_BLURB: &str = "View and manage your HOA payments here.";
pub const SUPPORT_BLURB: &str = "Need help? Contact our support team or search our knowledge base.";
