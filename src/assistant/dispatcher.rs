//! Canned-answer dispatcher.
//!
//! Maps free text to one of six pre-written answers. The input is lowercased
//! and checked against an ordered list of keyword rules; the first rule with
//! any keyword contained in the input wins. Inputs matching no rule get the
//! fallback answer with no citations.

use crate::document::DocumentId;

use super::message::{Citation, Reply};

struct CannedCitation {
    document_id: DocumentId,
    title: &'static str,
    page: u32,
    excerpt: &'static str,
}

struct Rule {
    name: &'static str,
    keywords: &'static [&'static str],
    content: &'static str,
    citations: &'static [CannedCitation],
}

// Order is the tie-break: "fence" outranks "pet" outranks "quiet"/"noise", etc.
const RULES: &[Rule] = &[
    Rule {
        name: "fence",
        keywords: &["fence"],
        content: "According to our Architectural Guidelines, fence height is limited to 6 feet for backyard fences and 4 feet for side yard fences. All fence designs must be approved by the Architectural Committee before installation, and materials are limited to wood, vinyl, or wrought iron. Chain link fences are not permitted.",
        citations: &[
            CannedCitation {
                document_id: 1,
                title: "Architectural Guidelines",
                page: 4,
                excerpt: "Fence height is limited to 6 feet for backyard fences and 4 feet for side yard fences.",
            },
            CannedCitation {
                document_id: 1,
                title: "Architectural Guidelines",
                page: 5,
                excerpt: "All fence designs must be approved by the Architectural Committee before installation.",
            },
        ],
    },
    Rule {
        name: "pet",
        keywords: &["pet"],
        content: "According to our Pet Policies, residents may have up to 2 domestic pets (cats or dogs) per household. Dogs must be leashed when in common areas, and owners must clean up after their pets. Exotic animals require special permission from the board. There is a 35-pound weight limit for dogs in multi-family buildings.",
        citations: &[
            CannedCitation {
                document_id: 2,
                title: "Pet Policies",
                page: 1,
                excerpt: "Residents may have up to 2 domestic pets (cats or dogs) per household.",
            },
            CannedCitation {
                document_id: 2,
                title: "Pet Policies",
                page: 2,
                excerpt: "Dogs must be leashed when in common areas, and owners must clean up after their pets.",
            },
        ],
    },
    Rule {
        name: "noise",
        keywords: &["quiet", "noise"],
        content: "According to our Noise Restrictions, quiet hours are from 10:00 PM to 7:00 AM on weekdays and 11:00 PM to 8:00 AM on weekends and holidays. During these hours, residents should avoid loud music, power tools, and other noise that could disturb neighbors. Persistent noise violations may result in fines after a warning.",
        citations: &[
            CannedCitation {
                document_id: 3,
                title: "Noise Restrictions",
                page: 1,
                excerpt: "Quiet hours are from 10:00 PM to 7:00 AM on weekdays and 11:00 PM to 8:00 AM on weekends and holidays.",
            },
            CannedCitation {
                document_id: 3,
                title: "Noise Restrictions",
                page: 2,
                excerpt: "Persistent noise violations may result in fines after a warning.",
            },
        ],
    },
    Rule {
        name: "paint",
        keywords: &["paint"],
        content: "Yes, according to our Architectural Guidelines, any changes to the exterior color of your home require prior approval from the Architectural Committee. You must submit an Architectural Change Request form along with color samples. The community has an approved color palette, which you can view on the Resident Portal or request from the HOA office.",
        citations: &[
            CannedCitation {
                document_id: 1,
                title: "Architectural Guidelines",
                page: 3,
                excerpt: "Any changes to the exterior color of your home require prior approval from the Architectural Committee.",
            },
            CannedCitation {
                document_id: 1,
                title: "Architectural Guidelines",
                page: 3,
                excerpt: "The community has an approved color palette, which you can view on the Resident Portal.",
            },
        ],
    },
    Rule {
        name: "parking",
        keywords: &["park", "guest"],
        content: "According to our Parking Regulations, guests may park in designated visitor spaces for up to 48 hours without a permit. For longer stays, residents must request a temporary parking permit from the management office. Overnight parking on streets is prohibited between 2:00 AM and 6:00 AM. Each unit is allocated 2 resident parking spaces.",
        citations: &[
            CannedCitation {
                document_id: 5,
                title: "Parking Regulations",
                page: 2,
                excerpt: "Guests may park in designated visitor spaces for up to 48 hours without a permit.",
            },
            CannedCitation {
                document_id: 5,
                title: "Parking Regulations",
                page: 3,
                excerpt: "Overnight parking on streets is prohibited between 2:00 AM and 6:00 AM.",
            },
        ],
    },
];

pub const FALLBACK_CONTENT: &str = "I don't have specific information about that in our covenant documents. You might want to browse the complete documents or contact the HOA office for more information.";

/// Answer `question` with a canned reply.
///
/// Never fails: unmatched input yields the fallback reply.
pub fn dispatch(question: &str) -> Reply {
    let lowered = question.to_lowercase();
    let Some(rule) = RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw)))
    else {
        tracing::debug!(rule = "fallback", "no keyword matched");
        return Reply {
            content: FALLBACK_CONTENT.to_string(),
            citations: Vec::new(),
        };
    };
    tracing::debug!(rule = rule.name, "keyword matched");
    Reply {
        content: rule.content.to_string(),
        citations: rule
            .citations
            .iter()
            .map(|c| Citation {
                document_id: c.document_id,
                title: c.title.to_string(),
                page: c.page,
                excerpt: c.excerpt.to_string(),
            })
            .collect(),
    }
}

/// Every citation any rule can produce.
pub fn all_canned_citations() -> impl Iterator<Item = (DocumentId, &'static str, u32)> {
    RULES
        .iter()
        .flat_map(|rule| rule.citations.iter())
        .map(|c| (c.document_id, c.title, c.page))
}
