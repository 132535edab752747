//! Static document bodies shown in the document viewer.

use super::types::{Clause, DocumentId, Subsection};

/// Placeholder in [`PREAMBLE`] text replaced by the community name.
pub const COMMUNITY_PLACEHOLDER: &str = "{community}";

/// "I. Purpose and Scope" subsections shared by every document.
pub const PREAMBLE: &[Subsection] = &[
    Subsection {
        heading: "1.1 Applicability",
        clauses: &[Clause {
            label: "Applicability",
            text: "These guidelines apply to all homeowners, residents, and their guests within the {community} community. Compliance is mandatory per section 4.3 of the CC&Rs.",
        }],
    },
    Subsection {
        heading: "1.2 Enforcement",
        clauses: &[Clause {
            label: "Enforcement",
            text: "The HOA Board and management company are responsible for enforcing these guidelines. Violations may result in warnings, fines, or other actions as permitted by the CC&Rs.",
        }],
    },
];

const ARCHITECTURAL: &[Subsection] = &[
    Subsection {
        heading: "2.1 Fence Requirements",
        clauses: &[
            Clause {
                label: "Height Limitations",
                text: "Fence height is limited to 6 feet for backyard fences and 4 feet for side yard fences.",
            },
            Clause {
                label: "Approval Process",
                text: "All fence designs must be approved by the Architectural Committee before installation.",
            },
            Clause {
                label: "Materials",
                text: "Approved materials include wood, vinyl, and wrought iron. Chain link fences are not permitted.",
            },
        ],
    },
    Subsection {
        heading: "2.2 Exterior Paint Colors",
        clauses: &[
            Clause {
                label: "Approval Requirement",
                text: "Any changes to the exterior color of your home require prior approval from the Architectural Committee.",
            },
            Clause {
                label: "Color Palette",
                text: "The community has an approved color palette, which you can view on the Resident Portal.",
            },
            Clause {
                label: "Application Process",
                text: "Submit an Architectural Change Request form along with color samples for review.",
            },
        ],
    },
];

const PETS: &[Subsection] = &[
    Subsection {
        heading: "2.1 Pet Ownership",
        clauses: &[
            Clause {
                label: "Quantity Limits",
                text: "Residents may have up to 2 domestic pets (cats or dogs) per household.",
            },
            Clause {
                label: "Weight Restrictions",
                text: "There is a 35-pound weight limit for dogs in multi-family buildings.",
            },
            Clause {
                label: "Exotic Animals",
                text: "Exotic animals require special permission from the board.",
            },
        ],
    },
    Subsection {
        heading: "2.2 Pet Behavior and Control",
        clauses: &[
            Clause {
                label: "Leash Requirement",
                text: "Dogs must be leashed when in common areas, and owners must clean up after their pets.",
            },
            Clause {
                label: "Noise Control",
                text: "Excessive barking or pet noise that disturbs neighbors is prohibited.",
            },
            Clause {
                label: "Damage Liability",
                text: "Pet owners are responsible for any damage caused by their pets to common areas or others' property.",
            },
        ],
    },
];

const NOISE: &[Subsection] = &[
    Subsection {
        heading: "2.1 Quiet Hours",
        clauses: &[
            Clause {
                label: "Weekday Hours",
                text: "Quiet hours are from 10:00 PM to 7:00 AM on weekdays.",
            },
            Clause {
                label: "Weekend Hours",
                text: "Quiet hours are from 11:00 PM to 8:00 AM on weekends and holidays.",
            },
            Clause {
                label: "Prohibited Activities",
                text: "During these hours, residents should avoid loud music, power tools, and other noise that could disturb neighbors.",
            },
        ],
    },
    Subsection {
        heading: "2.2 Enforcement",
        clauses: &[
            Clause {
                label: "Reporting",
                text: "Noise disturbances can be reported to the HOA management company or security.",
            },
            Clause {
                label: "Warnings",
                text: "First-time violations typically receive a warning.",
            },
            Clause {
                label: "Fines",
                text: "Persistent noise violations may result in fines after a warning.",
            },
        ],
    },
];

const PARKING: &[Subsection] = &[
    Subsection {
        heading: "2.1 Resident Parking",
        clauses: &[
            Clause {
                label: "Allocation",
                text: "Each unit is allocated 2 resident parking spaces.",
            },
            Clause {
                label: "Registration",
                text: "All vehicles must be registered with the HOA office.",
            },
            Clause {
                label: "Street Parking",
                text: "Overnight parking on streets is prohibited between 2:00 AM and 6:00 AM.",
            },
        ],
    },
    Subsection {
        heading: "2.2 Visitor Parking",
        clauses: &[
            Clause {
                label: "Duration",
                text: "Guests may park in designated visitor spaces for up to 48 hours without a permit.",
            },
            Clause {
                label: "Extended Stays",
                text: "For longer stays, residents must request a temporary parking permit from the management office.",
            },
            Clause {
                label: "Enforcement",
                text: "Vehicles parked in violation may be towed at the owner's expense.",
            },
        ],
    },
];

/// "II. Specific Regulations" subsections for a document, empty when the
/// document has none on file.
pub fn specific_regulations(id: DocumentId) -> &'static [Subsection] {
    match id {
        1 => ARCHITECTURAL,
        2 => PETS,
        3 => NOISE,
        5 => PARKING,
        _ => &[],
    }
}
