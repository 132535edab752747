//! Core document types.

use std::fmt;

/// Identifier of a covenant document in the static catalog.
pub type DocumentId = u32;

/// Grouping used by the documents tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Property,
    Lifestyle,
    Amenities,
    Administrative,
}

impl Category {
    /// Lowercase name, as matched by the document search.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Lifestyle => "lifestyle",
            Self::Amenities => "amenities",
            Self::Administrative => "administrative",
        }
    }

    /// Section heading shown above the category's documents.
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Property => "Property Rules",
            Self::Lifestyle => "Lifestyle Rules",
            Self::Amenities => "Amenities Rules",
            Self::Administrative => "Administrative Rules",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A covenant document record.
///
/// Records are seeded at build time and never created or mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document {
    pub id: DocumentId,
    pub title: &'static str,
    pub category: Category,
    pub page_count: u32,
}

/// One labelled clause of a document section, e.g. "Height Limitations".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clause {
    pub label: &'static str,
    pub text: &'static str,
}

/// A numbered subsection ("2.1 Fence Requirements") and its clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subsection {
    pub heading: &'static str,
    pub clauses: &'static [Clause],
}

/// Semantic type of a rendered body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Document title (level 1), part heading (2) or subsection heading (3)
    Heading(u8),
    /// Plain paragraph text
    Paragraph,
    /// Labelled clause text; `label_len` is the char count of the bold label prefix
    Clause { label_len: usize },
    /// Blank spacer line
    Empty,
}

/// A single display line of a document body, already wrapped to width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    content: String,
    line_type: LineType,
}

impl RenderedLine {
    pub const fn new(content: String, line_type: LineType) -> Self {
        Self { content, line_type }
    }

    pub fn empty() -> Self {
        Self::new(String::new(), LineType::Empty)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub const fn line_type(&self) -> LineType {
        self.line_type
    }
}
