//! Document search.
//!
//! Filters the covenant catalog by a free-text query:
//! - Case-insensitive substring match
//! - Matches either the title or the category name
//! - An empty query matches everything

use crate::document::{DOCUMENTS, Document};

/// Whether `doc` matches `query`.
pub fn matches(doc: &Document, query: &str) -> bool {
    let needle = query.to_lowercase();
    needle.is_empty()
        || doc.title.to_lowercase().contains(&needle)
        || doc.category.as_str().contains(&needle)
}

/// Catalog documents matching `query`, in catalog order.
pub fn filter_documents(query: &str) -> Vec<&'static Document> {
    DOCUMENTS.iter().filter(|doc| matches(doc, query)).collect()
}
