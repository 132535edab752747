//! Covenant document catalog.
//!
//! This module handles:
//! - The static document table (ids, titles, categories, page counts)
//! - Document bodies for the viewer
//! - Laying out bodies as wrapped, typed display lines

mod body;
mod layout;
mod types;

pub use body::specific_regulations;
pub use layout::{display_width, layout_body, wrap_text};
pub use types::{Category, Clause, Document, DocumentId, LineType, RenderedLine, Subsection};

/// Every covenant document, in catalog order.
pub const DOCUMENTS: &[Document] = &[
    Document {
        id: 1,
        title: "Architectural Guidelines",
        category: Category::Property,
        page_count: 12,
    },
    Document {
        id: 2,
        title: "Pet Policies",
        category: Category::Lifestyle,
        page_count: 5,
    },
    Document {
        id: 3,
        title: "Noise Restrictions",
        category: Category::Lifestyle,
        page_count: 3,
    },
    Document {
        id: 4,
        title: "Landscaping Requirements",
        category: Category::Property,
        page_count: 8,
    },
    Document {
        id: 5,
        title: "Parking Regulations",
        category: Category::Property,
        page_count: 6,
    },
    Document {
        id: 6,
        title: "Common Area Usage",
        category: Category::Amenities,
        page_count: 9,
    },
    Document {
        id: 7,
        title: "Rental Policies",
        category: Category::Administrative,
        page_count: 7,
    },
];

/// Date shown on every document card.
pub const LAST_UPDATED: &str = "Apr 12, 2025";

/// Look up a document by id.
pub fn find(id: DocumentId) -> Option<&'static Document> {
    DOCUMENTS.iter().find(|doc| doc.id == id)
}

/// Group documents by category, keeping categories in first-appearance order
/// and documents in input order within each group.
pub fn group_by_category<'a>(docs: &[&'a Document]) -> Vec<(Category, Vec<&'a Document>)> {
    let mut groups: Vec<(Category, Vec<&'a Document>)> = Vec::new();
    for &doc in docs {
        if let Some((_, members)) = groups.iter_mut().find(|(cat, _)| *cat == doc.category) {
            members.push(doc);
        } else {
            groups.push((doc.category, vec![doc]));
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique_and_ascending() {
        let ids: Vec<_> = DOCUMENTS.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_find_returns_matching_document() {
        let doc = find(5).unwrap();
        assert_eq!(doc.title, "Parking Regulations");
        assert_eq!(doc.category, Category::Property);
        assert_eq!(doc.page_count, 6);
    }

    #[test]
    fn test_find_unknown_id_is_none() {
        assert!(find(0).is_none());
        assert!(find(42).is_none());
    }

    #[test]
    fn test_group_by_category_preserves_first_appearance_order() {
        let all: Vec<_> = DOCUMENTS.iter().collect();
        let groups = group_by_category(&all);
        let cats: Vec<_> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            cats,
            vec![
                Category::Property,
                Category::Lifestyle,
                Category::Amenities,
                Category::Administrative
            ]
        );
        let property: Vec<_> = groups[0].1.iter().map(|d| d.id).collect();
        assert_eq!(property, vec![1, 4, 5]);
    }

    #[test]
    fn test_group_by_category_empty_input() {
        assert!(group_by_category(&[]).is_empty());
    }
}
