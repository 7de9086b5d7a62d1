//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Occurrence;
use crate::keywords::AliasTable;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub keywords: Vec<KeywordView>,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Voyage list fragment (search results).
#[derive(Template)]
#[template(path = "voyage_list.html")]
pub struct VoyageListTemplate {
    pub voyages: Vec<VoyageView>,
    pub window_start: String,
    pub window_end: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Keyword view model for templates.
#[derive(Debug, Clone)]
pub struct KeywordView {
    pub name: String,
    pub routes: String,
}

impl KeywordView {
    /// One view per alias, sorted by name.
    pub fn from_table(table: &AliasTable) -> Vec<Self> {
        table
            .entries()
            .into_iter()
            .map(|(name, routes)| Self {
                name: name.to_string(),
                routes: routes.iter().cloned().collect::<Vec<_>>().join(", "),
            })
            .collect()
    }
}

/// Voyage view model for templates.
#[derive(Debug, Clone)]
pub struct VoyageView {
    pub identifier: String,
    pub display_time: String,
}

impl From<&Occurrence> for VoyageView {
    fn from(o: &Occurrence) -> Self {
        Self {
            identifier: o.identifier.clone(),
            display_time: o.display_time.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voyage_list_renders_rows() {
        let template = VoyageListTemplate {
            voyages: vec![VoyageView {
                identifier: "sunsetMerlthor".to_string(),
                display_time: "12/08/20, 08:00 PM UTC".to_string(),
            }],
            window_start: "a".to_string(),
            window_end: "b".to_string(),
        };
        let html = template.render().unwrap();
        assert!(html.contains("sunsetMerlthor"));
        assert!(html.contains("08:00 PM UTC"));
    }

    #[test]
    fn empty_voyage_list_says_so() {
        let template = VoyageListTemplate {
            voyages: Vec::new(),
            window_start: "a".to_string(),
            window_end: "b".to_string(),
        };
        let html = template.render().unwrap();
        assert!(html.contains("No matching voyages"));
    }

    #[test]
    fn keyword_views_sorted() {
        let mut table = AliasTable::new();
        table.insert("night", ["nightRhotano", "nightBloodbrine"]);
        table.insert("Rhotano", ["dayRhotano"]);

        let views = KeywordView::from_table(&table);
        assert_eq!(views[0].name, "Rhotano");
        assert_eq!(views[1].routes, "nightBloodbrine, nightRhotano");
    }

    #[test]
    fn index_lists_keywords() {
        let template = IndexTemplate {
            keywords: vec![KeywordView {
                name: "Merlthor".to_string(),
                routes: "dayMerlthor".to_string(),
            }],
        };
        let html = template.render().unwrap();
        assert!(html.contains("Merlthor"));
    }
}
