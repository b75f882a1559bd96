//! Category and free-text matching applied to candidates during a search.

use crate::poi::Poi;

/// Filter applied to every candidate POI during a query.
///
/// Unset fields match everything. Callers with sentinel conventions (the
/// CLI's `all` category, an empty text query) map them to unset fields
/// before the query reaches the index.
///
/// Matching is ASCII-case-insensitive; Unicode case folding is out of
/// scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoiFilter {
    category: Option<String>,
    text: Option<String>,
}

impl PoiFilter {
    /// A filter that matches every POI.
    pub fn any() -> Self {
        Self::default()
    }

    /// Restrict matches to one category (case-insensitive equality).
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict matches to POIs whose name or category contains the given
    /// text (case-insensitive substring).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// True if the POI passes both the category and the text check.
    pub fn matches(&self, poi: &Poi) -> bool {
        self.matches_category(poi) && self.matches_text(poi)
    }

    fn matches_category(&self, poi: &Poi) -> bool {
        match &self.category {
            None => true,
            Some(category) => poi.category.eq_ignore_ascii_case(category),
        }
    }

    fn matches_text(&self, poi: &Poi) -> bool {
        match self.text.as_deref() {
            None | Some("") => true,
            Some(text) => {
                contains_ignore_ascii_case(&poi.name, text)
                    || contains_ignore_ascii_case(&poi.category, text)
            }
        }
    }
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}
