//! Facet filtering: categorical predicates plus the text-match predicate.
//!
//! An item survives when every concrete (non-`All`) facet selection equals
//! the item's value for that facet, AND the query is inactive or at least
//! one searchable field contains at least one term. Filtering is a pure,
//! order-preserving single pass; nothing is re-ranked by relevance.
//!
//! A selection whose value no longer exists in the collection (the CMS
//! republished, a category vanished) is not an error: the equality predicate
//! simply never holds, and the listing shows the no-results state until the
//! selection is reset against the new vocabulary.

use crate::matcher::contains_any;
use crate::types::{FacetSelection, ListItem};
use serde::Serialize;
use std::collections::BTreeMap;

// =============================================================================
// FACET STATE
// =============================================================================

static ALL: FacetSelection = FacetSelection::All;

/// The user's current facet selections, one per facet name. Unlisted facets
/// are implicitly `All`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetState {
    selections: BTreeMap<String, FacetSelection>,
}

impl FacetState {
    pub fn new() -> Self {
        FacetState::default()
    }

    /// Set the selection for a facet. Selecting `All` clears the constraint.
    pub fn select(&mut self, facet: impl Into<String>, selection: FacetSelection) {
        let facet = facet.into();
        if selection.is_all() {
            self.selections.remove(&facet);
        } else {
            self.selections.insert(facet, selection);
        }
    }

    /// Convenience for selecting a concrete value.
    pub fn select_value(&mut self, facet: impl Into<String>, value: impl Into<String>) {
        self.select(facet, FacetSelection::Value(value.into()));
    }

    /// Reset a facet back to `All`.
    pub fn clear(&mut self, facet: &str) {
        self.selections.remove(facet);
    }

    /// Reset every facet back to `All`.
    pub fn clear_all(&mut self) {
        self.selections.clear();
    }

    /// The current selection for a facet (`All` when never set).
    pub fn selection(&self, facet: &str) -> &FacetSelection {
        self.selections.get(facet).unwrap_or(&ALL)
    }

    /// The concrete `(facet, value)` constraints currently in force, in
    /// facet-name order.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selections
            .iter()
            .filter_map(|(facet, selection)| Some((facet.as_str(), selection.as_value()?)))
    }

    /// True when no concrete selection is in force.
    pub fn is_neutral(&self) -> bool {
        self.selections.is_empty()
    }

    /// Drop selections whose value is absent from `vocabulary`. Returns true
    /// when anything was reset. Called when the collection (and therefore the
    /// vocabulary) changes under a live listing.
    pub fn retain_valid(&mut self, vocabulary: &FacetVocabulary) -> bool {
        let before = self.selections.len();
        self.selections.retain(|facet, selection| {
            selection
                .as_value()
                .is_some_and(|value| vocabulary.contains(facet, value))
        });
        self.selections.len() != before
    }
}

// =============================================================================
// FACET VOCABULARY
// =============================================================================

/// The valid values for each facet, with per-value occurrence counts for
/// rendering filter controls ("Engineering (4)").
///
/// Usually derived from the collection itself; a data layer with its own
/// canonical vocabulary can supply one instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FacetVocabulary {
    facets: BTreeMap<String, BTreeMap<String, usize>>,
}

impl FacetVocabulary {
    pub fn new() -> Self {
        FacetVocabulary::default()
    }

    /// Record one occurrence of `value` under `facet`.
    pub fn add(&mut self, facet: impl Into<String>, value: impl Into<String>) {
        *self
            .facets
            .entry(facet.into())
            .or_default()
            .entry(value.into())
            .or_insert(0) += 1;
    }

    /// Derive the vocabulary for the named facets from a collection.
    pub fn from_items<T: ListItem>(items: &[T], facet_names: &[String]) -> Self {
        let mut vocabulary = FacetVocabulary::new();
        for name in facet_names {
            // Ensure the facet is present even when no item carries it, so
            // the render layer still draws the (empty) control.
            vocabulary.facets.entry(name.clone()).or_default();
            for item in items {
                if let Some(value) = item.facet(name) {
                    vocabulary.add(name.clone(), value);
                }
            }
        }
        vocabulary
    }

    /// Whether `value` is a known value of `facet`.
    pub fn contains(&self, facet: &str, value: &str) -> bool {
        self.facets
            .get(facet)
            .is_some_and(|values| values.contains_key(value))
    }

    /// The known values of a facet, sorted.
    pub fn values<'a>(&'a self, facet: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.facets
            .get(facet)
            .into_iter()
            .flat_map(|values| values.keys().map(String::as_str))
    }

    /// The known values of a facet with their occurrence counts, sorted by
    /// value.
    pub fn counts<'a>(&'a self, facet: &str) -> impl Iterator<Item = (&'a str, usize)> + 'a {
        self.facets
            .get(facet)
            .into_iter()
            .flat_map(|values| values.iter().map(|(v, n)| (v.as_str(), *n)))
    }

    /// The facet names carried by this vocabulary, sorted.
    pub fn facet_names(&self) -> impl Iterator<Item = &str> {
        self.facets.keys().map(String::as_str)
    }
}

// =============================================================================
// PREDICATES
// =============================================================================

/// Every concrete facet selection equals the item's value for that facet.
pub fn matches_facets<T: ListItem>(item: &T, facets: &FacetState) -> bool {
    facets
        .active()
        .all(|(name, value)| item.facet(name) == Some(value))
}

/// The query is inactive, or some searchable field contains some term.
pub fn matches_terms<T: ListItem>(item: &T, terms: &[String]) -> bool {
    terms.is_empty()
        || item
            .search_fields()
            .iter()
            .any(|(_, text)| contains_any(text, terms))
}

/// The full listing predicate: facets AND text.
pub fn item_matches<T: ListItem>(item: &T, facets: &FacetState, terms: &[String]) -> bool {
    matches_facets(item, facets) && matches_terms(item, terms)
}

/// Indices of the items that survive filtering, in collection order.
pub fn filter_indices<T: ListItem>(
    items: &[T],
    facets: &FacetState,
    terms: &[String],
) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item_matches(*item, facets, terms))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{make_job, make_post};

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn neutral_state_admits_everything() {
        let posts = vec![
            make_post(0, "Alpha", "News"),
            make_post(1, "Beta", "Projects"),
        ];
        let indices = filter_indices(&posts, &FacetState::new(), &[]);
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn concrete_selection_requires_equality() {
        let posts = vec![
            make_post(0, "Alpha", "News"),
            make_post(1, "Beta", "Projects"),
            make_post(2, "Gamma", "News"),
        ];
        let mut facets = FacetState::new();
        facets.select_value("category", "News");
        assert_eq!(filter_indices(&posts, &facets, &[]), vec![0, 2]);
    }

    #[test]
    fn facet_equality_is_exact() {
        let posts = vec![make_post(0, "Alpha", "News")];
        let mut facets = FacetState::new();
        facets.select_value("category", "news");
        assert!(filter_indices(&posts, &facets, &[]).is_empty());
    }

    #[test]
    fn stale_selection_is_no_match_not_a_crash() {
        let posts = vec![make_post(0, "Alpha", "News")];
        let mut facets = FacetState::new();
        facets.select_value("category", "Withdrawn Category");
        assert!(filter_indices(&posts, &facets, &[]).is_empty());
    }

    #[test]
    fn text_predicate_is_any_field_any_term() {
        let posts = vec![
            make_post(0, "Water Treatment", "News"),
            make_post(1, "Roads", "News"),
        ];
        let indices = filter_indices(&posts, &FacetState::new(), &terms(&["water", "zzz"]));
        assert_eq!(indices, vec![0]);
    }

    #[test]
    fn facet_and_text_conjunction() {
        let posts = vec![
            make_post(0, "Water Treatment", "News"),
            make_post(1, "Water Reuse", "Projects"),
        ];
        let mut facets = FacetState::new();
        facets.select_value("category", "Projects");
        let indices = filter_indices(&posts, &facets, &terms(&["water"]));
        assert_eq!(indices, vec![1]);
    }

    #[test]
    fn order_is_preserved() {
        let posts = vec![
            make_post(0, "water b", "News"),
            make_post(1, "other", "News"),
            make_post(2, "water a", "News"),
        ];
        let indices = filter_indices(&posts, &FacetState::new(), &terms(&["water"]));
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn selecting_all_clears_the_constraint() {
        let mut facets = FacetState::new();
        facets.select_value("category", "News");
        assert!(!facets.is_neutral());
        facets.select("category", FacetSelection::All);
        assert!(facets.is_neutral());
    }

    #[test]
    fn vocabulary_counts_and_membership() {
        let jobs = vec![
            make_job(0, "Engineer", "Engineering", "Lyon"),
            make_job(1, "Designer", "Design", "Paris"),
            make_job(2, "Senior Engineer", "Engineering", "Paris"),
        ];
        let names = vec!["department".to_string(), "location".to_string()];
        let vocabulary = FacetVocabulary::from_items(&jobs, &names);

        assert!(vocabulary.contains("department", "Engineering"));
        assert!(!vocabulary.contains("department", "Sales"));
        let counts: Vec<_> = vocabulary.counts("department").collect();
        assert_eq!(counts, vec![("Design", 1), ("Engineering", 2)]);
    }

    #[test]
    fn retain_valid_resets_stale_selections() {
        let jobs = vec![make_job(0, "Engineer", "Engineering", "Lyon")];
        let names = vec!["department".to_string()];
        let vocabulary = FacetVocabulary::from_items(&jobs, &names);

        let mut facets = FacetState::new();
        facets.select_value("department", "Design");
        assert!(facets.retain_valid(&vocabulary));
        assert!(facets.selection("department").is_all());

        facets.select_value("department", "Engineering");
        assert!(!facets.retain_valid(&vocabulary));
        assert_eq!(
            facets.selection("department").as_value(),
            Some("Engineering")
        );
    }
}
