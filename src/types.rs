//! The building blocks of a listing view.
//!
//! These types define how match spans, highlight segments, facet selections,
//! and page-window tokens fit together. Everything that crosses the render
//! boundary serializes as camelCase because the consumer is a JS view layer.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **MatchSpan**: `start < end`, offsets are **character** offsets into the
//!   original-case field text. Byte offsets would desync the highlighter from
//!   the render layer's string indexing.
//!
//! - **Merged span sets**: sorted ascending by `start`, pairwise disjoint,
//!   never touching. Enforced structurally by `MergedSpans` in `spans`.
//!
//! - **FacetSelection**: `All` imposes no constraint; a concrete value
//!   requires exact equality with the item's facet value.

use serde::{Deserialize, Serialize};

// =============================================================================
// MATCH SPANS
// =============================================================================

/// A half-open interval `[start, end)` into a field's text, in character
/// offsets. Produced by the matcher, consumed (after merging) by the
/// highlighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    /// Create a span covering `[start, end)`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        MatchSpan { start, end }
    }

    /// Number of characters covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// A span is degenerate when it covers nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True when `other` overlaps this span or touches its end. Touching
    /// spans merge so one visual highlight never splits in two.
    #[inline]
    pub fn absorbs(&self, other: &MatchSpan) -> bool {
        other.start <= self.end
    }
}

// =============================================================================
// HIGHLIGHT SEGMENTS
// =============================================================================

/// Whether a segment of field text is part of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SegmentKind {
    Plain,
    Highlighted,
}

/// One run of field text, tagged plain or highlighted. Concatenating the
/// segments of a field in order reproduces the original text exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    /// A plain (unmatched) run of text.
    pub fn plain(text: impl Into<String>) -> Self {
        Segment {
            kind: SegmentKind::Plain,
            text: text.into(),
        }
    }

    /// A highlighted (matched) run of text.
    pub fn highlighted(text: impl Into<String>) -> Self {
        Segment {
            kind: SegmentKind::Highlighted,
            text: text.into(),
        }
    }

    #[inline]
    pub fn is_highlighted(&self) -> bool {
        self.kind == SegmentKind::Highlighted
    }
}

// =============================================================================
// FACETS
// =============================================================================

/// What the user picked for one facet control. `All` is the unset sentinel
/// and imposes no constraint on the collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FacetSelection {
    #[default]
    All,
    Value(String),
}

impl FacetSelection {
    #[inline]
    pub fn is_all(&self) -> bool {
        matches!(self, FacetSelection::All)
    }

    /// The concrete value, if one is selected.
    #[inline]
    pub fn as_value(&self) -> Option<&str> {
        match self {
            FacetSelection::All => None,
            FacetSelection::Value(v) => Some(v.as_str()),
        }
    }
}

impl From<Option<String>> for FacetSelection {
    fn from(value: Option<String>) -> Self {
        match value {
            None => FacetSelection::All,
            Some(v) => FacetSelection::Value(v),
        }
    }
}

// =============================================================================
// PAGE WINDOW
// =============================================================================

/// One entry in the rendered pagination control: either a clickable page
/// number or an ellipsis standing in for a collapsed run of pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

// =============================================================================
// ITEM SEAM
// =============================================================================

/// The seam between the engine and the caller's item shape.
///
/// Each listing UI decides which fields are searchable and which are facets;
/// the engine stays data-shape-agnostic. Items are immutable for the life of
/// a listing instance.
pub trait ListItem {
    /// Searchable text fields as `(field name, text)` pairs, in the order
    /// the render layer displays them.
    fn search_fields(&self) -> Vec<(&str, &str)>;

    /// The item's value for a named facet, if it carries that facet.
    fn facet(&self, name: &str) -> Option<&str>;
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Per-listing configuration supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingConfig {
    /// Items per page. Fixed per listing (e.g. 9 for posts, 5 for jobs).
    pub page_size: usize,
    /// Facet names this listing filters on, in control-render order.
    pub facet_names: Vec<String>,
    /// Anchor element id to scroll to on page change, if any.
    pub scroll_anchor: Option<String>,
}

impl ListingConfig {
    /// Configuration with the given page size and no facets.
    pub fn new(page_size: usize) -> Self {
        ListingConfig {
            page_size,
            facet_names: Vec::new(),
            scroll_anchor: None,
        }
    }

    /// Set the facet names this listing filters on.
    pub fn with_facets<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facet_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the anchor element scrolled to on page change.
    pub fn with_scroll_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.scroll_anchor = Some(anchor.into());
        self
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        ListingConfig::new(9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_len_and_empty() {
        assert_eq!(MatchSpan::new(3, 7).len(), 4);
        assert!(!MatchSpan::new(3, 7).is_empty());
        assert!(MatchSpan::new(5, 5).is_empty());
    }

    #[test]
    fn span_absorbs_touching_and_overlapping() {
        let current = MatchSpan::new(0, 4);
        assert!(current.absorbs(&MatchSpan::new(3, 7)));
        assert!(current.absorbs(&MatchSpan::new(4, 7)));
        assert!(!current.absorbs(&MatchSpan::new(5, 7)));
    }

    #[test]
    fn selection_sentinel() {
        assert!(FacetSelection::All.is_all());
        assert_eq!(FacetSelection::All.as_value(), None);
        assert_eq!(
            FacetSelection::Value("News".into()).as_value(),
            Some("News")
        );
        assert_eq!(FacetSelection::from(None), FacetSelection::All);
    }

    #[test]
    fn config_defaults() {
        let config = ListingConfig::default();
        assert_eq!(config.page_size, 9);
        assert!(config.facet_names.is_empty());
        assert!(config.scroll_anchor.is_none());
    }

    #[test]
    fn segment_serializes_camel_case() {
        let json = serde_json::to_string(&Segment::highlighted("Water")).unwrap();
        assert_eq!(json, r#"{"kind":"highlighted","text":"Water"}"#);
    }
}
