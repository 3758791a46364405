//! Span merging: raw match spans become a minimal disjoint set.
//!
//! The matcher reports one span per term occurrence, so overlapping terms
//! ("wat" and "water") and touching hits produce redundant or fragmented
//! spans. The merger sorts by start and folds the list: a span whose start
//! lies at or before the current span's end is absorbed, extending the end
//! to the larger of the two. Touching spans merge so a single visual
//! highlight never splits around a zero-width gap.
//!
//! `MergedSpans` is a validated wrapper: if you hold one, the set is sorted,
//! pairwise disjoint, never touching, and free of degenerate spans. Code
//! downstream of the merge relies on that structurally instead of
//! re-checking it.

use crate::types::MatchSpan;
use std::fmt;

/// Error type for span-set invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// A span covers nothing (`end <= start`).
    EmptySpan { position: usize },
    /// Spans are not sorted ascending by start.
    Unsorted { position: usize },
    /// A span overlaps or touches its predecessor.
    NotDisjoint { position: usize },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::EmptySpan { position } => {
                write!(f, "span at position {} is empty", position)
            }
            SpanError::Unsorted { position } => {
                write!(f, "span at position {} starts before its predecessor", position)
            }
            SpanError::NotDisjoint { position } => {
                write!(
                    f,
                    "span at position {} overlaps or touches its predecessor",
                    position
                )
            }
        }
    }
}

impl std::error::Error for SpanError {}

/// A sorted, disjoint, non-touching span set. Only the merger (or a
/// successful validation) produces one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergedSpans(Vec<MatchSpan>);

impl MergedSpans {
    /// Validate an arbitrary span list against the merged-set invariants.
    pub fn try_new(spans: Vec<MatchSpan>) -> Result<Self, SpanError> {
        for (position, span) in spans.iter().enumerate() {
            if span.is_empty() {
                return Err(SpanError::EmptySpan { position });
            }
            if position > 0 {
                let prev = &spans[position - 1];
                if span.start < prev.start {
                    return Err(SpanError::Unsorted { position });
                }
                if prev.absorbs(span) {
                    return Err(SpanError::NotDisjoint { position });
                }
            }
        }
        Ok(MergedSpans(spans))
    }

    #[inline]
    pub fn as_slice(&self) -> &[MatchSpan] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, MatchSpan> {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn into_inner(self) -> Vec<MatchSpan> {
        self.0
    }
}

impl TryFrom<Vec<MatchSpan>> for MergedSpans {
    type Error = SpanError;

    fn try_from(spans: Vec<MatchSpan>) -> Result<Self, Self::Error> {
        MergedSpans::try_new(spans)
    }
}

impl<'a> IntoIterator for &'a MergedSpans {
    type Item = &'a MatchSpan;
    type IntoIter = std::slice::Iter<'a, MatchSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Coalesce an unordered span set into the minimal disjoint covering set.
///
/// Sorts by start, then folds: `next.start <= current.end` extends
/// `current.end` to `max(current.end, next.end)`; anything else closes the
/// current span. Degenerate (empty) spans are discarded up front. Running
/// the merge on an already-merged set returns it unchanged.
pub fn merge_spans(mut spans: Vec<MatchSpan>) -> MergedSpans {
    spans.retain(|s| !s.is_empty());
    if spans.is_empty() {
        return MergedSpans::default();
    }

    spans.sort_by_key(|s| (s.start, s.end));

    let mut merged = Vec::with_capacity(spans.len());
    let mut current = spans[0];

    for span in spans.into_iter().skip(1) {
        if current.absorbs(&span) {
            current.end = current.end.max(span.end);
        } else {
            merged.push(current);
            current = span;
        }
    }
    merged.push(current);

    MergedSpans(merged)
}
