//! Runtime contracts for the listing pipeline.
//!
//! Debug-mode assertions for the invariants the engine's modules promise
//! each other. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. State each invariant once, next to nothing else
//!
//! | Contract                   | Invariant                                    |
//! |----------------------------|----------------------------------------------|
//! | `check_merged_spans`       | sorted, disjoint, non-touching, non-empty    |
//! | `check_round_trip`         | segment concatenation reproduces the text    |
//! | `check_page_in_range`      | `1 <= page <= total_pages`                   |

use crate::types::{MatchSpan, Segment};

// ============================================================================
// SPAN CONTRACTS
// ============================================================================

/// Check that a span list satisfies the merged-set invariants.
///
/// # Panics (debug builds only)
/// Panics on an empty span, an out-of-order span, or a span overlapping or
/// touching its predecessor.
#[inline]
pub fn check_merged_spans(spans: &[MatchSpan]) {
    for (i, span) in spans.iter().enumerate() {
        debug_assert!(
            span.start < span.end,
            "Contract violation: merged span [{}] is empty ({}..{})",
            i,
            span.start,
            span.end
        );
        if i > 0 {
            debug_assert!(
                spans[i - 1].end < span.start,
                "Contract violation: merged span [{}] ({}..{}) overlaps or touches [{}] ({}..{})",
                i,
                span.start,
                span.end,
                i - 1,
                spans[i - 1].start,
                spans[i - 1].end
            );
        }
    }
}

// ============================================================================
// SEGMENT CONTRACTS
// ============================================================================

/// Check the highlighter round-trip: segments concatenate back to the text.
///
/// # Panics (debug builds only)
/// Panics when the concatenation differs from the source text.
#[inline]
pub fn check_round_trip(text: &str, segments: &[Segment]) {
    #[cfg(debug_assertions)]
    {
        let rejoined: String = segments.iter().map(|s| s.text.as_str()).collect();
        debug_assert!(
            rejoined == text,
            "Contract violation: segments rejoin to {:?}, expected {:?}",
            rejoined,
            text
        );
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = (text, segments);
    }
}

// ============================================================================
// PAGE CONTRACTS
// ============================================================================

/// Check that a page index is within its range.
///
/// # Panics (debug builds only)
/// Panics when `page` is 0 or greater than `total_pages`.
#[inline]
pub fn check_page_in_range(page: usize, total_pages: usize) {
    debug_assert!(
        page >= 1,
        "Contract violation: page {} below 1 (pages are 1-based)",
        page
    );
    debug_assert!(
        page <= total_pages.max(1),
        "Contract violation: page {} > total_pages {}",
        page,
        total_pages
    );
}
