//! Pagination: slicing the filtered collection and windowing page controls.
//!
//! Pages are 1-based. `total_pages` is at least 1 even for an empty result
//! set, so the controls always have a current page to render. Out-of-range
//! page requests clamp; nothing here returns an error.
//!
//! The page window is the compact control row: always page 1 and the last
//! page, every page within distance 1 of the current page, and one ellipsis
//! token per collapsed gap (at most one per side). A gap of exactly one page
//! renders that page number; an ellipsis standing for a single page would
//! take more room than the page itself.

use crate::types::PageToken;
use serde::{Deserialize, Serialize};

// =============================================================================
// PAGE STATE
// =============================================================================

/// Current page, fixed page size, and the filtered-item count they apply to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    page: usize,
    page_size: usize,
    total: usize,
}

impl PageState {
    /// Start on page 1 of an empty result set. A zero `page_size` is bumped
    /// to 1 so slice arithmetic stays defined.
    pub fn new(page_size: usize) -> Self {
        PageState {
            page: 1,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    #[inline]
    pub fn page(&self) -> usize {
        self.page
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// `ceil(total / page_size)`, never less than 1.
    pub fn total_pages(&self) -> usize {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.page_size)
        }
    }

    /// Record a new filtered-item count, clamping the current page into the
    /// new range. Used for direct page navigation; filter-input changes go
    /// through `reset` instead.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.page = self.page.min(self.total_pages());
    }

    /// Back to page 1. Every change to the filter inputs lands here.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Jump to a page, clamped into `[1, total_pages]`.
    pub fn jump_to(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    /// Advance one page, saturating at the last.
    pub fn next(&mut self) {
        self.jump_to(self.page.saturating_add(1));
    }

    /// Go back one page, saturating at the first.
    pub fn prev(&mut self) {
        self.jump_to(self.page.saturating_sub(1));
    }

    /// The visible slice `[(page-1)*size, page*size)` clamped to the total.
    pub fn slice_bounds(&self) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.page_size).min(self.total);
        let end = self.page.saturating_mul(self.page_size).min(self.total);
        (start, end)
    }

    /// The page-number control row with ellipsis markers.
    pub fn window(&self) -> Vec<PageToken> {
        let total_pages = self.total_pages();
        let current = self.page;
        let mut tokens = Vec::new();
        let mut previous = 0usize;

        for page in 1..=total_pages {
            let shown =
                page == 1 || page == total_pages || page.abs_diff(current) <= 1;
            if !shown {
                continue;
            }
            if previous != 0 && page > previous + 1 {
                if page == previous + 2 {
                    tokens.push(PageToken::Page(previous + 1));
                } else {
                    tokens.push(PageToken::Ellipsis);
                }
            }
            tokens.push(PageToken::Page(page));
            previous = page;
        }

        tokens
    }

    /// Snapshot for the render layer.
    pub fn summary(&self) -> Pagination {
        let (start, end) = self.slice_bounds();
        Pagination {
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            total_pages: self.total_pages(),
            has_next: self.page < self.total_pages(),
            has_prev: self.page > 1,
            start_item: if self.total == 0 { 0 } else { start + 1 },
            end_item: end,
        }
    }
}

// =============================================================================
// RENDER SUMMARY
// =============================================================================

/// Pagination facts for the render layer: the "Showing 1–9 of 42" line and
/// the prev/next button states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub page_size: usize,
    /// Total number of filtered items.
    pub total: usize,
    /// Total number of pages (at least 1).
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
    /// First visible item number (1-indexed, 0 when empty).
    pub start_item: usize,
    /// Last visible item number.
    pub end_item: usize,
}
