//! Scroll synchronization: follow page changes, never the first render.
//!
//! A listing scrolls its container back into view when the visible page
//! changes, but scrolling on initial load would yank the viewport away from
//! wherever the visitor landed. Instead of a mutable "is this the first
//! render" flag, the controller is an explicit one-shot state machine:
//! it starts **armed to skip**, consumes the skip on its first evaluation,
//! and fires on every page change after that.

use crate::contracts::check_page_in_range;

/// Performs the actual scroll. The engine never touches the document; the
/// render layer implements this against its DOM (smooth `scrollIntoView` on
/// the anchor element) and returns whether the anchor existed. A missing
/// anchor is non-fatal and the return value is ignored by the controller.
pub trait AnchorScroller {
    fn scroll_to(&mut self, anchor: &str) -> bool;
}

/// A scroller that does nothing. Used when arming the controller at mount,
/// and by hosts without a scrollable surface (tests, SSR).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScroll;

impl AnchorScroller for NoScroll {
    fn scroll_to(&mut self, _anchor: &str) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SyncState {
    /// Initial: the next evaluation transitions to `Active` without firing.
    ArmedSkip,
    /// Every page change fires a scroll.
    Active,
}

/// Skip-then-fire page-change follower for one listing instance.
#[derive(Debug, Clone)]
pub struct ScrollSync {
    anchor: String,
    state: SyncState,
    last_page: usize,
}

impl ScrollSync {
    /// A controller targeting the given anchor element id, armed to skip its
    /// first evaluation.
    pub fn new(anchor: impl Into<String>) -> Self {
        ScrollSync {
            anchor: anchor.into(),
            state: SyncState::ArmedSkip,
            last_page: 0,
        }
    }

    /// Evaluate the current page. The first call only arms the controller;
    /// after that, a changed page triggers exactly one scroll. Same-page
    /// evaluations (re-renders) never fire.
    pub fn observe<S: AnchorScroller>(&mut self, page: usize, total_pages: usize, scroller: &mut S) {
        check_page_in_range(page, total_pages);
        match self.state {
            SyncState::ArmedSkip => {
                self.state = SyncState::Active;
                self.last_page = page;
            }
            SyncState::Active => {
                if page != self.last_page {
                    self.last_page = page;
                    // An unconfigured (empty) anchor never fires; absent
                    // anchors are reported by the scroller and silently
                    // skipped here.
                    if !self.anchor.is_empty() {
                        let _ = scroller.scroll_to(&self.anchor);
                    }
                }
            }
        }
    }

    /// True until the first evaluation consumes the skip.
    pub fn is_armed(&self) -> bool {
        self.state == SyncState::ArmedSkip
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Spy scroller recording every request.
    #[derive(Default)]
    struct Spy {
        calls: Vec<String>,
        anchor_present: bool,
    }

    impl AnchorScroller for Spy {
        fn scroll_to(&mut self, anchor: &str) -> bool {
            self.calls.push(anchor.to_string());
            self.anchor_present
        }
    }

    #[test]
    fn first_evaluation_never_scrolls() {
        let mut sync = ScrollSync::new("listing-top");
        let mut spy = Spy::default();
        sync.observe(3, 5, &mut spy);
        assert!(spy.calls.is_empty());
        assert!(!sync.is_armed());
    }

    #[test]
    fn first_change_after_arming_scrolls_exactly_once() {
        let mut sync = ScrollSync::new("listing-top");
        let mut spy = Spy::default();
        sync.observe(1, 5, &mut spy);
        sync.observe(2, 5, &mut spy);
        assert_eq!(spy.calls, vec!["listing-top"]);
    }

    #[test]
    fn same_page_re_evaluation_does_not_scroll() {
        let mut sync = ScrollSync::new("listing-top");
        let mut spy = Spy::default();
        sync.observe(1, 5, &mut spy);
        sync.observe(1, 5, &mut spy);
        sync.observe(1, 5, &mut spy);
        assert!(spy.calls.is_empty());
    }

    #[test]
    fn each_subsequent_change_scrolls_again() {
        let mut sync = ScrollSync::new("top");
        let mut spy = Spy::default();
        sync.observe(1, 5, &mut spy);
        sync.observe(2, 5, &mut spy);
        sync.observe(3, 5, &mut spy);
        sync.observe(3, 5, &mut spy);
        sync.observe(1, 5, &mut spy);
        assert_eq!(spy.calls.len(), 3);
    }

    #[test]
    fn unconfigured_anchor_never_fires() {
        let mut sync = ScrollSync::new("");
        let mut spy = Spy::default();
        sync.observe(1, 3, &mut spy);
        sync.observe(2, 3, &mut spy);
        sync.observe(3, 3, &mut spy);
        assert!(spy.calls.is_empty());
    }

    #[test]
    fn missing_anchor_is_non_fatal() {
        let mut sync = ScrollSync::new("gone");
        let mut spy = Spy {
            anchor_present: false,
            ..Spy::default()
        };
        sync.observe(1, 2, &mut spy);
        sync.observe(2, 2, &mut spy);
        // The controller keeps functioning after a failed scroll.
        sync.observe(1, 2, &mut spy);
        assert_eq!(spy.calls.len(), 2);
    }
}
