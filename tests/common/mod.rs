//! Shared test utilities and fixtures.

#![allow(dead_code)]

use vitrine::{AnchorScroller, Listing, ListingConfig};

// Re-export canonical test utilities from vitrine::testing
pub use vitrine::testing::{make_job, make_post, make_post_full, make_posts, SampleItem};

// ============================================================================
// FIXTURE COLLECTIONS
// ============================================================================

/// A small, realistic project-listing corpus. Five of the twenty titles
/// contain "alpha", which the reset-on-change scenarios rely on.
pub fn project_corpus() -> Vec<SampleItem> {
    (0..20)
        .map(|id| {
            let title = if id % 4 == 0 {
                format!("Alpha Upgrade Phase {}", id)
            } else {
                format!("Riverside Works {}", id)
            };
            let category = if id % 2 == 0 { "Infrastructure" } else { "Buildings" };
            make_post(id, &title, category)
        })
        .collect()
}

/// Job openings across two departments and two locations.
pub fn job_corpus() -> Vec<SampleItem> {
    vec![
        make_job(0, "Site Engineer", "Engineering", "Lyon"),
        make_job(1, "Project Manager", "Engineering", "Paris"),
        make_job(2, "Visual Designer", "Design", "Paris"),
        make_job(3, "Hydraulics Engineer", "Engineering", "Lyon"),
        make_job(4, "Content Designer", "Design", "Remote"),
    ]
}

/// A mounted post listing with the standard page size and category facet.
pub fn mounted_posts(count: usize) -> Listing<SampleItem> {
    Listing::new(
        make_posts(count, &["News", "Projects"]),
        ListingConfig::new(9).with_facets(["category"]),
    )
}

// ============================================================================
// SCROLL SPY
// ============================================================================

/// Records every scroll request the engine issues.
#[derive(Debug, Default)]
pub struct ScrollSpy {
    pub calls: Vec<String>,
    pub anchor_present: bool,
}

impl ScrollSpy {
    pub fn with_anchor() -> Self {
        ScrollSpy {
            calls: Vec::new(),
            anchor_present: true,
        }
    }
}

impl AnchorScroller for ScrollSpy {
    fn scroll_to(&mut self, anchor: &str) -> bool {
        self.calls.push(anchor.to_string());
        self.anchor_present
    }
}
