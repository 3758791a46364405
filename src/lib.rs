//! Faceted listing engine for in-memory collections.
//!
//! This crate provides the one piece of listing UI logic worth sharing: a
//! pipeline that takes an already-loaded collection (blog posts, sectors,
//! services, projects, job openings) and, in response to user input,
//! produces a filtered, searched, highlighted, and paginated view while
//! keeping scroll position synchronized with page changes.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  query.rs  │────▶│ matcher.rs  │────▶│   spans.rs   │
//! │ (tokenize) │     │(find_matches)│    │ (merge_spans)│
//! └────────────┘     └─────────────┘     └──────────────┘
//!        │                                      │
//!        ▼                                      ▼
//! ┌────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ filter.rs  │────▶│  pager.rs   │     │ highlight.rs │
//! │(FacetState)│     │ (PageState) │     │  (segments)  │
//! └────────────┘     └─────────────┘     └──────────────┘
//!        └──────────────────┴───────────────────┘
//!                           │
//!                           ▼
//!                    ┌─────────────┐     ┌──────────────┐
//!                    │ listing.rs  │────▶│  scroll.rs   │
//!                    │ (Listing<T>)│     │ (ScrollSync) │
//!                    └─────────────┘     └──────────────┘
//! ```
//!
//! Everything is synchronous and single-threaded: each dispatched action
//! re-runs filter → paginate → highlight over the whole collection, which
//! is fine at the hundreds-of-items scale this targets. There is no I/O,
//! no debouncing, and no index to build.
//!
//! # Usage
//!
//! ```
//! use vitrine::{Action, ListItem, Listing, ListingConfig};
//!
//! struct Post {
//!     title: String,
//!     category: String,
//! }
//!
//! impl ListItem for Post {
//!     fn search_fields(&self) -> Vec<(&str, &str)> {
//!         vec![("title", &self.title)]
//!     }
//!     fn facet(&self, name: &str) -> Option<&str> {
//!         (name == "category").then_some(self.category.as_str())
//!     }
//! }
//!
//! let posts = vec![
//!     Post { title: "Water Treatment Plant".into(), category: "Projects".into() },
//!     Post { title: "New Office".into(), category: "News".into() },
//! ];
//!
//! let mut listing = Listing::new(
//!     posts,
//!     ListingConfig::new(9).with_facets(["category"]),
//! );
//! listing.apply(Action::QueryChanged("water plant".into()));
//!
//! let view = listing.view();
//! assert_eq!(view.pagination.total, 1);
//! assert!(view.items[0].fields[0].segments[0].is_highlighted());
//! ```

// Module declarations
pub mod contracts;
mod filter;
mod highlight;
mod listing;
mod matcher;
mod pager;
mod query;
mod scroll;
mod spans;
pub mod testing;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use filter::{
    filter_indices, item_matches, matches_facets, matches_terms, FacetState, FacetVocabulary,
};
pub use highlight::{apply_spans, highlight};
pub use listing::{Action, ActiveFacet, FieldView, ItemView, Listing, ListingView, NoResults};
pub use matcher::{contains_any, find_matches};
pub use pager::{PageState, Pagination};
pub use query::tokenize;
pub use scroll::{AnchorScroller, NoScroll, ScrollSync};
pub use spans::{merge_spans, MergedSpans, SpanError};
pub use types::{
    FacetSelection, ListItem, ListingConfig, MatchSpan, PageToken, Segment, SegmentKind,
};

#[cfg(feature = "wasm")]
pub use wasm::{ListingHandle, WasmField, WasmItem};
