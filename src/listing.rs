//! The listing engine: one state record, one transition function.
//!
//! Every listing UI (posts, sectors, services, projects, job openings) used
//! to re-implement this pipeline with its own scattering of mutable
//! variables. Here the query, the facet selections, and the page live in a
//! single `Listing` instance and change only through `Action`s, so "query
//! changed" and "facet changed" deterministically imply "reset to page 1"
//! instead of relying on effect ordering.
//!
//! ```text
//! ┌─────────┐    ┌──────────────┐    ┌───────────┐    ┌─────────────┐
//! │  query  │───▶│ Facet Filter │───▶│ Paginator │───▶│ Highlighter │
//! │ + facets│    │  (filter.rs) │    │ (pager.rs)│    │(highlight.rs)│
//! └─────────┘    └──────────────┘    └───────────┘    └─────────────┘
//!                                          │
//!                                          ▼
//!                                   ┌─────────────┐
//!                                   │ Scroll Sync │
//!                                   │ (scroll.rs) │
//!                                   └─────────────┘
//! ```
//!
//! Everything recomputes synchronously inside `dispatch`; the collection is
//! already resident in memory and is at most hundreds of items, so there is
//! no debouncing and no incremental index.

use crate::filter::{filter_indices, FacetState, FacetVocabulary};
use crate::highlight::highlight;
use crate::pager::{PageState, Pagination};
use crate::query::tokenize;
use crate::scroll::{AnchorScroller, NoScroll, ScrollSync};
use crate::types::{FacetSelection, ListItem, ListingConfig, PageToken, Segment};
use serde::Serialize;

// =============================================================================
// ACTIONS
// =============================================================================

/// A user-input event. Filter-input actions reset the page to 1; page
/// actions clamp into range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The search box content changed (every keystroke).
    QueryChanged(String),
    /// A facet control changed.
    FacetSelected {
        facet: String,
        selection: FacetSelection,
    },
    /// A page-number control was clicked.
    PageJumped(usize),
    NextPage,
    PrevPage,
}

// =============================================================================
// ENGINE
// =============================================================================

/// A live listing over an in-memory collection.
///
/// Owns the items, the consolidated UI state, and the derived filter/page
/// state. Created at component mount, discarded at unmount; nothing
/// persists across navigation.
pub struct Listing<T: ListItem> {
    items: Vec<T>,
    config: ListingConfig,
    vocabulary: FacetVocabulary,
    query: String,
    terms: Vec<String>,
    facets: FacetState,
    filtered: Vec<usize>,
    page: PageState,
    scroll: ScrollSync,
}

impl<T: ListItem> Listing<T> {
    /// Mount a listing over `items`. The first page-state evaluation happens
    /// here, which arms the scroll controller without scrolling.
    pub fn new(items: Vec<T>, config: ListingConfig) -> Self {
        let vocabulary = FacetVocabulary::from_items(&items, &config.facet_names);
        let anchor = config.scroll_anchor.clone().unwrap_or_default();
        let page = PageState::new(config.page_size);
        let mut listing = Listing {
            items,
            config,
            vocabulary,
            query: String::new(),
            terms: Vec::new(),
            facets: FacetState::new(),
            filtered: Vec::new(),
            page,
            scroll: ScrollSync::new(anchor),
        };
        listing.refresh();
        listing
            .scroll
            .observe(listing.page.page(), listing.page.total_pages(), &mut NoScroll);
        listing
    }

    /// Apply one action, then evaluate the scroll controller against the
    /// resulting page.
    pub fn dispatch<S: AnchorScroller>(&mut self, action: Action, scroller: &mut S) {
        match action {
            Action::QueryChanged(query) => {
                self.terms = tokenize(&query);
                self.query = query;
                self.refresh();
                self.page.reset();
            }
            Action::FacetSelected { facet, selection } => {
                self.facets.select(facet, selection);
                self.refresh();
                self.page.reset();
            }
            Action::PageJumped(page) => self.page.jump_to(page),
            Action::NextPage => self.page.next(),
            Action::PrevPage => self.page.prev(),
        }
        self.scroll
            .observe(self.page.page(), self.page.total_pages(), scroller);
    }

    /// `dispatch` for hosts without a scrollable surface.
    pub fn apply(&mut self, action: Action) {
        self.dispatch(action, &mut NoScroll);
    }

    /// Replace the collection (the data layer re-fetched). Re-derives the
    /// facet vocabulary, resets selections whose value disappeared, and goes
    /// back to page 1 without scrolling.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.vocabulary = FacetVocabulary::from_items(&self.items, &self.config.facet_names);
        self.facets.retain_valid(&self.vocabulary);
        self.refresh();
        self.page.reset();
        self.scroll
            .observe(self.page.page(), self.page.total_pages(), &mut NoScroll);
    }

    /// Override the derived vocabulary with a canonical one from the data
    /// layer. Selections invalid under the new vocabulary reset, and a reset
    /// counts as a filter-input change.
    pub fn set_vocabulary(&mut self, vocabulary: FacetVocabulary) {
        self.vocabulary = vocabulary;
        if self.facets.retain_valid(&self.vocabulary) {
            self.refresh();
            self.page.reset();
            self.scroll
                .observe(self.page.page(), self.page.total_pages(), &mut NoScroll);
        }
    }

    fn refresh(&mut self) {
        self.filtered = filter_indices(&self.items, &self.facets, &self.terms);
        self.page.set_total(self.filtered.len());
    }

    // -------------------------------------------------------------------------
    // State accessors
    // -------------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn facets(&self) -> &FacetState {
        &self.facets
    }

    pub fn vocabulary(&self) -> &FacetVocabulary {
        &self.vocabulary
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items surviving the current filter.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    // -------------------------------------------------------------------------
    // View
    // -------------------------------------------------------------------------

    /// Produce the render-layer view of the current state: the visible page
    /// with per-field highlight segments, the pagination summary, the page
    /// window, and the empty-state reason when nothing survived.
    pub fn view(&self) -> ListingView<'_, T> {
        let (start, end) = self.page.slice_bounds();
        let items = self.filtered[start..end]
            .iter()
            .map(|&index| {
                let item = &self.items[index];
                ItemView {
                    item,
                    fields: item
                        .search_fields()
                        .into_iter()
                        .map(|(name, text)| FieldView {
                            name: name.to_string(),
                            segments: highlight(text, &self.terms),
                        })
                        .collect(),
                }
            })
            .collect();

        let empty = if self.filtered.is_empty() {
            Some(NoResults {
                query: if self.terms.is_empty() {
                    None
                } else {
                    Some(self.query.trim().to_string())
                },
                active_facets: self
                    .facets
                    .active()
                    .map(|(facet, value)| ActiveFacet {
                        facet: facet.to_string(),
                        value: value.to_string(),
                    })
                    .collect(),
            })
        } else {
            None
        };

        ListingView {
            items,
            pagination: self.page.summary(),
            window: self.page.window(),
            empty,
        }
    }
}

// =============================================================================
// VIEW TYPES
// =============================================================================

/// What the render layer consumes: one settled snapshot per recomputation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(serialize = "T: Serialize"))]
pub struct ListingView<'a, T> {
    /// The visible page of items, post-filter, post-paginate.
    pub items: Vec<ItemView<'a, T>>,
    pub pagination: Pagination,
    /// The ellipsis-abbreviated page controls.
    pub window: Vec<PageToken>,
    /// Present exactly when the filtered collection is empty.
    pub empty: Option<NoResults>,
}

/// One visible item plus its per-field highlight segments.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(serialize = "T: Serialize"))]
pub struct ItemView<'a, T> {
    pub item: &'a T,
    pub fields: Vec<FieldView>,
}

/// One searchable field, cut into plain/highlighted segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub name: String,
    pub segments: Vec<Segment>,
}

impl FieldView {
    /// Whether any segment of this field is highlighted.
    pub fn has_match(&self) -> bool {
        self.segments.iter().any(Segment::is_highlighted)
    }
}

/// Why the listing is empty, for the empty-state message. Both an empty
/// collection and an over-constrained filter land here; the render layer
/// phrases them apart using the reason context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoResults {
    /// The active query text, if a text search contributed.
    pub query: Option<String>,
    /// The concrete facet selections in force.
    pub active_facets: Vec<ActiveFacet>,
}

/// One concrete facet constraint, named for the empty-state message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveFacet {
    pub facet: String,
    pub value: String,
}
