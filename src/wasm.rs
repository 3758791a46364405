//! WebAssembly bindings for the listing engine.
//!
//! The browser listing UIs hold their collection as plain JS objects; this
//! module deserializes them once at mount, drives the engine through action
//! methods, and hands back the full view as a JS object per recomputation.
//!
//! Scrolling crosses the boundary as data, not as a DOM call: after any
//! action the host polls `takeScrollRequest()` and, when it returns an
//! anchor id, performs the smooth `scrollIntoView` itself. A missing anchor
//! element is the host's non-event, exactly as on the native side.

use crate::listing::{Action, Listing};
use crate::scroll::AnchorScroller;
use crate::types::{FacetSelection, ListItem, ListingConfig};
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

/// A listing item as supplied from JS.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasmItem {
    pub id: String,
    /// Searchable fields in display order.
    pub fields: Vec<WasmField>,
    /// Facet values keyed by facet name.
    #[serde(default)]
    pub facets: BTreeMap<String, String>,
}

/// One searchable field of a `WasmItem`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasmField {
    pub name: String,
    pub text: String,
}

impl ListItem for WasmItem {
    fn search_fields(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .map(|field| (field.name.as_str(), field.text.as_str()))
            .collect()
    }

    fn facet(&self, name: &str) -> Option<&str> {
        self.facets.get(name).map(String::as_str)
    }
}

/// Captures scroll requests for the host page to perform.
#[derive(Debug, Default)]
struct PendingScroll {
    request: Option<String>,
}

impl AnchorScroller for PendingScroll {
    fn scroll_to(&mut self, anchor: &str) -> bool {
        self.request = Some(anchor.to_string());
        true
    }
}

/// WASM-accessible listing engine handle.
#[wasm_bindgen]
pub struct ListingHandle {
    inner: Listing<WasmItem>,
    pending: PendingScroll,
}

#[wasm_bindgen]
impl ListingHandle {
    /// Mount a listing over `items` (array of `WasmItem`-shaped objects)
    /// with a `ListingConfig`-shaped `config` object.
    #[wasm_bindgen(constructor)]
    pub fn new(items: JsValue, config: JsValue) -> Result<ListingHandle, JsValue> {
        let items: Vec<WasmItem> = from_value(items).map_err(JsValue::from)?;
        let config: ListingConfig = from_value(config).map_err(JsValue::from)?;
        Ok(ListingHandle {
            inner: Listing::new(items, config),
            pending: PendingScroll::default(),
        })
    }

    /// The search box changed.
    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, query: String) {
        self.inner
            .dispatch(Action::QueryChanged(query), &mut self.pending);
    }

    /// A facet control changed; `null` selects "all".
    #[wasm_bindgen(js_name = setFacet)]
    pub fn set_facet(&mut self, facet: String, value: Option<String>) {
        self.inner.dispatch(
            Action::FacetSelected {
                facet,
                selection: FacetSelection::from(value),
            },
            &mut self.pending,
        );
    }

    /// Jump to a page (clamped).
    #[wasm_bindgen(js_name = setPage)]
    pub fn set_page(&mut self, page: usize) {
        self.inner.dispatch(Action::PageJumped(page), &mut self.pending);
    }

    #[wasm_bindgen(js_name = nextPage)]
    pub fn next_page(&mut self) {
        self.inner.dispatch(Action::NextPage, &mut self.pending);
    }

    #[wasm_bindgen(js_name = prevPage)]
    pub fn prev_page(&mut self) {
        self.inner.dispatch(Action::PrevPage, &mut self.pending);
    }

    /// Replace the collection after a re-fetch.
    #[wasm_bindgen(js_name = setItems)]
    pub fn set_items(&mut self, items: JsValue) -> Result<(), JsValue> {
        let items: Vec<WasmItem> = from_value(items).map_err(JsValue::from)?;
        self.inner.set_items(items);
        Ok(())
    }

    /// The current view: visible items with highlight segments, pagination
    /// summary, page window, and the empty-state reason when applicable.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_value(&self.inner.view()).map_err(JsValue::from)
    }

    /// The facet vocabulary with occurrence counts, for rendering controls.
    pub fn vocabulary(&self) -> Result<JsValue, JsValue> {
        to_value(self.inner.vocabulary()).map_err(JsValue::from)
    }

    /// The anchor to scroll to, if the last action changed the page.
    /// Consuming: returns `null` until the next page change.
    #[wasm_bindgen(js_name = takeScrollRequest)]
    pub fn take_scroll_request(&mut self) -> Option<String> {
        self.pending.request.take()
    }
}
