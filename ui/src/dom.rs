//! Patches a Groove Library page that was rendered by someone else.

use dioxus::logger::tracing::{debug, warn};
use groove::{ItemText, KeyValueStore, Overlay};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

/// A rendered library item.
pub struct DomItem<'a>(pub &'a Element);

impl ItemText for DomItem<'_> {
    fn select_text(&self, selector: &str) -> Option<String> {
        self.0
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.text_content())
    }
}

/// Sets an inline `display` so page stylesheets cannot override it.
fn set_display(element: &Element, display: &str) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    element.set_hidden(display == "none");
    if let Err(e) = element.style().set_property("display", display) {
        warn!("Failed to update item visibility: {:?}", e);
    }
}

fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(e) => {
            warn!("Bad selector {}: {:?}", selector, e);
            return vec![];
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Render pass: hides every item whose key is in the deleted set. Returns how
/// many items were hidden.
pub fn hide_deleted<S: KeyValueStore>(document: &Document, overlay: &Overlay<S>) -> usize {
    let items = select_all(document, &overlay.config().item_selector);
    let mut hidden = 0;
    for item in &items {
        if overlay.is_deleted(&DomItem(item)) {
            set_display(item, "none");
            hidden += 1;
        }
    }
    debug!("Hid {} of {} library items", hidden, items.len());
    hidden
}

/// Shows delete controls to staff and hides them from everyone else.
pub fn sync_delete_controls<S: KeyValueStore>(document: &Document, overlay: &Overlay<S>) {
    let config = overlay.config();
    let display = if overlay.is_staff() {
        config.control_display.as_str()
    } else {
        "none"
    };
    for control in select_all(document, &config.delete_control_selector) {
        set_display(&control, display);
    }
}

/// Click delegate: deletes and hides the item around a clicked delete
/// control. Returns whether an item was deleted.
pub fn handle_delete_click<S: KeyValueStore>(event: &Event, overlay: &mut Overlay<S>) -> bool {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return false;
    };
    let control_selector = overlay.config().delete_control_selector.clone();
    if !matches!(target.closest(&control_selector), Ok(Some(_))) {
        return false;
    }
    event.prevent_default();

    let item_selector = overlay.config().item_selector.clone();
    let Ok(Some(item)) = target.closest(&item_selector) else {
        warn!("Delete control outside of a library item");
        return false;
    };

    match overlay.delete(&DomItem(&item)) {
        Ok(_) => {
            set_display(&item, "none");
            true
        }
        Err(e) => {
            warn!("Failed to delete library item: {}", e);
            false
        }
    }
}
