//! Entry point for Groove Library pages not rendered with Dioxus.
//!
//! On load the overlay takes its config from `window.grooveOverlayConfig` (a
//! JSON string or plain object), hides deleted items and listens for clicks on
//! delete controls. Pages that re-render their list call `grooveRefresh()`.

use std::cell::{Cell, RefCell};

use dioxus::logger::tracing::{info, warn};
use groove::{KeyValueStore, Overlay, OverlayConfig};
use ui::{dom, LocalStorage, WindowCapabilities};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

const CONFIG_GLOBAL: &str = "grooveOverlayConfig";

thread_local! {
    static OVERLAY: RefCell<Option<Overlay<LocalStorage>>> = const { RefCell::new(None) };
    static LISTENING: Cell<bool> = const { Cell::new(false) };
}

#[wasm_bindgen(start)]
pub fn start() {
    dioxus::logger::initialize_default();
    install(config_from_window());
}

/// Replaces the running overlay with one built from `config_json`.
#[wasm_bindgen(js_name = grooveConfigure)]
pub fn configure(config_json: &str) -> Result<(), JsValue> {
    let config =
        OverlayConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    install(config);
    Ok(())
}

/// Render hook: re-reads the deleted set and hides matching items. Returns the
/// number of hidden items.
#[wasm_bindgen(js_name = grooveRefresh)]
pub fn refresh() -> u32 {
    with_overlay(|overlay, document| {
        overlay.reload();
        dom::sync_delete_controls(document, overlay);
        dom::hide_deleted(document, overlay) as u32
    })
    .unwrap_or(0)
}

/// Host pages may call the getters from inside their own `isAdmin`/`isMod`,
/// while a refresh or click still holds the overlay. Those calls get the
/// least-privileged answer instead of a borrow panic.
#[wasm_bindgen(js_name = grooveIsStaff)]
pub fn is_staff() -> bool {
    OVERLAY.with(current_staff)
}

#[wasm_bindgen(js_name = grooveDisplayName)]
pub fn display_name() -> String {
    OVERLAY.with(current_display_name)
}

fn current_staff<S: KeyValueStore>(slot: &RefCell<Option<Overlay<S>>>) -> bool {
    match slot.try_borrow() {
        Ok(overlay) => overlay.as_ref().is_some_and(Overlay::is_staff),
        Err(_) => {
            warn!("Staff check re-entered while the overlay is busy");
            false
        }
    }
}

fn current_display_name<S: KeyValueStore>(slot: &RefCell<Option<Overlay<S>>>) -> String {
    slot.try_borrow()
        .ok()
        .and_then(|overlay| overlay.as_ref().map(Overlay::display_name))
        .unwrap_or_else(|| groove::derive_display_name(None))
}

fn install(config: OverlayConfig) {
    let overlay = Overlay::new(config, LocalStorage).with_capabilities(WindowCapabilities);
    info!(
        "Library overlay ready ({} deleted items, staff: {})",
        overlay.deleted().len(),
        overlay.is_staff()
    );
    let installed = OVERLAY.with(|slot| match slot.try_borrow_mut() {
        Ok(mut current) => {
            *current = Some(overlay);
            true
        }
        Err(_) => false,
    });
    if !installed {
        warn!("Overlay is busy, keeping the running configuration");
        return;
    }

    if let Err(e) = listen_for_deletes() {
        warn!("Delete controls disabled: {:?}", e);
    }
    refresh();
}

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn with_overlay<T>(f: impl FnOnce(&mut Overlay<LocalStorage>, &Document) -> T) -> Option<T> {
    let document = document()?;
    OVERLAY.with(|slot| match slot.try_borrow_mut() {
        Ok(mut overlay) => overlay.as_mut().map(|overlay| f(overlay, &document)),
        Err(_) => {
            warn!("Overlay is busy, skipping re-entrant update");
            None
        }
    })
}

fn listen_for_deletes() -> Result<(), JsValue> {
    if LISTENING.with(Cell::get) {
        return Ok(());
    }
    let document = document().ok_or("no document")?;

    let on_click = Closure::<dyn FnMut(Event)>::new(|event: Event| {
        with_overlay(|overlay, _| dom::handle_delete_click(&event, overlay));
    });
    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    LISTENING.with(|listening| listening.set(true));
    Ok(())
}

fn config_from_window() -> OverlayConfig {
    let Some(window) = web_sys::window() else {
        return OverlayConfig::default();
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if value.is_undefined() || value.is_null() {
        return OverlayConfig::default();
    }

    let json = value.as_string().or_else(|| {
        js_sys::JSON::stringify(&value)
            .ok()
            .map(String::from)
    });
    let Some(json) = json else {
        warn!("Ignoring window.{}: not serializable", CONFIG_GLOBAL);
        return OverlayConfig::default();
    };

    OverlayConfig::from_json(&json).unwrap_or_else(|e| {
        warn!("Ignoring window.{}: {}", CONFIG_GLOBAL, e);
        OverlayConfig::default()
    })
}
