use groove::CapabilityProvider;

/// Reads `window.isAdmin()` / `window.isMod()` when the host page defines them.
///
/// Anything but a callable returning exactly `true` counts as `false`,
/// including a call that throws.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowCapabilities;

impl CapabilityProvider for WindowCapabilities {
    fn is_admin(&self) -> bool {
        call_global("isAdmin")
    }

    fn is_mod(&self) -> bool {
        call_global("isMod")
    }
}

#[cfg(target_arch = "wasm32")]
fn call_global(name: &str) -> bool {
    use wasm_bindgen::{JsCast, JsValue};

    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(name)) else {
        return false;
    };
    let Some(func) = value.dyn_ref::<js_sys::Function>() else {
        return false;
    };
    match func.call0(&window) {
        Ok(result) => result.as_bool() == Some(true),
        Err(e) => {
            dioxus::logger::tracing::warn!("window.{} threw: {:?}", name, e);
            false
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn call_global(_name: &str) -> bool {
    false
}
