use groove::{KeyValueStore, OverlayError};

/// Helper to abstract WebSys LocalStorage interactions
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for LocalStorage {
    fn get(&self, _key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        if let Some(storage) = local_storage() {
            return storage.get_item(_key).ok().flatten();
        }
        None
    }

    #[cfg(target_arch = "wasm32")]
    fn set(&self, key: &str, value: &str) -> groove::Result<()> {
        let storage = local_storage()
            .ok_or_else(|| OverlayError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| OverlayError::Storage(format!("{e:?}")))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn set(&self, _key: &str, _value: &str) -> groove::Result<()> {
        Err(OverlayError::Storage(
            "localStorage is only available in the browser".to_string(),
        ))
    }
}
