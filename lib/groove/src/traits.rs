use crate::error::Result;

/// String key-value storage, shaped after the browser's `localStorage`.
///
/// Takes `&self` for writes because the browser store is shared global state.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Role checks supplied by the host page.
///
/// Answers take precedence over the stored session when they report `true`;
/// a `false` answer falls through to the user directory.
pub trait CapabilityProvider {
    fn is_admin(&self) -> bool;
    fn is_mod(&self) -> bool;
}

/// Fixed capability answers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StaticCapabilities {
    pub admin: bool,
    pub moderator: bool,
}

impl CapabilityProvider for StaticCapabilities {
    fn is_admin(&self) -> bool {
        self.admin
    }

    fn is_mod(&self) -> bool {
        self.moderator
    }
}

/// A rendered library item that text can be pulled out of.
pub trait ItemText {
    /// Raw text content of the first descendant matching `selector`, if any.
    fn select_text(&self, selector: &str) -> Option<String>;
}
