use tracing::{debug, info};

use crate::{
    config::OverlayConfig,
    deleted::{key_ta, load_set, save_set, DeletedSet},
    display::derive_display_name,
    error::{OverlayError, Result},
    staff::{self, read_session},
    text::get_text,
    traits::{CapabilityProvider, ItemText, KeyValueStore},
};

/// Decides who may delete library items and which items stay hidden.
///
/// The deleted set is loaded once at construction and is the source of truth
/// for [`Overlay::is_deleted`] until [`Overlay::reload`]. Writes replace the
/// stored set wholesale, so another tab's concurrent deletion can be lost.
pub struct Overlay<S> {
    config: OverlayConfig,
    store: S,
    capabilities: Option<Box<dyn CapabilityProvider>>,
    deleted: DeletedSet,
}

impl<S: KeyValueStore> Overlay<S> {
    pub fn new(config: OverlayConfig, store: S) -> Self {
        let deleted = load_set(&store, &config.deleted_key);
        debug!("Loaded {} deleted items", deleted.len());
        Self {
            config,
            store,
            capabilities: None,
            deleted,
        }
    }

    pub fn with_capabilities(mut self, capabilities: impl CapabilityProvider + 'static) -> Self {
        self.capabilities = Some(Box::new(capabilities));
        self
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn is_staff(&self) -> bool {
        staff::is_staff(&self.store, self.capabilities.as_deref())
    }

    /// Display name of the signed-in user.
    pub fn display_name(&self) -> String {
        let email = read_session(&self.store).ok().flatten().map(|s| s.email);
        derive_display_name(email.as_deref())
    }

    pub fn item_key<I: ItemText + ?Sized>(&self, item: &I) -> String {
        let title = get_text(item, &self.config.title_selectors);
        let artist = get_text(item, &self.config.artist_selectors);
        key_ta(Some(&title), Some(&artist))
    }

    /// Render filter: whether `item` must not be shown.
    pub fn is_deleted<I: ItemText + ?Sized>(&self, item: &I) -> bool {
        self.is_key_deleted(&self.item_key(item))
    }

    pub fn is_key_deleted(&self, key: &str) -> bool {
        self.deleted.contains(key)
    }

    /// Marks `item` deleted and persists the set. Returns whether it was newly
    /// added.
    pub fn delete<I: ItemText + ?Sized>(&mut self, item: &I) -> Result<bool> {
        let key = self.item_key(item);
        self.delete_key(key)
    }

    /// Like [`Overlay::delete`] for an already computed key, e.g. from
    /// [`key_ta`] on data the caller rendered itself.
    pub fn delete_key(&mut self, key: String) -> Result<bool> {
        if !self.is_staff() {
            return Err(OverlayError::NotStaff);
        }
        if self.deleted.contains(&key) {
            return Ok(false);
        }

        let mut updated = self.deleted.clone();
        updated.insert(key.clone());
        save_set(&self.store, &self.config.deleted_key, &updated)?;
        self.deleted = updated;
        info!("Deleted library item {}", key);
        Ok(true)
    }

    pub fn deleted(&self) -> &DeletedSet {
        &self.deleted
    }

    /// Re-reads the deleted set, picking up writes made elsewhere.
    pub fn reload(&mut self) {
        self.deleted = load_set(&self.store, &self.config.deleted_key);
    }
}
