//! Staff-only deletion overlay for the Groove Library page.
//!
//! Everything the browser provides (local storage, the page's `isAdmin`/`isMod`
//! globals, rendered item elements) is reached through the traits in [`traits`],
//! so the core runs and tests natively.

pub mod config;
pub mod deleted;
pub mod display;
pub mod error;
pub mod overlay;
pub mod staff;
pub mod store;
pub mod text;
pub mod traits;

pub use config::OverlayConfig;
pub use deleted::{key_ta, load_set, save_set, DeletedSet};
pub use display::derive_display_name;
pub use error::{OverlayError, Result};
pub use overlay::Overlay;
pub use staff::is_staff;
pub use store::MemoryStore;
pub use text::get_text;
pub use traits::{CapabilityProvider, ItemText, KeyValueStore, StaticCapabilities};
