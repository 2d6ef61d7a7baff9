//! This crate contains the browser side of the workspace: the storage and page
//! bindings the overlay runs on, and the DOM pass that patches library items.

mod storage;
pub use storage::LocalStorage;

mod globals;
pub use globals::WindowCapabilities;

pub mod dom;
