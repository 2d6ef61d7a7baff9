//! Overlay configuration.
//!
//! The host page may hand over a JSON object; any field it leaves out keeps
//! its default, so `{}` is a valid config.

use serde::{Deserialize, Serialize};
use shared::keys::DEFAULT_DELETED_KEY;

use crate::error::{OverlayError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Storage key of the deleted-item set
    pub deleted_key: String,
    /// Matches one rendered library item
    pub item_selector: String,
    /// Tried in order inside an item to find its title
    pub title_selectors: Vec<String>,
    /// Tried in order inside an item to find its artist
    pub artist_selectors: Vec<String>,
    /// Matches the delete control inside an item
    pub delete_control_selector: String,
    /// CSS `display` given to delete controls shown to staff
    pub control_display: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            deleted_key: DEFAULT_DELETED_KEY.to_string(),
            item_selector: "[data-groove-item]".to_string(),
            title_selectors: [".title", ".name", "[data-title]", "h3"]
                .map(String::from)
                .to_vec(),
            artist_selectors: [".artist", ".subtitle", "[data-artist]", "p"]
                .map(String::from)
                .to_vec(),
            delete_control_selector: "[data-groove-delete]".to_string(),
            control_display: "inline-block".to_string(),
        }
    }
}

impl OverlayConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.deleted_key.trim().is_empty() {
            return Err(OverlayError::Config("deleted_key is empty".to_string()));
        }
        if self.item_selector.trim().is_empty() {
            return Err(OverlayError::Config("item_selector is empty".to_string()));
        }
        let display = self.control_display.trim();
        if display.is_empty() || display == "none" {
            return Err(OverlayError::Config(
                "control_display must make controls visible".to_string(),
            ));
        }
        if self.title_selectors.is_empty() && self.artist_selectors.is_empty() {
            return Err(OverlayError::Config(
                "no title or artist selectors".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(OverlayConfig::from_json("{}").unwrap(), OverlayConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config =
            OverlayConfig::from_json(r#"{"deleted_key":"groove_hidden","title_selectors":[".t"]}"#)
                .unwrap();
        assert_eq!(config.deleted_key, "groove_hidden");
        assert_eq!(config.title_selectors, vec![".t".to_string()]);
        assert_eq!(config.item_selector, "[data-groove-item]");
        assert_eq!(config.control_display, "inline-block");
    }

    #[test]
    fn controls_for_staff_get_a_visible_display() {
        let config = OverlayConfig::from_json(r#"{"control_display":"flex"}"#).unwrap();
        assert_eq!(config.control_display, "flex");
        assert!(matches!(
            OverlayConfig::from_json(r#"{"control_display":"none"}"#),
            Err(OverlayError::Config(_))
        ));
        assert!(matches!(
            OverlayConfig::from_json(r#"{"control_display":""}"#),
            Err(OverlayError::Config(_))
        ));
    }

    #[test]
    fn rejects_blank_key_and_garbage() {
        assert!(matches!(
            OverlayConfig::from_json(r#"{"deleted_key":"  "}"#),
            Err(OverlayError::Config(_))
        ));
        assert!(matches!(
            OverlayConfig::from_json("not json"),
            Err(OverlayError::Json(_))
        ));
    }
}
