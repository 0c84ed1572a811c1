//! Site tunables, overridable from an inline JSON block.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub scroll_threshold_px: f64,
    pub search_debounce_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_frame_ms: u32,
    pub toast_visible_ms: u32,
    pub confirmation_visible_ms: u32,
    pub lazy_root_margin: String,
    /// `tracing` filter directive for console output, e.g. `info` or `ccs_storage=debug`.
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: crate::nav::SCROLL_THRESHOLD_PX,
            search_debounce_ms: 300,
            counter_duration_ms: crate::counter::COUNTER_DURATION_MS,
            counter_frame_ms: crate::counter::FRAME_INTERVAL_MS,
            toast_visible_ms: crate::toast::TOAST_VISIBLE_MS,
            confirmation_visible_ms: 3000,
            lazy_root_margin: "50px".to_owned(),
            log_filter: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse an override block. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(r#"{"searchDebounceMs": 150}"#).unwrap();
        assert_eq!(config.search_debounce_ms, 150);
        assert_eq!(config.scroll_threshold_px, 50.0);
        assert_eq!(config.lazy_root_margin, "50px");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn log_filter_is_overridable() {
        let config = SiteConfig::from_json(r#"{"logFilter": "ccs_storage=debug"}"#).unwrap();
        assert_eq!(config.log_filter, "ccs_storage=debug");
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(SiteConfig::from_json(r#"{"toastVisibleMs": "soon"}"#).is_err());
    }
}
