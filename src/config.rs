//! Page configuration parsed from an embedded JSON blob.
//!
//! Every field has a default equal to the behavior of the stock page, so an
//! empty object (or no config at all) is valid. Sections may be partial.
//!
//! ```json
//! { "gallery": { "settle_policy": "after_stagger" }, "log_level": "debug" }
//! ```

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::gallery::placeholder::Placeholder;
use crate::gallery::reveal::SettlePolicy;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("contact.success_rate must be within 0.0..=1.0, got {0}")]
    SuccessRate(f64),
    #[error("gallery.placeholder.id must be non-empty and differ from the grid id, got '{0}'")]
    PlaceholderId(String),
    #[error("unknown log_level '{0}' (expected error, warn, info, debug or trace)")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub gallery: GalleryConfig,
    pub nav: NavConfig,
    pub theme: ThemeConfig,
    pub contact: ContactConfig,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            gallery: GalleryConfig::default(),
            nav: NavConfig::default(),
            theme: ThemeConfig::default(),
            contact: ContactConfig::default(),
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let rate = self.contact.success_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(ConfigError::SuccessRate(rate));
        }
        // The placeholder is found and removed by id, so it must not be blank
        // or collide with the grid it is appended to.
        let id = self.gallery.placeholder.id.trim();
        if id.is_empty() || id == GALLERY_GRID_ID {
            return Err(ConfigError::PlaceholderId(self.gallery.placeholder.id.clone()));
        }
        self.level()?;
        Ok(())
    }

    /// The configured console log level.
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(&self.log_level).map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub stagger_ms: u64,
    pub settle_ms: u64,
    pub settle_policy: SettlePolicy,
    pub haptic_ms: u64,
    pub placeholder: Placeholder,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            stagger_ms: REVEAL_STAGGER_MS,
            settle_ms: REVEAL_SETTLE_MS,
            settle_policy: SettlePolicy::Fixed,
            haptic_ms: FILTER_HAPTIC_MS,
            placeholder: Placeholder::default(),
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    #[must_use]
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    #[must_use]
    pub fn haptic(&self) -> Duration {
        Duration::from_millis(self.haptic_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub haptic_ms: u64,
    pub swipe_close_px: f64,
    pub anchor_offset_px: f64,
    pub touch_anchor_offset_px: f64,
    pub spy_offset_px: f64,
    pub spy_debounce_ms: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            haptic_ms: MENU_HAPTIC_MS,
            swipe_close_px: MENU_SWIPE_CLOSE_PX,
            anchor_offset_px: ANCHOR_OFFSET_PX,
            touch_anchor_offset_px: TOUCH_ANCHOR_OFFSET_PX,
            spy_offset_px: SCROLL_SPY_OFFSET_PX,
            spy_debounce_ms: SCROLL_SPY_DEBOUNCE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub spin_ms: u64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { storage_key: THEME_STORAGE_KEY.to_owned(), spin_ms: THEME_SPIN_MS }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub latency_ms: u64,
    pub success_rate: f64,
    pub reset_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { latency_ms: SUBMIT_LATENCY_MS, success_rate: SUBMIT_SUCCESS_RATE, reset_ms: SUBMIT_RESET_MS }
    }
}
