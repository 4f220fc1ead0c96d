//! Page configuration: breakpoints, observer tuning, offsets and stagger steps.
//!
//! Defaults reproduce the page's stock behaviour. A page may override any
//! field with a JSON object in the `data-fx-config` attribute on `<html>`;
//! absent fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 250;

/// Errors produced while parsing or validating page configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override attribute was not valid JSON for [`FxConfig`].
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field parsed but holds an unusable value.
    #[error("invalid config field {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tuning for one visibility watcher.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObserverConfig {
    /// Visible-area fraction that must be crossed, in `[0, 1]`.
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting.
    pub root_margin: String,
}

impl ObserverConfig {
    fn new(threshold: f64, root_margin: &str) -> Self {
        Self { threshold, root_margin: root_margin.to_owned() }
    }
}

/// All tunable page constants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FxConfig {
    /// Widths at or below this are treated as touch layouts.
    pub mobile_breakpoint_px: f64,
    pub resize_debounce_ms: u32,
    /// Scroll offset after which the navbar gets the `scrolled` class.
    pub navbar_scrolled_after_px: f64,
    /// How far above a section's top it already counts as the active one.
    pub section_activation_offset_px: f64,
    /// Gap left above an anchor target after smooth scrolling.
    pub anchor_scroll_offset_px: f64,
    pub reveal: ObserverConfig,
    pub card_reveal: ObserverConfig,
    pub lazy_images: ObserverConfig,
    pub card_stagger_ms: u32,
    pub tag_stagger_ms: u32,
    /// Number of leading images preloaded eagerly on touch layouts.
    pub mobile_preload_count: usize,
    pub loader_fade_delay_ms: u32,
    pub loader_remove_delay_ms: u32,
    pub ripple_lifetime_ms: u32,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            navbar_scrolled_after_px: 50.0,
            section_activation_offset_px: 100.0,
            anchor_scroll_offset_px: 80.0,
            reveal: ObserverConfig::new(0.1, "0px 0px -50px 0px"),
            card_reveal: ObserverConfig::new(0.1, "0px"),
            lazy_images: ObserverConfig::new(0.01, "100px 0px"),
            card_stagger_ms: 100,
            tag_stagger_ms: 50,
            mobile_preload_count: 20,
            loader_fade_delay_ms: 500,
            loader_remove_delay_ms: 500,
            ripple_lifetime_ms: 600,
        }
    }
}

impl FxConfig {
    /// Parse overrides from a JSON object and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective config from an optional override attribute.
    ///
    /// Invalid overrides are logged and replaced by the defaults.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring page config override: {e}");
                Self::default()
            }
        }
    }

    /// Whether a viewport this wide gets pointer decorations.
    #[must_use]
    pub fn is_pointer_capable(&self, viewport_width: f64) -> bool {
        viewport_width > self.mobile_breakpoint_px
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.mobile_breakpoint_px.is_finite() || self.mobile_breakpoint_px < 0.0 {
            return Err(invalid("mobileBreakpointPx", "must be a non-negative number"));
        }
        for (field, observer) in [
            ("reveal", &self.reveal),
            ("cardReveal", &self.card_reveal),
            ("lazyImages", &self.lazy_images),
        ] {
            if !(0.0..=1.0).contains(&observer.threshold) {
                return Err(invalid(field, "threshold must be within [0, 1]"));
            }
        }
        for (field, value) in [
            ("navbarScrolledAfterPx", self.navbar_scrolled_after_px),
            ("sectionActivationOffsetPx", self.section_activation_offset_px),
            ("anchorScrollOffsetPx", self.anchor_scroll_offset_px),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.to_owned() }
}
