//! Tooltip configuration.
//!
//! Every field has a default, so an empty JSON object is a complete config.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::placement::PlacementConfig;

/// Errors raised when tooltip configuration invariants are violated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be a finite, non-negative pixel value (got {value})")]
    Spacing { field: &'static str, value: f64 },
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    /// CSS selector matching trigger elements.
    #[serde(default = "TooltipConfig::default_trigger_selector")]
    pub trigger_selector: String,
    /// Attribute on the trigger holding the tooltip text.
    #[serde(default = "TooltipConfig::default_text_attribute")]
    pub text_attribute: String,
    #[serde(default = "TooltipConfig::default_tooltip_class")]
    pub tooltip_class: String,
    /// Class present while the tooltip is shown; removing it starts the fade.
    #[serde(default = "TooltipConfig::default_visible_class")]
    pub visible_class: String,
    /// Style property telling the stylesheet which way the arrow points.
    #[serde(default = "TooltipConfig::default_arrow_property")]
    pub arrow_property: String,
    #[serde(default = "TooltipConfig::default_fade_delay_ms")]
    pub fade_delay_ms: u32,
    #[serde(default)]
    pub placement: PlacementConfig,
}

impl TooltipConfig {
    fn default_trigger_selector() -> String {
        ".tooltip-trigger".to_string()
    }

    fn default_text_attribute() -> String {
        "data-tooltip".to_string()
    }

    fn default_tooltip_class() -> String {
        "tooltip".to_string()
    }

    fn default_visible_class() -> String {
        "show".to_string()
    }

    fn default_arrow_property() -> String {
        "--arrow-direction".to_string()
    }

    const fn default_fade_delay_ms() -> u32 {
        200
    }

    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config can drive a controller.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            ("trigger_selector", &self.trigger_selector),
            ("text_attribute", &self.text_attribute),
            ("tooltip_class", &self.tooltip_class),
            ("visible_class", &self.visible_class),
            ("arrow_property", &self.arrow_property),
        ];
        if let Some((field, _)) = names.into_iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Empty { field });
        }

        for (field, value) in [
            ("placement.gap", self.placement.gap),
            ("placement.margin", self.placement.margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Spacing { field, value });
            }
        }
        Ok(())
    }

    /// Class attribute for a freshly shown tooltip.
    #[must_use]
    pub fn shown_class_name(&self) -> String {
        format!("{} {}", self.tooltip_class, self.visible_class)
    }
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            trigger_selector: Self::default_trigger_selector(),
            text_attribute: Self::default_text_attribute(),
            tooltip_class: Self::default_tooltip_class(),
            visible_class: Self::default_visible_class(),
            arrow_property: Self::default_arrow_property(),
            fade_delay_ms: Self::default_fade_delay_ms(),
            placement: PlacementConfig::default(),
        }
    }
}
