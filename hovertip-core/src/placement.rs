//! Tooltip placement relative to its trigger.
//!
//! The default placement centers the tooltip horizontally over the trigger and
//! sits it above with a fixed gap. Boundary corrections run in a fixed order:
//! flip below when the top would clip, then clamp left, then clamp right.
use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, ScrollOffset, Size};

/// Spacing applied around the trigger and against the viewport edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Distance between the trigger edge and the tooltip.
    #[serde(default = "PlacementConfig::default_gap")]
    pub gap: f64,
    /// Minimum distance kept from the visible region's edges.
    #[serde(default = "PlacementConfig::default_margin")]
    pub margin: f64,
}

impl PlacementConfig {
    const fn default_gap() -> f64 {
        10.0
    }

    const fn default_margin() -> f64 {
        10.0
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            gap: Self::default_gap(),
            margin: Self::default_margin(),
        }
    }
}

/// Which way the tooltip's arrow points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowDirection {
    /// Tooltip above the trigger, arrow pointing down at it.
    #[default]
    Down,
    /// Tooltip flipped below the trigger, arrow pointing up.
    Up,
}

impl ArrowDirection {
    #[must_use]
    pub const fn css_value(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
        }
    }

    #[must_use]
    pub const fn is_flipped(self) -> bool {
        matches!(self, Self::Up)
    }
}

/// Everything placement needs to know about the page at display time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlacementInput {
    pub trigger: Rect,
    pub tooltip: Size,
    pub scroll: ScrollOffset,
    pub viewport_width: f64,
}

/// Final document-absolute position for a tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionResult {
    pub left: f64,
    pub top: f64,
    pub arrow: ArrowDirection,
}

impl PositionResult {
    #[must_use]
    pub fn left_px(&self) -> String {
        format!("{}px", self.left)
    }

    #[must_use]
    pub fn top_px(&self) -> String {
        format!("{}px", self.top)
    }
}

/// Compute where a tooltip should sit for the given trigger and page state.
#[must_use]
pub fn compute_position(input: &PlacementInput, config: &PlacementConfig) -> PositionResult {
    let PlacementInput {
        trigger,
        tooltip,
        scroll,
        viewport_width,
    } = *input;

    let mut left = trigger.center_x() + scroll.x - tooltip.width / 2.0;
    let mut top = trigger.top + scroll.y - tooltip.height - config.gap;
    let mut arrow = ArrowDirection::Down;

    if top < scroll.y + config.margin {
        top = trigger.bottom() + scroll.y + config.gap;
        arrow = ArrowDirection::Up;
    }

    if left < scroll.x + config.margin {
        left = scroll.x + config.margin;
    }

    // Runs after the left clamp: an over-wide tooltip ends up right-aligned.
    let right_limit = scroll.x + viewport_width - config.margin;
    if left + tooltip.width > right_limit {
        left = right_limit - tooltip.width;
    }

    PositionResult { left, top, arrow }
}
