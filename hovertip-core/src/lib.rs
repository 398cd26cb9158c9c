//! Hovertip Core
//!
//! Platform-agnostic tooltip logic: placement against the viewport, the
//! single-slot show/fade/hide lifecycle, and the controller that drives both
//! through a host-provided [`TooltipSurface`].
//! This crate has no DOM dependency; the browser binding lives in `hovertip-web`.

pub mod config;
pub mod controller;
pub mod geometry;
pub mod lifecycle;
pub mod placement;
pub mod surface;

// Re-export commonly used types
pub use config::{ConfigError, TooltipConfig};
pub use controller::{FadeTimer, TooltipController};
pub use geometry::{Rect, ScrollOffset, Size};
pub use lifecycle::{TooltipId, TooltipPhase, TooltipSlot};
pub use placement::{ArrowDirection, PlacementConfig, PlacementInput, PositionResult, compute_position};
pub use surface::TooltipSurface;
