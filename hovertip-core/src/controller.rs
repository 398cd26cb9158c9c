//! Tooltip controller
//!
//! Binds the placement algorithm and the single-slot lifecycle to a host
//! [`TooltipSurface`]. Each `on_*` method is one event handler; none of them
//! surface errors to the caller. A failing host primitive is logged and the
//! handler degrades to a no-op.
use log::{debug, warn};

use crate::config::TooltipConfig;
use crate::lifecycle::{TooltipId, TooltipPhase, TooltipSlot};
use crate::placement::{PlacementInput, PositionResult, compute_position};
use crate::surface::TooltipSurface;

/// Deferred removal the host must run after `delay_ms`, passing `id` back to
/// [`TooltipController::on_fade_elapsed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeTimer {
    pub id: TooltipId,
    pub delay_ms: u32,
}

pub struct TooltipController<S: TooltipSurface> {
    surface: S,
    config: TooltipConfig,
    slot: TooltipSlot<S::Tooltip>,
}

impl<S: TooltipSurface> TooltipController<S> {
    #[must_use]
    pub fn new(surface: S, config: TooltipConfig) -> Self {
        Self {
            surface,
            config,
            slot: TooltipSlot::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &TooltipConfig {
        &self.config
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn phase(&self) -> TooltipPhase {
        self.slot.phase()
    }

    #[must_use]
    pub fn current_id(&self) -> Option<TooltipId> {
        self.slot.current_id()
    }

    #[must_use]
    pub fn current_tooltip(&self) -> Option<&S::Tooltip> {
        self.slot.handle()
    }

    /// Pointer entered `trigger`.
    ///
    /// Removes any displayed tooltip first, then shows a new one when the
    /// trigger carries a non-empty payload. Returns whether a tooltip is now
    /// displayed for this trigger.
    pub fn on_trigger_enter(&mut self, trigger: &S::Trigger) -> bool {
        self.dismiss();

        let text = match self.surface.payload(trigger) {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => return false,
            Err(err) => {
                warn!("failed to read tooltip payload: {err}");
                return false;
            }
        };

        let tooltip = match self.surface.create_tooltip(&text) {
            Ok(tooltip) => tooltip,
            Err(err) => {
                warn!("failed to create tooltip: {err}");
                return false;
            }
        };

        let (id, displaced) = self.slot.install(tooltip);
        if let Some(stale) = displaced {
            self.surface.remove(stale);
        }
        debug!("showing {id}");

        if let Err(err) = self.position_tooltip(trigger) {
            warn!("failed to position {id}: {err}");
        }
        true
    }

    /// Place the current tooltip against `trigger` and write the result to
    /// the page.
    ///
    /// Returns `Ok(None)` when no tooltip is displayed.
    ///
    /// # Errors
    ///
    /// Returns the surface error if any measurement or style write fails.
    pub fn position_tooltip(
        &mut self,
        trigger: &S::Trigger,
    ) -> Result<Option<PositionResult>, S::Error> {
        let Some(tooltip) = self.slot.handle() else {
            return Ok(None);
        };

        let input = PlacementInput {
            trigger: self.surface.trigger_rect(trigger)?,
            tooltip: self.surface.measure(tooltip)?,
            scroll: self.surface.scroll_offset()?,
            viewport_width: self.surface.viewport_width()?,
        };
        let position = compute_position(&input, &self.config.placement);
        self.surface.apply_position(tooltip, &position)?;
        Ok(Some(position))
    }

    /// Pointer left a trigger.
    ///
    /// Starts the fade-out and returns the removal the host has to schedule.
    pub fn on_trigger_leave(&mut self) -> Option<FadeTimer> {
        let id = self.slot.begin_fade()?;
        if let Some(tooltip) = self.slot.handle() {
            if let Err(err) = self.surface.hide(tooltip) {
                warn!("failed to start fade for {id}: {err}");
            }
        }
        debug!("fading {id} over {}ms", self.config.fade_delay_ms);
        Some(FadeTimer {
            id,
            delay_ms: self.config.fade_delay_ms,
        })
    }

    /// Fade timer for `id` fired.
    ///
    /// Removes the tooltip only if it is still the tracked one; a newer
    /// tooltip or an earlier dismissal makes this a no-op.
    pub fn on_fade_elapsed(&mut self, id: TooltipId) -> bool {
        match self.slot.finish_fade(id) {
            Some(tooltip) => {
                self.surface.remove(tooltip);
                debug!("removed {id} after fade");
                true
            }
            None => {
                debug!("ignoring stale fade for {id}");
                false
            }
        }
    }

    pub fn on_scroll(&mut self) -> bool {
        self.dismiss()
    }

    pub fn on_document_click(&mut self) -> bool {
        self.dismiss()
    }

    /// Remove the current tooltip immediately, skipping any fade.
    pub fn dismiss(&mut self) -> bool {
        let Some(id) = self.slot.current_id() else {
            return false;
        };
        if let Some(tooltip) = self.slot.take() {
            self.surface.remove(tooltip);
        }
        debug!("dismissed {id}");
        true
    }

    /// Release the surface, removing any displayed tooltip.
    pub fn into_surface(mut self) -> S {
        self.dismiss();
        self.surface
    }
}
