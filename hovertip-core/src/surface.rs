use crate::geometry::{Rect, ScrollOffset, Size};
use crate::placement::PositionResult;

/// Host environment primitives the controller drives.
/// Platform-specific implementations should provide this
pub trait TooltipSurface {
    /// Element a tooltip is shown for.
    type Trigger;
    /// Handle to a tooltip element living in the page.
    type Tooltip;
    type Error: std::error::Error + 'static;

    /// Read the trigger's text payload, `None` when the attribute is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the trigger cannot be inspected.
    fn payload(&self, trigger: &Self::Trigger) -> Result<Option<String>, Self::Error>;

    /// Create a tooltip element in its visible state, carrying `text`, and
    /// attach it to the page.
    ///
    /// # Errors
    ///
    /// Returns an error if the element cannot be created or attached.
    fn create_tooltip(&mut self, text: &str) -> Result<Self::Tooltip, Self::Error>;

    /// Measure a tooltip that is attached to the page.
    ///
    /// # Errors
    ///
    /// Returns an error if layout information is unavailable.
    fn measure(&self, tooltip: &Self::Tooltip) -> Result<Size, Self::Error>;

    /// Viewport-relative bounding box of a trigger.
    ///
    /// # Errors
    ///
    /// Returns an error if layout information is unavailable.
    fn trigger_rect(&self, trigger: &Self::Trigger) -> Result<Rect, Self::Error>;

    /// Current document scroll offsets.
    ///
    /// # Errors
    ///
    /// Returns an error if the scroll position cannot be read.
    fn scroll_offset(&self) -> Result<ScrollOffset, Self::Error>;

    /// Width of the viewport in CSS pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if the viewport cannot be measured.
    fn viewport_width(&self) -> Result<f64, Self::Error>;

    /// Apply absolute left/top offsets and the arrow direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the element's style cannot be written.
    fn apply_position(
        &mut self,
        tooltip: &Self::Tooltip,
        position: &PositionResult,
    ) -> Result<(), Self::Error>;

    /// Drop the visible-state marker, starting the fade-out transition.
    ///
    /// # Errors
    ///
    /// Returns an error if the element's classes cannot be updated.
    fn hide(&mut self, tooltip: &Self::Tooltip) -> Result<(), Self::Error>;

    /// Detach the tooltip from the page.
    fn remove(&mut self, tooltip: Self::Tooltip);
}
