//! Single-slot tooltip lifecycle.
//!
//! At most one tooltip is tracked at a time. Every tooltip gets a fresh
//! [`TooltipId`] when it is installed; deferred removals carry the id they were
//! scheduled for and are ignored once a newer tooltip has taken the slot.
use std::fmt;

/// Generation id of a tooltip instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TooltipId(u64);

impl TooltipId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TooltipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tooltip#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipPhase {
    #[default]
    Hidden,
    Visible,
    FadingOut,
}

#[derive(Debug)]
struct Active<H> {
    id: TooltipId,
    handle: H,
    fading: bool,
}

/// Owner of the one "current tooltip" reference.
#[derive(Debug)]
pub struct TooltipSlot<H> {
    current: Option<Active<H>>,
    next_id: u64,
}

impl<H> Default for TooltipSlot<H> {
    fn default() -> Self {
        Self {
            current: None,
            next_id: 1,
        }
    }
}

impl<H> TooltipSlot<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> TooltipPhase {
        match &self.current {
            None => TooltipPhase::Hidden,
            Some(active) if active.fading => TooltipPhase::FadingOut,
            Some(_) => TooltipPhase::Visible,
        }
    }

    #[must_use]
    pub fn current_id(&self) -> Option<TooltipId> {
        self.current.as_ref().map(|active| active.id)
    }

    #[must_use]
    pub fn handle(&self) -> Option<&H> {
        self.current.as_ref().map(|active| &active.handle)
    }

    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.current.is_some()
    }

    /// Track `handle` as the new visible tooltip.
    ///
    /// Returns the assigned id and whatever tooltip previously held the slot,
    /// which the caller must remove from the page.
    pub fn install(&mut self, handle: H) -> (TooltipId, Option<H>) {
        let id = TooltipId(self.next_id);
        self.next_id += 1;
        let displaced = self.current.replace(Active {
            id,
            handle,
            fading: false,
        });
        (id, displaced.map(|active| active.handle))
    }

    /// Move a visible tooltip into its fade-out phase.
    ///
    /// Returns `None` when nothing is visible, including when a fade is
    /// already underway.
    pub fn begin_fade(&mut self) -> Option<TooltipId> {
        match self.current.as_mut() {
            Some(active) if !active.fading => {
                active.fading = true;
                Some(active.id)
            }
            _ => None,
        }
    }

    /// Complete a fade scheduled for `id`.
    ///
    /// Only releases the handle if `id` is still the tracked tooltip.
    pub fn finish_fade(&mut self, id: TooltipId) -> Option<H> {
        if self.current_id() != Some(id) {
            return None;
        }
        self.take()
    }

    /// Clear the slot immediately, whatever its phase.
    pub fn take(&mut self) -> Option<H> {
        self.current.take().map(|active| active.handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_assigns_increasing_ids_and_displaces() {
        let mut slot = TooltipSlot::new();
        let (first, displaced) = slot.install("a");
        assert!(displaced.is_none());
        let (second, displaced) = slot.install("b");
        assert_eq!(displaced, Some("a"));
        assert!(second > first);
        assert_eq!(slot.handle(), Some(&"b"));
        assert_eq!(slot.phase(), TooltipPhase::Visible);
    }

    #[test]
    fn fade_runs_visible_to_hidden() {
        let mut slot = TooltipSlot::new();
        let (id, _) = slot.install("a");
        assert_eq!(slot.begin_fade(), Some(id));
        assert_eq!(slot.phase(), TooltipPhase::FadingOut);
        assert_eq!(slot.begin_fade(), None, "second leave must not re-arm");
        assert_eq!(slot.finish_fade(id), Some("a"));
        assert_eq!(slot.phase(), TooltipPhase::Hidden);
    }

    #[test]
    fn stale_fade_does_not_remove_newer_tooltip() {
        let mut slot = TooltipSlot::new();
        let (old, _) = slot.install("a");
        slot.begin_fade();
        let (new, displaced) = slot.install("b");
        assert_eq!(displaced, Some("a"));
        assert_eq!(slot.finish_fade(old), None);
        assert_eq!(slot.current_id(), Some(new));
        assert_eq!(slot.phase(), TooltipPhase::Visible);
    }

    #[test]
    fn take_bypasses_fade() {
        let mut slot = TooltipSlot::new();
        let (id, _) = slot.install("a");
        slot.begin_fade();
        assert_eq!(slot.take(), Some("a"));
        assert_eq!(slot.finish_fade(id), None);
        assert!(!slot.is_occupied());
    }

    #[test]
    fn empty_slot_operations_are_noops() {
        let mut slot: TooltipSlot<&str> = TooltipSlot::default();
        assert_eq!(slot.begin_fade(), None);
        assert_eq!(slot.take(), None);
        assert_eq!(slot.phase(), TooltipPhase::Hidden);
        assert_eq!(TooltipId(3).to_string(), "tooltip#3");
    }
}
