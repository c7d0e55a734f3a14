//! Hover overlay and layout toggles.

use crate::model::item::{Capability, ItemRef};
use log::debug;
use serde::{Deserialize, Serialize};

/// Toggle-able display state layered over the current view.
///
/// The hover overlay and the wide-layout flag are independent; neither
/// toggle resets the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayState {
    hover: Option<String>,
    wide_layout: bool,
}

impl OverlayState {
    /// Creates a state with no overlay and normal layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the hover overlay for `item`.
    ///
    /// Opening requires the item to declare the hover capability and
    /// return a body; anything else degrades silently. Toggling twice
    /// always restores the pre-toggle state. Returns whether the overlay
    /// visibility changed.
    pub fn toggle_hover(&mut self, item: Option<&ItemRef>) -> bool {
        if self.hover.is_some() {
            self.hover = None;
            return true;
        }

        let Some(item) = item else {
            debug!("event=hover module=overlay status=noop reason=no_selection");
            return false;
        };
        if !item.supports(Capability::Hover) {
            debug!(
                "event=hover module=overlay status=noop item={} reason=plain",
                item.label()
            );
            return false;
        }
        let Some(body) = item.hover() else {
            debug!(
                "event=hover module=overlay status=noop item={} reason=empty",
                item.label()
            );
            return false;
        };

        self.hover = Some(body);
        true
    }

    /// Closes the hover overlay if open.
    pub fn close_hover(&mut self) {
        self.hover = None;
    }

    /// Toggles the wide-layout flag.
    pub fn toggle_wide_layout(&mut self) {
        self.wide_layout = !self.wide_layout;
    }

    /// Current hover body, when the overlay is open.
    pub fn hover(&self) -> Option<&str> {
        self.hover.as_deref()
    }

    /// Whether wide layout is active.
    pub fn wide_layout(&self) -> bool {
        self.wide_layout
    }
}
