//! Platform-neutral pointer event payloads.

use serde::{Deserialize, Serialize};

/// `buttons` bitmask value meaning only the primary button is held.
const PRIMARY_BUTTON_ONLY: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Input device family reported by a pointer event.
pub enum PointerKind {
    /// Mouse or trackpad.
    Mouse,
    /// Stylus.
    Pen,
    /// Finger on a touch screen.
    Touch,
}

impl PointerKind {
    /// Maps a DOM `pointerType` string. Unknown values are treated as mouse input.
    pub fn from_dom(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => Self::Touch,
            "pen" => Self::Pen,
            _ => Self::Mouse,
        }
    }

    /// Returns `true` for touch input, which never hovers.
    pub fn is_touch(self) -> bool {
        matches!(self, Self::Touch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Snapshot of the pointer event fields the ripple controller reads.
pub struct PointerSample {
    /// Pointer identity, stable for the lifetime of one contact.
    pub pointer_id: i32,
    /// Device family.
    pub kind: PointerKind,
    /// Whether this is the primary pointer of its device type.
    pub is_primary: bool,
    /// Pressed-buttons bitmask.
    pub buttons: u16,
    /// Document-relative horizontal position.
    pub page_x: f64,
    /// Document-relative vertical position.
    pub page_y: f64,
}

impl PointerSample {
    /// Builds a primary mouse sample with the primary button held.
    pub fn mouse(pointer_id: i32, page_x: f64, page_y: f64) -> Self {
        Self {
            pointer_id,
            kind: PointerKind::Mouse,
            is_primary: true,
            buttons: PRIMARY_BUTTON_ONLY,
            page_x,
            page_y,
        }
    }

    /// Builds a primary touch sample.
    pub fn touch(pointer_id: i32, page_x: f64, page_y: f64) -> Self {
        Self {
            pointer_id,
            kind: PointerKind::Touch,
            is_primary: true,
            buttons: PRIMARY_BUTTON_ONLY,
            page_x,
            page_y,
        }
    }

    /// Returns a copy with a different `buttons` bitmask.
    pub fn with_buttons(self, buttons: u16) -> Self {
        Self { buttons, ..self }
    }

    /// Returns `true` when exactly the primary button is held.
    pub fn primary_button_held(&self) -> bool {
        self.buttons == PRIMARY_BUTTON_ONLY
    }
}
