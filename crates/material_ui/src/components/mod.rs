//! Material 3 widgets: buttons, selection controls, chips, dialogs, and text fields.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::ripple::{use_ripple, Ripple};

mod buttons;
mod chips;
mod dialog;
mod icon;
mod selection;
mod text_field;

pub use buttons::{Button, IconButton};
pub use chips::Chip;
pub use dialog::Dialog;
pub use icon::Icon;
pub use selection::{Checkbox, Radio, Switch};
pub use text_field::TextField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Material 3 common button styles.
pub enum ButtonVariant {
    /// High-emphasis filled container.
    #[default]
    Filled,
    /// Medium-emphasis outlined container.
    Outlined,
    /// Low-emphasis label only.
    Text,
    /// Filled container with shadow.
    Elevated,
    /// Secondary-container tonal fill.
    Tonal,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outlined => "outlined",
            Self::Text => "text",
            Self::Elevated => "elevated",
            Self::Tonal => "tonal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon button container styles.
pub enum IconButtonVariant {
    /// No container.
    #[default]
    Standard,
    /// Filled container.
    Filled,
    /// Tonal container.
    Tonal,
    /// Outlined container.
    Outlined,
}

impl IconButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Filled => "filled",
            Self::Tonal => "tonal",
            Self::Outlined => "outlined",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Chip families.
pub enum ChipKind {
    /// Smart or automated action.
    #[default]
    Assist,
    /// Toggleable filter.
    Filter,
    /// User-entered value with a remove affordance.
    Input,
    /// Dynamically generated suggestion.
    Suggestion,
}

impl ChipKind {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Assist => "assist",
            Self::Filter => "filter",
            Self::Input => "input",
            Self::Suggestion => "suggestion",
        }
    }

    /// Only filter chips carry a selected state.
    pub(crate) fn is_selectable(self) -> bool {
        matches!(self, Self::Filter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Text field container styles.
pub enum TextFieldVariant {
    /// Filled container with an active indicator.
    #[default]
    Filled,
    /// Outlined container with a notched outline.
    Outlined,
}

impl TextFieldVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outlined => "outlined",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Interaction token shared by every ripple-backed control.
pub(crate) fn interaction_token(disabled: bool, pressed: bool, hovered: bool) -> &'static str {
    if disabled {
        "disabled"
    } else if pressed {
        "pressed"
    } else if hovered {
        "hovered"
    } else {
        "enabled"
    }
}

/// Checkbox mark token. Indeterminate wins over checked, matching the native control.
pub(crate) fn checkbox_mark_token(checked: bool, indeterminate: bool) -> &'static str {
    if indeterminate {
        "indeterminate"
    } else if checked {
        "checked"
    } else {
        "unchecked"
    }
}

/// Text field label position: floating once focused or populated.
pub(crate) fn label_position_token(focused: bool, populated: bool) -> &'static str {
    if focused || populated {
        "floating"
    } else {
        "resting"
    }
}
