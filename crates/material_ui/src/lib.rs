//! Material 3 widget library for Leptos.
//!
//! Interactive widgets share one ripple binding ([`use_ripple`]) over the headless
//! `ripple_core` state machine, and expose a stable `ui-*` class and `data-ui-*` attribute
//! contract for the theme stylesheet. Consumers should compose these widgets rather than
//! re-implementing ripple handling; custom controls can still call [`use_ripple`] and render a
//! [`Ripple`] themselves.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod components;
mod dom;
mod ripple;

pub use components::{
    Button, ButtonVariant, Checkbox, Chip, ChipKind, Dialog, Icon, IconButton, IconButtonVariant,
    Radio, Switch, TextField, TextFieldVariant,
};
pub use dom::{DomAnimation, DomSurface};
pub use ripple::{
    pointer_sample, use_ripple, use_ripple_with_config, Ripple, RippleHandlers, RippleState,
};
pub use ripple_core::{RippleConfig, RippleStatus};

/// Convenience imports for crates rendering the widget set.
pub mod prelude {
    pub use crate::{
        use_ripple, Button, ButtonVariant, Checkbox, Chip, ChipKind, Dialog, Icon, IconButton,
        IconButtonVariant, Radio, Ripple, RippleState, Switch, TextField, TextFieldVariant,
    };
}
