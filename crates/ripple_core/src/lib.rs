//! Headless pointer-interaction engine behind Material 3 ripples and state layers.
//!
//! [`RippleController`] classifies pointer and click input for one interactive surface, runs the
//! press/release state machine, and reports `hovered`/`pressed` flags through [`RippleStatus`].
//! Rendering stays behind the [`RippleSurface`] seam so the same controller drives the DOM
//! binding in `material_ui` and the deterministic fakes used by tests. Deferred work (the touch
//! hold delay and the minimum press duration) is returned as [`RippleEffect`] values for the host
//! to schedule.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod controller;
pub mod effect;
pub mod geometry;
pub mod pointer;
pub mod surface;

use thiserror::Error;

pub use config::{
    RippleConfig, EASING_EMPHASIZED, INITIAL_ORIGIN_SCALE, MINIMUM_PRESS_MS, PADDING,
    PRESS_GROW_MS, SOFT_EDGE_CONTAINER_RATIO, SOFT_EDGE_MINIMUM_SIZE, TOUCH_DELAY_MS,
};
pub use controller::{PointerEventKind, RippleController, RipplePhase, RippleSession, RippleStatus};
pub use effect::{AnimationGeneration, RippleEffect, TouchDelayToken};
pub use geometry::{press_keyframes, Point, RippleGeometry, RippleKeyframe, SurfaceBounds};
pub use pointer::{PointerKind, PointerSample};
pub use surface::{RippleAnimation, RippleSurface};

#[derive(Debug, Clone, PartialEq, Error)]
/// Failures reported by ripple configuration and surface adapters.
///
/// None of these reach the user: the controller turns surface failures into "no ripple shown"
/// and keeps advancing its state machine.
pub enum RippleError {
    /// A configuration field holds an unusable value.
    #[error("invalid ripple config `{field}`: {reason}")]
    InvalidConfig {
        /// Offending field name.
        field: &'static str,
        /// Human-readable rejection reason.
        reason: String,
    },
    /// The animation engine refused to start the press animation.
    #[error("ripple animation unavailable: {0}")]
    AnimationUnavailable(String),
    /// The surface has no layout box to paint onto.
    #[error("ripple surface is detached")]
    SurfaceDetached,
}
