//! Rendering seam between the controller and an animation engine.

use crate::{
    geometry::{RippleKeyframe, SurfaceBounds},
    RippleError,
};

/// Handle to one running press-grow animation.
pub trait RippleAnimation {
    /// Stops the animation and removes its effect from the surface.
    fn cancel(&self);

    /// Milliseconds since the animation started.
    ///
    /// `None` means the engine cannot tell, which the controller reads as "already finished".
    fn elapsed_ms(&self) -> Option<f64>;
}

/// Element that hosts the ripple paint.
///
/// The surface is referenced by the controller, never created by it; the consuming widget owns
/// the underlying node.
pub trait RippleSurface {
    /// Animation handle type produced by [`RippleSurface::start_animation`].
    type Animation: RippleAnimation;

    /// Current layout box in document coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`RippleError::SurfaceDetached`] when the element has no layout box.
    fn bounds(&self) -> Result<SurfaceBounds, RippleError>;

    /// Starts a forward-filling animation between two keyframes.
    ///
    /// # Errors
    ///
    /// Returns [`RippleError::AnimationUnavailable`] when the engine refuses the animation.
    fn start_animation(
        &self,
        keyframes: &[RippleKeyframe; 2],
        duration_ms: f64,
        easing: &str,
    ) -> Result<Self::Animation, RippleError>;
}
