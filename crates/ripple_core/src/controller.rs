//! Pointer classification and the press/release state machine.
//!
//! Phases cycle `Inactive -> TouchDelay -> Holding -> WaitingForClick -> Inactive` for touch and
//! short-circuit `Inactive -> WaitingForClick` for mouse and pen. Every handler returns the timer
//! requests the host must schedule; the controller never blocks and never owns a clock.

use serde::{Deserialize, Serialize};

use crate::{
    config::RippleConfig,
    effect::{AnimationGeneration, RippleEffect, TouchDelayToken},
    geometry::{press_keyframes, RippleGeometry},
    pointer::PointerSample,
    surface::{RippleAnimation, RippleSurface},
    RippleError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Interaction phase of a [`RippleSession`].
pub enum RipplePhase {
    /// No press in progress.
    #[default]
    Inactive,
    /// Touch down seen; waiting to tell a hold from a scroll.
    TouchDelay,
    /// Touch held past the delay; the press animation is playing.
    Holding,
    /// Pointer released (or mouse pressed); the press ends on `click`.
    WaitingForClick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Flags the visual layer maps onto state-layer and ripple opacity.
pub struct RippleStatus {
    /// A non-touch pointer is over the surface.
    pub hovered: bool,
    /// The press ink is visible.
    pub pressed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pointer event families routed through [`RippleController::should_react_to`].
pub enum PointerEventKind {
    /// `pointerenter`.
    Enter,
    /// `pointerleave`.
    Leave,
    /// `pointerdown`.
    Down,
    /// `pointerup`.
    Up,
    /// `pointercancel`.
    Cancel,
}

impl PointerEventKind {
    fn is_hover(self) -> bool {
        matches!(self, Self::Enter | Self::Leave)
    }
}

#[derive(Debug)]
struct GrowAnimation<A> {
    generation: AnimationGeneration,
    handle: A,
}

#[derive(Debug)]
/// Mutable state of the current interaction.
pub struct RippleSession<A> {
    phase: RipplePhase,
    origin: Option<PointerSample>,
    status: RippleStatus,
    grow: Option<GrowAnimation<A>>,
    geometry: Option<RippleGeometry>,
    touch_delay: Option<TouchDelayToken>,
}

impl<A> Default for RippleSession<A> {
    fn default() -> Self {
        Self {
            phase: RipplePhase::Inactive,
            origin: None,
            status: RippleStatus::default(),
            grow: None,
            geometry: None,
            touch_delay: None,
        }
    }
}

impl<A> RippleSession<A> {
    /// Current interaction phase.
    pub fn phase(&self) -> RipplePhase {
        self.phase
    }

    /// Pointer sample that opened the session, if one is tracked.
    pub fn origin(&self) -> Option<&PointerSample> {
        self.origin.as_ref()
    }

    /// Geometry computed for the most recent press.
    pub fn geometry(&self) -> Option<&RippleGeometry> {
        self.geometry.as_ref()
    }

    /// Generation of the grow animation currently targeting the surface.
    pub fn current_generation(&self) -> Option<AnimationGeneration> {
        self.grow.as_ref().map(|grow| grow.generation)
    }
}

/// Ripple state machine for one interactive surface.
pub struct RippleController<S: RippleSurface> {
    config: RippleConfig,
    surface: Option<S>,
    disabled: bool,
    session: RippleSession<S::Animation>,
    next_generation: u64,
    next_touch_token: u64,
}

impl<S: RippleSurface> Default for RippleController<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RippleSurface> RippleController<S> {
    /// Creates an enabled controller with Material 3 defaults and no surface.
    pub fn new() -> Self {
        Self {
            config: RippleConfig::default(),
            surface: None,
            disabled: false,
            session: RippleSession::default(),
            next_generation: 0,
            next_touch_token: 0,
        }
    }

    /// Creates a controller with custom timings.
    ///
    /// # Errors
    ///
    /// Returns the [`RippleConfig::validate`] failure for unusable configs.
    pub fn with_config(config: RippleConfig) -> Result<Self, RippleError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    /// Current flags for the visual layer.
    pub fn status(&self) -> RippleStatus {
        self.session.status
    }

    /// Current interaction phase.
    pub fn phase(&self) -> RipplePhase {
        self.session.phase
    }

    /// Read-only view of the session.
    pub fn session(&self) -> &RippleSession<S::Animation> {
        &self.session
    }

    /// Whether all input is currently rejected.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether a surface is attached.
    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Binds the element that receives ripple geometry, replacing any previous one.
    pub fn attach(&mut self, surface: S) {
        self.cancel_grow();
        self.surface = Some(surface);
    }

    /// Cancels the running animation, releases the surface and resets the session.
    pub fn dispose(&mut self) {
        self.cancel_grow();
        self.surface = None;
        self.session = RippleSession::default();
    }

    /// Enables or disables the controller. Disabling clears both flags and ends the session.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.session.status = RippleStatus::default();
            self.session.origin = None;
            self.session.phase = RipplePhase::Inactive;
            self.session.touch_delay = None;
        }
    }

    /// Admissibility check applied to every pointer handler.
    pub fn should_react_to(&self, kind: PointerEventKind, event: &PointerSample) -> bool {
        if self.disabled || !event.is_primary {
            return false;
        }
        if let Some(origin) = self.session.origin.as_ref() {
            if origin.pointer_id != event.pointer_id {
                return false;
            }
        }
        if kind.is_hover() {
            return !event.kind.is_touch();
        }
        event.kind.is_touch() || event.primary_button_held()
    }

    /// Handles `pointerenter`.
    pub fn pointer_enter(&mut self, event: &PointerSample) -> Vec<RippleEffect> {
        if self.should_react_to(PointerEventKind::Enter, event) {
            self.session.status.hovered = true;
        }
        Vec::new()
    }

    /// Handles `pointerleave`.
    pub fn pointer_leave(&mut self, event: &PointerSample) -> Vec<RippleEffect> {
        if !self.should_react_to(PointerEventKind::Leave, event) {
            return Vec::new();
        }
        self.session.status.hovered = false;
        if self.session.phase != RipplePhase::Inactive {
            return self.end_press_animation();
        }
        Vec::new()
    }

    /// Handles `pointerdown`.
    pub fn pointer_down(&mut self, event: &PointerSample) -> Vec<RippleEffect> {
        if !self.should_react_to(PointerEventKind::Down, event) {
            return Vec::new();
        }

        self.session.origin = Some(*event);
        if !event.kind.is_touch() {
            self.session.phase = RipplePhase::WaitingForClick;
            self.session.touch_delay = None;
            self.start_press_animation(Some(*event));
            return Vec::new();
        }

        self.next_touch_token += 1;
        let token = TouchDelayToken(self.next_touch_token);
        self.session.phase = RipplePhase::TouchDelay;
        self.session.touch_delay = Some(token);
        vec![RippleEffect::ScheduleTouchDelay {
            token,
            delay_ms: self.config.touch_delay_ms,
        }]
    }

    /// Resumes a touch press once the hold delay passes.
    pub fn touch_delay_elapsed(&mut self, token: TouchDelayToken) -> Vec<RippleEffect> {
        if self.session.phase != RipplePhase::TouchDelay
            || self.session.touch_delay != Some(token)
        {
            return Vec::new();
        }
        self.session.phase = RipplePhase::Holding;
        self.session.touch_delay = None;
        let origin = self.session.origin;
        self.start_press_animation(origin);
        Vec::new()
    }

    /// Handles `pointerup`.
    pub fn pointer_up(&mut self, event: &PointerSample) -> Vec<RippleEffect> {
        if !self.should_react_to(PointerEventKind::Up, event) {
            return Vec::new();
        }
        match self.session.phase {
            RipplePhase::Holding => {
                self.session.phase = RipplePhase::WaitingForClick;
            }
            RipplePhase::TouchDelay => {
                // Released before the hold delay: play the press from the original touch point.
                self.session.phase = RipplePhase::WaitingForClick;
                self.session.touch_delay = None;
                let origin = self.session.origin;
                self.start_press_animation(origin);
            }
            RipplePhase::Inactive | RipplePhase::WaitingForClick => {}
        }
        Vec::new()
    }

    /// Handles `pointercancel`.
    pub fn pointer_cancel(&mut self, event: &PointerSample) -> Vec<RippleEffect> {
        if !self.should_react_to(PointerEventKind::Cancel, event) {
            return Vec::new();
        }
        self.end_press_animation()
    }

    /// Handles `click`, including activations that arrive without any pointer events.
    pub fn click(&mut self) -> Vec<RippleEffect> {
        if self.disabled {
            return Vec::new();
        }
        match self.session.phase {
            RipplePhase::WaitingForClick => self.end_press_animation(),
            RipplePhase::Inactive => {
                self.start_press_animation(None);
                self.end_press_animation()
            }
            RipplePhase::TouchDelay | RipplePhase::Holding => Vec::new(),
        }
    }

    /// Completes a deferred release if `generation` still owns the surface.
    pub fn release_elapsed(&mut self, generation: AnimationGeneration) -> Vec<RippleEffect> {
        if self.session.current_generation() == Some(generation) {
            self.session.status.pressed = false;
        }
        Vec::new()
    }

    fn start_press_animation(&mut self, origin: Option<PointerSample>) {
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        if let Some(previous) = self.session.grow.take() {
            previous.handle.cancel();
        }
        let Ok(bounds) = surface.bounds() else {
            return;
        };

        self.session.status.pressed = true;

        let geometry = RippleGeometry::measure(bounds.width, bounds.height, &self.config);
        let keyframes = press_keyframes(&bounds, &geometry, origin.as_ref());
        self.next_generation += 1;
        let generation = AnimationGeneration(self.next_generation);

        self.session.geometry = Some(geometry);
        self.session.grow = surface
            .start_animation(&keyframes, self.config.press_grow_ms, &self.config.easing)
            .ok()
            .map(|handle| GrowAnimation { generation, handle });
    }

    fn end_press_animation(&mut self) -> Vec<RippleEffect> {
        self.session.origin = None;
        self.session.phase = RipplePhase::Inactive;
        self.session.touch_delay = None;

        let Some(grow) = self.session.grow.as_ref() else {
            self.session.status.pressed = false;
            return Vec::new();
        };
        let elapsed = grow.handle.elapsed_ms().unwrap_or(f64::INFINITY);
        if elapsed >= self.config.minimum_press_ms {
            self.session.status.pressed = false;
            return Vec::new();
        }

        vec![RippleEffect::ScheduleRelease {
            generation: grow.generation,
            delay_ms: self.config.minimum_press_ms - elapsed,
        }]
    }

    fn cancel_grow(&mut self) {
        if let Some(grow) = self.session.grow.take() {
            grow.handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        geometry::{Point, RippleKeyframe, SurfaceBounds},
        pointer::PointerKind,
    };

    #[derive(Debug)]
    struct StartedAnimation {
        keyframes: [RippleKeyframe; 2],
        cancelled: Rc<Cell<bool>>,
    }

    #[derive(Debug)]
    struct FakeAnimation {
        clock: Rc<Cell<f64>>,
        started_at: f64,
        cancelled: Rc<Cell<bool>>,
    }

    impl RippleAnimation for FakeAnimation {
        fn cancel(&self) {
            self.cancelled.set(true);
        }

        fn elapsed_ms(&self) -> Option<f64> {
            if self.cancelled.get() {
                None
            } else {
                Some(self.clock.get() - self.started_at)
            }
        }
    }

    #[derive(Clone)]
    struct FakeSurface {
        clock: Rc<Cell<f64>>,
        bounds: Rc<Cell<Option<SurfaceBounds>>>,
        refuse_animation: bool,
        started: Rc<RefCell<Vec<StartedAnimation>>>,
    }

    impl RippleSurface for FakeSurface {
        type Animation = FakeAnimation;

        fn bounds(&self) -> Result<SurfaceBounds, RippleError> {
            self.bounds.get().ok_or(RippleError::SurfaceDetached)
        }

        fn start_animation(
            &self,
            keyframes: &[RippleKeyframe; 2],
            _duration_ms: f64,
            _easing: &str,
        ) -> Result<FakeAnimation, RippleError> {
            if self.refuse_animation {
                return Err(RippleError::AnimationUnavailable("no engine".to_string()));
            }
            let cancelled = Rc::new(Cell::new(false));
            self.started.borrow_mut().push(StartedAnimation {
                keyframes: *keyframes,
                cancelled: cancelled.clone(),
            });
            Ok(FakeAnimation {
                clock: self.clock.clone(),
                started_at: self.clock.get(),
                cancelled,
            })
        }
    }

    /// Drives a controller against a manual clock, firing scheduled effects in due order.
    struct Harness {
        controller: RippleController<FakeSurface>,
        surface: FakeSurface,
        clock: Rc<Cell<f64>>,
        timers: Vec<(f64, RippleEffect)>,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_surface(|_| {})
        }

        fn with_surface(configure: impl FnOnce(&mut FakeSurface)) -> Self {
            let clock = Rc::new(Cell::new(0.0));
            let mut surface = FakeSurface {
                clock: clock.clone(),
                bounds: Rc::new(Cell::new(Some(SurfaceBounds::sized(100.0, 40.0)))),
                refuse_animation: false,
                started: Rc::new(RefCell::new(Vec::new())),
            };
            configure(&mut surface);
            let mut controller = RippleController::new();
            controller.attach(surface.clone());
            Self {
                controller,
                surface,
                clock,
                timers: Vec::new(),
            }
        }

        fn detached() -> Self {
            let mut harness = Self::new();
            harness.controller.dispose();
            harness
        }

        fn schedule(&mut self, effects: Vec<RippleEffect>) {
            let now = self.clock.get();
            for effect in effects {
                self.timers.push((now + effect.delay_ms(), effect));
            }
        }

        fn send(&mut self, f: impl FnOnce(&mut RippleController<FakeSurface>) -> Vec<RippleEffect>) {
            let effects = f(&mut self.controller);
            self.schedule(effects);
        }

        fn advance(&mut self, ms: f64) {
            let target = self.clock.get() + ms;
            loop {
                let next = self
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _))| *due <= target)
                    .min_by(|a, b| a.1 .0.total_cmp(&b.1 .0))
                    .map(|(index, _)| index);
                let Some(index) = next else {
                    break;
                };
                let (due, effect) = self.timers.remove(index);
                self.clock.set(due);
                let effects = match effect {
                    RippleEffect::ScheduleTouchDelay { token, .. } => {
                        self.controller.touch_delay_elapsed(token)
                    }
                    RippleEffect::ScheduleRelease { generation, .. } => {
                        self.controller.release_elapsed(generation)
                    }
                };
                self.schedule(effects);
            }
            self.clock.set(target);
        }

        fn pressed(&self) -> bool {
            self.controller.status().pressed
        }

        fn hovered(&self) -> bool {
            self.controller.status().hovered
        }

        fn started_count(&self) -> usize {
            self.surface.started.borrow().len()
        }

        fn started_keyframes(&self, index: usize) -> [RippleKeyframe; 2] {
            self.surface.started.borrow()[index].keyframes
        }

        fn was_cancelled(&self, index: usize) -> bool {
            self.surface.started.borrow()[index].cancelled.get()
        }
    }

    fn mouse() -> PointerSample {
        PointerSample::mouse(1, 30.0, 20.0)
    }

    fn mouse_released() -> PointerSample {
        mouse().with_buttons(0)
    }

    fn touch() -> PointerSample {
        PointerSample::touch(7, 80.0, 10.0)
    }

    #[test]
    fn short_presses_stay_visible_for_minimum_duration() {
        for held in [0.0, 40.0, 100.0, 180.0, 224.0] {
            let mut harness = Harness::new();

            harness.send(|c| c.pointer_down(&mouse()));
            assert!(harness.pressed(), "pressed after down (held {held})");
            harness.advance(held);
            harness.send(|c| c.pointer_up(&mouse_released()));
            harness.send(|c| c.click());

            assert_eq!(harness.controller.phase(), RipplePhase::Inactive);
            harness.advance(224.0 - held);
            assert!(harness.pressed(), "still pressed at 224ms (held {held})");
            harness.advance(1.0);
            assert!(!harness.pressed(), "released at 225ms (held {held})");
        }
    }

    #[test]
    fn long_press_releases_immediately() {
        let mut harness = Harness::new();

        harness.send(|c| c.pointer_down(&mouse()));
        harness.advance(300.0);
        harness.send(|c| c.click());

        assert!(!harness.pressed());
        assert!(harness.timers.is_empty());
    }

    #[test]
    fn new_press_cancels_previous_animation_and_ignores_stale_release() {
        let mut harness = Harness::new();

        harness.send(|c| c.pointer_down(&mouse()));
        harness.advance(100.0);
        harness.send(|c| c.click());
        harness.advance(50.0);

        harness.send(|c| c.pointer_down(&PointerSample::mouse(1, 90.0, 30.0)));
        assert_eq!(harness.started_count(), 2);
        assert!(harness.was_cancelled(0));
        assert!(!harness.was_cancelled(1));
        assert_eq!(
            harness.controller.session().current_generation(),
            Some(AnimationGeneration(2))
        );

        // First release would land at t=225; the second press is still held.
        harness.advance(200.0);
        assert!(harness.pressed());
        assert_eq!(harness.controller.phase(), RipplePhase::WaitingForClick);
    }

    #[test]
    fn second_pointer_is_ignored_while_first_is_tracked() {
        let mut harness = Harness::new();

        harness.send(|c| c.pointer_down(&mouse()));
        let before_phase = harness.controller.phase();
        let pen = PointerSample {
            pointer_id: 2,
            kind: PointerKind::Pen,
            ..mouse()
        };

        harness.send(|c| c.pointer_down(&pen));
        harness.send(|c| c.pointer_cancel(&pen));
        harness.send(|c| c.pointer_leave(&pen));

        assert_eq!(harness.controller.phase(), before_phase);
        assert_eq!(harness.started_count(), 1);
        assert!(harness.pressed());
        assert_eq!(harness.controller.session().origin(), Some(&mouse()));
    }

    #[test]
    fn second_pointer_is_accepted_after_first_session_ends() {
        let mut harness = Harness::new();

        harness.send(|c| c.pointer_down(&mouse()));
        harness.send(|c| c.click());
        let pen = PointerSample {
            pointer_id: 2,
            kind: PointerKind::Pen,
            ..mouse()
        };
        harness.send(|c| c.pointer_down(&pen));

        assert_eq!(harness.started_count(), 2);
        assert_eq!(harness.controller.phase(), RipplePhase::WaitingForClick);
    }

    #[test]
    fn non_primary_pointer_is_ignored() {
        let mut harness = Harness::new();
        let secondary = PointerSample {
            is_primary: false,
            ..mouse()
        };

        harness.send(|c| c.pointer_down(&secondary));

        assert_eq!(harness.controller.phase(), RipplePhase::Inactive);
        assert_eq!(harness.started_count(), 0);
    }

    #[test]
    fn mouse_down_without_primary_button_is_ignored() {
        let mut harness = Harness::new();

        harness.send(|c| c.pointer_down(&mouse().with_buttons(2)));

        assert_eq!(harness.controller.phase(), RipplePhase::Inactive);
        assert!(!harness.pressed());
    }

    #[test]
    fn quick_touch_tap_still_plays_press_from_touch_point() {
        let mut harness = Harness::new();

        harness.send(|c| c.pointer_down(&touch()));
        assert_eq!(harness.controller.phase(), RipplePhase::TouchDelay);
        assert_eq!(harness.started_count(), 0);

        harness.advance(60.0);
        harness.send(|c| c.pointer_up(&touch().with_buttons(0)));

        assert_eq!(harness.controller.phase(), RipplePhase::WaitingForClick);
        assert_eq!(harness.started_count(), 1);
        assert!(harness.pressed());
        let [start, _] = harness.started_keyframes(0);
        assert_eq!(start.translate, Point { x: 70.0, y: 0.0 });

        // The pending hold timer is now stale.
        harness.advance(200.0);
        assert_eq!(harness.started_count(), 1);
        assert_eq!(harness.controller.phase(), RipplePhase::WaitingForClick);

        // Visible for 200ms so far; the release waits out the remaining 25ms.
        harness.send(|c| c.click());
        assert!(harness.pressed());
        harness.advance(25.0);
        assert!(!harness.pressed());
    }

    #[test]
    fn touch_hold_starts_press_after_delay() {
        let mut harness = Harness::new();

        harness.send(|c| c.pointer_down(&touch()));
        harness.advance(149.0);
        assert_eq!(harness.controller.phase(), RipplePhase::TouchDelay);
        assert!(!harness.pressed());

        harness.advance(1.0);
        assert_eq!(harness.controller.phase(), RipplePhase::Holding);
        assert_eq!(harness.started_count(), 1);
        assert!(harness.pressed());

        harness.send(|c| c.pointer_up(&touch().with_buttons(0)));
        assert_eq!(harness.controller.phase(), RipplePhase::WaitingForClick);
        assert_eq!(harness.started_count(), 1);

        harness.advance(250.0);
        harness.send(|c| c.click());
        assert!(!harness.pressed());
    }

    #[test]
    fn stale_touch_delay_from_previous_tap_does_not_start_next_session_early() {
        let mut harness = Harness::new();

        harness.send(|c| c.pointer_down(&touch()));
        harness.advance(20.0);
        harness.send(|c| c.pointer_up(&touch()));
        harness.send(|c| c.click());
        harness.advance(20.0);
        harness.send(|c| c.pointer_down(&touch()));
        assert_eq!(harness.controller.phase(), RipplePhase::TouchDelay);

        // First tap's timer fires at t=150, second tap's at t=190.
        harness.advance(120.0);
        assert_eq!(harness.controller.phase(), RipplePhase::TouchDelay);
        assert_eq!(harness.started_count(), 1);

        harness.advance(30.0);
        assert_eq!(harness.controller.phase(), RipplePhase::Holding);
        assert_eq!(harness.started_count(), 2);
    }

    #[test]
    fn touch_never_hovers() {
        let mut harness = Harness::new();

        harness.send(|c| c.pointer_enter(&touch()));
        assert!(!harness.hovered());

        harness.send(|c| c.pointer_enter(&mouse()));
        assert!(harness.hovered());
        harness.send(|c| c.pointer_leave(&touch()));
        assert!(harness.hovered());
        harness.send(|c| c.pointer_leave(&mouse()));
        assert!(!harness.hovered());
    }

    #[test]
    fn synthetic_click_plays_one_centered_pulse() {
        let mut harness = Harness::new();

        harness.send(|c| c.click());

        assert_eq!(harness.started_count(), 1);
        assert!(harness.pressed());
        assert_eq!(harness.controller.phase(), RipplePhase::Inactive);
        let [start, end] = harness.started_keyframes(0);
        assert_eq!(start.translate, Point { x: 40.0, y: 10.0 });
        assert_eq!(start.translate, end.translate);

        harness.advance(224.0);
        assert!(harness.pressed());
        harness.advance(1.0);
        assert!(!harness.pressed());
        assert_eq!(harness.started_count(), 1);
    }

    #[test]
    fn disabled_controller_ignores_everything() {
        let mut harness = Harness::new();
        harness.controller.set_disabled(true);

        harness.send(|c| c.pointer_enter(&mouse()));
        harness.send(|c| c.pointer_down(&mouse()));
        harness.send(|c| c.pointer_down(&touch()));
        harness.send(|c| c.pointer_up(&touch()));
        harness.send(|c| c.pointer_cancel(&mouse()));
        harness.send(|c| c.click());
        harness.send(|c| c.pointer_leave(&mouse()));
        harness.advance(500.0);

        assert_eq!(harness.controller.status(), RippleStatus::default());
        assert_eq!(harness.started_count(), 0);
    }

    #[test]
    fn disabling_mid_press_clears_flags() {
        let mut harness = Harness::new();
        harness.send(|c| c.pointer_enter(&mouse()));
        harness.send(|c| c.pointer_down(&mouse()));
        assert_eq!(
            harness.controller.status(),
            RippleStatus {
                hovered: true,
                pressed: true
            }
        );

        harness.controller.set_disabled(true);

        assert_eq!(harness.controller.status(), RippleStatus::default());
        assert_eq!(harness.controller.phase(), RipplePhase::Inactive);
        assert!(harness.controller.session().origin().is_none());
    }

    #[test]
    fn leaving_during_press_releases() {
        let mut harness = Harness::new();

        harness.send(|c| c.pointer_enter(&mouse()));
        harness.send(|c| c.pointer_down(&mouse()));
        harness.advance(50.0);
        harness.send(|c| c.pointer_leave(&mouse()));

        assert!(!harness.hovered());
        assert_eq!(harness.controller.phase(), RipplePhase::Inactive);
        assert!(harness.pressed());
        harness.advance(175.0);
        assert!(!harness.pressed());
    }

    #[test]
    fn touch_cancel_during_delay_skips_animation() {
        let mut harness = Harness::new();

        harness.send(|c| c.pointer_down(&touch()));
        harness.advance(40.0);
        harness.send(|c| c.pointer_cancel(&touch()));
        harness.advance(200.0);

        assert_eq!(harness.controller.phase(), RipplePhase::Inactive);
        assert_eq!(harness.started_count(), 0);
        assert!(!harness.pressed());
    }

    #[test]
    fn touch_cancel_while_holding_keeps_minimum_press() {
        let mut harness = Harness::new();

        harness.send(|c| c.pointer_down(&touch()));
        harness.advance(150.0);
        assert_eq!(harness.controller.phase(), RipplePhase::Holding);
        assert_eq!(harness.started_count(), 1);

        harness.advance(100.0);
        harness.send(|c| c.pointer_cancel(&touch()));

        assert_eq!(harness.controller.phase(), RipplePhase::Inactive);
        assert!(harness.pressed());
        harness.advance(124.0);
        assert!(harness.pressed());
        harness.advance(1.0);
        assert!(!harness.pressed());
    }

    #[test]
    fn mouse_cancel_requires_primary_button_and_releases_after_minimum() {
        let mut harness = Harness::new();

        harness.send(|c| c.pointer_down(&mouse()));
        harness.advance(50.0);

        harness.send(|c| c.pointer_cancel(&mouse_released()));
        assert_eq!(harness.controller.phase(), RipplePhase::WaitingForClick);
        assert!(harness.timers.is_empty());

        harness.send(|c| c.pointer_cancel(&mouse()));
        assert_eq!(harness.controller.phase(), RipplePhase::Inactive);
        assert!(harness.pressed());
        harness.advance(174.0);
        assert!(harness.pressed());
        harness.advance(1.0);
        assert!(!harness.pressed());
        assert!(!harness.was_cancelled(0));
    }

    #[test]
    fn press_with_detached_bounds_still_cancels_running_animation() {
        let mut harness = Harness::new();

        harness.send(|c| c.pointer_down(&mouse()));
        harness.advance(50.0);
        harness.send(|c| c.click());
        harness.surface.bounds.set(None);

        harness.send(|c| c.pointer_down(&mouse()));
        assert_eq!(harness.started_count(), 1);
        assert!(harness.was_cancelled(0));
        assert_eq!(harness.controller.session().current_generation(), None);

        harness.send(|c| c.click());
        assert!(!harness.pressed());
    }

    #[test]
    fn press_on_label_decoration_plays_one_ripple_from_pointer() {
        let mut harness = Harness::new();

        harness.send(|c| c.pointer_down(&mouse()));
        harness.advance(80.0);
        harness.send(|c| c.pointer_up(&mouse_released()));
        // The label forwards exactly one activation click to its input.
        harness.send(|c| c.click());
        harness.advance(300.0);

        assert_eq!(harness.started_count(), 1);
        assert!(!harness.was_cancelled(0));
        assert_eq!(harness.started_keyframes(0)[0].translate, Point { x: 20.0, y: 10.0 });
        assert!(!harness.pressed());
    }

    #[test]
    fn missing_surface_skips_ripple_but_advances_state() {
        let mut harness = Harness::detached();

        harness.send(|c| c.pointer_down(&mouse()));
        assert_eq!(harness.controller.phase(), RipplePhase::WaitingForClick);
        assert!(!harness.pressed());

        harness.send(|c| c.click());
        assert_eq!(harness.controller.phase(), RipplePhase::Inactive);
        assert!(harness.timers.is_empty());
    }

    #[test]
    fn detached_bounds_skip_ripple() {
        let mut harness = Harness::with_surface(|surface| surface.bounds.set(None));

        harness.send(|c| c.click());

        assert!(!harness.pressed());
        assert_eq!(harness.started_count(), 0);
    }

    #[test]
    fn refused_animation_is_treated_as_finished() {
        let mut harness = Harness::with_surface(|surface| surface.refuse_animation = true);

        harness.send(|c| c.pointer_down(&mouse()));
        assert!(harness.pressed());
        harness.send(|c| c.click());

        assert!(!harness.pressed());
        assert!(harness.timers.is_empty());
    }

    #[test]
    fn dispose_cancels_animation_and_resets_session() {
        let mut harness = Harness::new();
        harness.send(|c| c.pointer_enter(&mouse()));
        harness.send(|c| c.pointer_down(&mouse()));
        harness.send(|c| c.click());

        harness.controller.dispose();
        harness.advance(300.0);

        assert!(harness.was_cancelled(0));
        assert!(!harness.controller.is_attached());
        assert_eq!(harness.controller.status(), RippleStatus::default());
        assert_eq!(harness.controller.phase(), RipplePhase::Inactive);
    }

    #[test]
    fn press_geometry_is_recorded_on_session() {
        let mut harness = Harness::new();

        harness.send(|c| c.pointer_down(&mouse()));

        let geometry = harness.controller.session().geometry().copied().expect("geometry");
        assert_eq!(geometry.initial_diameter, 20.0);
        assert!((geometry.target_scale - 9.635).abs() < 1e-3);
    }

    #[test]
    fn with_config_rejects_invalid_timings() {
        let config = RippleConfig {
            press_grow_ms: f64::NAN,
            ..RippleConfig::default()
        };

        assert!(RippleController::<FakeSurface>::with_config(config).is_err());
    }

    #[test]
    fn custom_minimum_press_is_honored() {
        let clock = Rc::new(Cell::new(0.0));
        let surface = FakeSurface {
            clock: clock.clone(),
            bounds: Rc::new(Cell::new(Some(SurfaceBounds::sized(40.0, 40.0)))),
            refuse_animation: false,
            started: Rc::new(RefCell::new(Vec::new())),
        };
        let mut controller = RippleController::with_config(RippleConfig {
            minimum_press_ms: 100.0,
            ..RippleConfig::default()
        })
        .expect("config");
        controller.attach(surface);

        controller.pointer_down(&mouse());
        clock.set(30.0);
        let effects = controller.click();

        assert_eq!(
            effects,
            vec![RippleEffect::ScheduleRelease {
                generation: AnimationGeneration(1),
                delay_ms: 70.0,
            }]
        );
    }
}
