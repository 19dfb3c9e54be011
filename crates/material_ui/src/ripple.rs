//! Leptos binding for [`ripple_core::RippleController`].
//!
//! Each interactive widget calls [`use_ripple`] once, forwards the six [`RippleHandlers`] to the
//! element that receives input, and renders a [`Ripple`] bound to [`RippleState::surface`]. The
//! controller lives in a [`StoredValue`] owned by the widget, so timers that fire after the widget
//! unmounts find nothing to update.

use std::time::Duration;

use leptos::ev::{MouseEvent, PointerEvent};
use leptos::*;
use ripple_core::{
    PointerKind, PointerSample, RippleConfig, RippleController, RippleEffect, RippleStatus,
};

use crate::dom::DomSurface;

#[derive(Clone, Copy)]
/// Event callbacks a widget must attach verbatim to its input element.
pub struct RippleHandlers {
    /// `pointerenter` handler.
    pub on_pointerenter: Callback<PointerEvent>,
    /// `pointerleave` handler.
    pub on_pointerleave: Callback<PointerEvent>,
    /// `pointerdown` handler.
    pub on_pointerdown: Callback<PointerEvent>,
    /// `pointerup` handler.
    pub on_pointerup: Callback<PointerEvent>,
    /// `pointercancel` handler.
    pub on_pointercancel: Callback<PointerEvent>,
    /// `click` handler.
    pub on_click: Callback<MouseEvent>,
}

#[derive(Clone, Copy)]
/// Reactive ripple outputs returned by [`use_ripple`].
pub struct RippleState {
    /// A non-touch pointer is over the control.
    pub hovered: Signal<bool>,
    /// The press ink is visible.
    pub pressed: Signal<bool>,
    /// Input handlers to forward.
    pub handlers: RippleHandlers,
    /// Node that receives ripple geometry.
    pub surface: NodeRef<html::Span>,
}

#[derive(Clone, Copy)]
struct RippleRuntime {
    controller: StoredValue<RippleController<DomSurface>>,
    status: RwSignal<RippleStatus>,
}

impl RippleRuntime {
    fn dispatch(
        self,
        step: impl FnOnce(&mut RippleController<DomSurface>) -> Vec<RippleEffect>,
    ) {
        let Some((effects, status)) = self.controller.try_update_value(|controller| {
            let effects = step(controller);
            (effects, controller.status())
        }) else {
            return;
        };

        if self.status.try_get_untracked() != Some(status) {
            self.status.try_set(status);
        }
        for effect in effects {
            self.schedule(effect);
        }
    }

    fn schedule(self, effect: RippleEffect) {
        let delay = Duration::from_secs_f64(effect.delay_ms().max(0.0) / 1000.0);
        set_timeout(
            move || match effect {
                RippleEffect::ScheduleTouchDelay { token, .. } => {
                    self.dispatch(|controller| controller.touch_delay_elapsed(token));
                }
                RippleEffect::ScheduleRelease { generation, .. } => {
                    self.dispatch(|controller| controller.release_elapsed(generation));
                }
            },
            delay,
        );
    }
}

/// Converts a DOM pointer event into the controller's platform-neutral sample.
pub fn pointer_sample(ev: &PointerEvent) -> PointerSample {
    PointerSample {
        pointer_id: ev.pointer_id(),
        kind: PointerKind::from_dom(&ev.pointer_type()),
        is_primary: ev.is_primary(),
        buttons: ev.buttons(),
        page_x: page_coordinate(ev, "pageX", ev.page_x()),
        page_y: page_coordinate(ev, "pageY", ev.page_y()),
    }
}

/// `MouseEvent.pageX/pageY` bindings truncate to whole pixels; pointer events carry fractions.
fn page_coordinate(ev: &PointerEvent, key: &str, truncated: i32) -> f64 {
    #[cfg(target_arch = "wasm32")]
    let precise = js_sys::Reflect::get(ev, &wasm_bindgen::JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_f64());
    #[cfg(not(target_arch = "wasm32"))]
    let precise = {
        let _ = (ev, key);
        None
    };
    precise_or_truncated(precise, truncated)
}

fn precise_or_truncated(precise: Option<f64>, truncated: i32) -> f64 {
    precise
        .filter(|value| value.is_finite())
        .unwrap_or_else(|| f64::from(truncated))
}

/// Creates a ripple controller with Material 3 default timings.
pub fn use_ripple(disabled: MaybeSignal<bool>) -> RippleState {
    use_ripple_with_config(disabled, RippleConfig::default())
}

/// Creates a ripple controller with custom timings.
///
/// An invalid config is logged and replaced by the defaults.
pub fn use_ripple_with_config(disabled: MaybeSignal<bool>, config: RippleConfig) -> RippleState {
    let controller = RippleController::with_config(config).unwrap_or_else(|err| {
        logging::warn!("{err}; falling back to default ripple timings");
        RippleController::new()
    });
    let runtime = RippleRuntime {
        controller: store_value(controller),
        status: create_rw_signal(RippleStatus::default()),
    };

    let surface = create_node_ref::<html::Span>();
    surface.on_load(move |element| {
        let element: web_sys::HtmlElement = (*element).clone().into();
        runtime.dispatch(move |controller| {
            controller.attach(DomSurface::new(element));
            Vec::new()
        });
    });
    on_cleanup(move || {
        runtime.controller.try_update_value(|controller| controller.dispose());
    });

    create_effect(move |_| {
        let disabled = disabled.get();
        runtime.dispatch(move |controller| {
            controller.set_disabled(disabled);
            Vec::new()
        });
    });

    let status = runtime.status;
    let handlers = RippleHandlers {
        on_pointerenter: Callback::new(move |ev: PointerEvent| {
            let sample = pointer_sample(&ev);
            runtime.dispatch(|controller| controller.pointer_enter(&sample));
        }),
        on_pointerleave: Callback::new(move |ev: PointerEvent| {
            let sample = pointer_sample(&ev);
            runtime.dispatch(|controller| controller.pointer_leave(&sample));
        }),
        on_pointerdown: Callback::new(move |ev: PointerEvent| {
            let sample = pointer_sample(&ev);
            runtime.dispatch(|controller| controller.pointer_down(&sample));
        }),
        on_pointerup: Callback::new(move |ev: PointerEvent| {
            let sample = pointer_sample(&ev);
            runtime.dispatch(|controller| controller.pointer_up(&sample));
        }),
        on_pointercancel: Callback::new(move |ev: PointerEvent| {
            let sample = pointer_sample(&ev);
            runtime.dispatch(|controller| controller.pointer_cancel(&sample));
        }),
        on_click: Callback::new(move |_: MouseEvent| {
            runtime.dispatch(|controller| controller.click());
        }),
    };

    RippleState {
        hovered: create_memo(move |_| status.get().hovered).into(),
        pressed: create_memo(move |_| status.get().pressed).into(),
        handlers,
        surface,
    }
}

#[component]
/// Hover state layer and press ink for one interactive control.
///
/// Place it as the first child of a positioned control; it fills the control and never
/// receives input itself.
pub fn Ripple(
    /// Ripple returned by [`use_ripple`].
    state: RippleState,
) -> impl IntoView {
    let surface = state.surface;
    view! {
        <span
            class="ui-ripple"
            aria-hidden="true"
            node_ref=surface
            data-ui-primitive="true"
            data-ui-kind="ripple"
            data-ui-hovered=move || crate::components::bool_token(state.hovered.get())
            data-ui-pressed=move || crate::components::bool_token(state.pressed.get())
        >
            <span class="ui-state-layer" data-ui-slot="state-layer"></span>
            <span class="ui-ripple-ink" data-ui-slot="ink"></span>
        </span>
    }
}
