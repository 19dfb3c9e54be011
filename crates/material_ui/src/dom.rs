//! `web-sys` implementation of the ripple rendering seam.

#[cfg(target_arch = "wasm32")]
use leptos::logging;
use ripple_core::{RippleAnimation, RippleError, RippleKeyframe, RippleSurface, SurfaceBounds};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const INK_SELECTOR: &str = "[data-ui-slot='ink']";

#[derive(Debug, Clone)]
/// Ripple surface backed by a mounted element.
///
/// The surface element is measured; the nested ink element (when present) receives the
/// animation so the measured box never changes size mid-press.
pub struct DomSurface {
    surface: web_sys::HtmlElement,
    ink: web_sys::Element,
}

impl DomSurface {
    /// Wraps a mounted surface element and resolves its ink child.
    pub fn new(surface: web_sys::HtmlElement) -> Self {
        let ink = surface
            .query_selector(INK_SELECTOR)
            .ok()
            .flatten()
            .unwrap_or_else(|| surface.clone().into());
        Self { surface, ink }
    }
}

impl RippleSurface for DomSurface {
    type Animation = DomAnimation;

    fn bounds(&self) -> Result<SurfaceBounds, RippleError> {
        #[cfg(target_arch = "wasm32")]
        {
            if !self.surface.is_connected() {
                return Err(RippleError::SurfaceDetached);
            }
            let rect = self.surface.get_bounding_client_rect();
            let (scroll_x, scroll_y) = page_scroll();
            Ok(SurfaceBounds {
                left: rect.left() + scroll_x,
                top: rect.top() + scroll_y,
                width: rect.width(),
                height: rect.height(),
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = &self.surface;
            Ok(SurfaceBounds::default())
        }
    }

    fn start_animation(
        &self,
        keyframes: &[RippleKeyframe; 2],
        duration_ms: f64,
        easing: &str,
    ) -> Result<DomAnimation, RippleError> {
        #[cfg(target_arch = "wasm32")]
        {
            let frames = js_sys::Array::new();
            for frame in keyframes {
                frames.push(&keyframe_object(frame).map_err(animation_error)?);
            }
            let frames: js_sys::Object = frames.into();

            let options = web_sys::KeyframeAnimationOptions::new();
            options.set_duration(&JsValue::from_f64(duration_ms));
            options.set_easing(easing);
            options.set_fill(web_sys::FillMode::Forwards);

            self.ink
                .animate_with_keyframe_animation_options(Some(&frames), &options)
                .map(DomAnimation)
                .map_err(animation_error)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (keyframes, duration_ms, easing, &self.ink);
            Err(RippleError::AnimationUnavailable(
                "element animations require a browser".to_string(),
            ))
        }
    }
}

#[derive(Debug, Clone)]
/// Running `Element.animate` handle.
pub struct DomAnimation(web_sys::Animation);

impl RippleAnimation for DomAnimation {
    fn cancel(&self) {
        self.0.cancel();
    }

    fn elapsed_ms(&self) -> Option<f64> {
        // A freshly started animation is pending until the next frame and may not report a
        // current time yet; it has not been visible at all.
        if self.0.pending() {
            return Some(self.0.current_time().unwrap_or(0.0));
        }
        self.0.current_time()
    }
}

/// Builds one `Element.animate` keyframe object.
#[cfg(target_arch = "wasm32")]
fn keyframe_object(frame: &RippleKeyframe) -> Result<js_sys::Object, JsValue> {
    let object = js_sys::Object::new();
    let size = frame.size_css();
    let properties = [
        ("top", "0px".to_string()),
        ("left", "0px".to_string()),
        ("height", size.clone()),
        ("width", size),
        ("transform", frame.transform_css()),
    ];
    for (property, value) in properties {
        js_sys::Reflect::set(
            &object,
            &JsValue::from_str(property),
            &JsValue::from_str(&value),
        )?;
    }
    Ok(object)
}

#[cfg(target_arch = "wasm32")]
fn animation_error(err: JsValue) -> RippleError {
    let message = err
        .as_string()
        .unwrap_or_else(|| format!("{err:?}"));
    logging::debug_warn!("ripple animation failed to start: {message}");
    RippleError::AnimationUnavailable(message)
}

#[cfg(target_arch = "wasm32")]
fn page_scroll() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    (
        window.scroll_x().unwrap_or(0.0),
        window.scroll_y().unwrap_or(0.0),
    )
}
