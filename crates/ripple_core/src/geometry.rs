//! Ripple sizing and translation math.

use serde::{Deserialize, Serialize};

use crate::{config::RippleConfig, pointer::PointerSample};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Surface layout box in document coordinates (viewport rect plus page scroll).
pub struct SurfaceBounds {
    /// Document-relative left edge.
    pub left: f64,
    /// Document-relative top edge.
    pub top: f64,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
}

impl SurfaceBounds {
    /// Creates a box anchored at the document origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// Surface center in surface-local coordinates.
    pub fn local_center(&self) -> Point {
        Point {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }

    /// Converts a document-relative pointer position into surface-local coordinates.
    pub fn local_point(&self, sample: &PointerSample) -> Point {
        Point {
            x: sample.page_x - self.left,
            y: sample.page_y - self.top,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Surface-local 2D point in CSS pixels.
pub struct Point {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Sizes derived from the surface box at press start.
pub struct RippleGeometry {
    /// Larger of width and height.
    pub max_dimension: f64,
    /// Halo margin so the ripple edge fades instead of clipping.
    pub soft_edge: f64,
    /// Diameter of the ripple at the start of the grow animation.
    pub initial_diameter: f64,
    /// Surface diagonal.
    pub hypotenuse: f64,
    /// Diagonal plus fixed padding.
    pub max_radius: f64,
    /// Scale factor applied to `initial_diameter` at the end of the grow animation.
    pub target_scale: f64,
}

impl RippleGeometry {
    /// Computes ripple sizes for a `width` x `height` surface.
    pub fn measure(width: f64, height: f64, config: &RippleConfig) -> Self {
        let max_dimension = width.max(height);
        let soft_edge = (config.soft_edge_container_ratio * max_dimension)
            .max(config.soft_edge_minimum_size);
        let initial_diameter = (max_dimension * config.initial_origin_scale).floor();
        let hypotenuse = (width * width + height * height).sqrt();
        let max_radius = hypotenuse + config.padding;
        // Surfaces under 5px floor to a zero diameter; keep the scale finite.
        let target_scale = (max_radius + soft_edge) / initial_diameter.max(1.0);

        Self {
            max_dimension,
            soft_edge,
            initial_diameter,
            hypotenuse,
            max_radius,
            target_scale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// One frame of the press-grow animation.
pub struct RippleKeyframe {
    /// Ripple width and height in pixels.
    pub size: f64,
    /// Top-left translation of the ripple box.
    pub translate: Point,
    /// Uniform scale applied after translation.
    pub scale: f64,
}

impl RippleKeyframe {
    /// CSS `width`/`height` value.
    pub fn size_css(&self) -> String {
        format!("{}px", self.size)
    }

    /// CSS `transform` value.
    pub fn transform_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

/// Builds the start and end keyframes of a press-grow animation.
///
/// The ripple starts under the pointer, or at the surface center when there is no pointer (a
/// keyboard or assistive-technology click), and ends centered in the surface at full scale.
pub fn press_keyframes(
    bounds: &SurfaceBounds,
    geometry: &RippleGeometry,
    origin: Option<&PointerSample>,
) -> [RippleKeyframe; 2] {
    let half = geometry.initial_diameter / 2.0;
    let anchor = origin
        .map(|sample| bounds.local_point(sample))
        .unwrap_or_else(|| bounds.local_center());

    let start = RippleKeyframe {
        size: geometry.initial_diameter,
        translate: Point {
            x: anchor.x - half,
            y: anchor.y - half,
        },
        scale: 1.0,
    };
    let end = RippleKeyframe {
        size: geometry.initial_diameter,
        translate: Point {
            x: (bounds.width - geometry.initial_diameter) / 2.0,
            y: (bounds.height - geometry.initial_diameter) / 2.0,
        },
        scale: geometry.target_scale,
    };
    [start, end]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn measure_matches_reference_button() {
        let geometry = RippleGeometry::measure(100.0, 40.0, &RippleConfig::default());

        assert_eq!(geometry.max_dimension, 100.0);
        assert_eq!(geometry.initial_diameter, 20.0);
        assert_eq!(geometry.soft_edge, 75.0);
        assert_close(geometry.hypotenuse, 11600f64.sqrt());
        assert_close(geometry.max_radius, 11600f64.sqrt() + 10.0);
        assert_close(geometry.target_scale, (11600f64.sqrt() + 10.0 + 75.0) / 20.0);
        assert_close(geometry.target_scale, 9.635);
    }

    #[test]
    fn large_surfaces_use_ratio_soft_edge() {
        let geometry = RippleGeometry::measure(400.0, 300.0, &RippleConfig::default());

        assert_eq!(geometry.initial_diameter, 80.0);
        assert_close(geometry.soft_edge, 140.0);
        assert_eq!(geometry.hypotenuse, 500.0);
        assert_close(geometry.target_scale, (510.0 + 140.0) / 80.0);
    }

    #[test]
    fn initial_diameter_is_floored() {
        let geometry = RippleGeometry::measure(48.0, 48.0, &RippleConfig::default());

        assert_eq!(geometry.initial_diameter, 9.0);
    }

    #[test]
    fn tiny_surface_keeps_finite_scale() {
        let geometry = RippleGeometry::measure(3.0, 2.0, &RippleConfig::default());

        assert_eq!(geometry.initial_diameter, 0.0);
        assert!(geometry.target_scale.is_finite());
    }

    #[test]
    fn keyframes_start_under_pointer_and_end_centered() {
        let bounds = SurfaceBounds {
            left: 10.0,
            top: 220.0,
            width: 100.0,
            height: 40.0,
        };
        let geometry = RippleGeometry::measure(bounds.width, bounds.height, &RippleConfig::default());
        let pointer = PointerSample::mouse(1, 70.0, 250.0);

        let [start, end] = press_keyframes(&bounds, &geometry, Some(&pointer));

        assert_eq!(start.translate, Point { x: 50.0, y: 20.0 });
        assert_eq!(start.scale, 1.0);
        assert_eq!(end.translate, Point { x: 40.0, y: 10.0 });
        assert_eq!(end.scale, geometry.target_scale);
        assert_eq!(start.size_css(), "20px");
    }

    #[test]
    fn keyframes_without_pointer_start_at_center() {
        let bounds = SurfaceBounds::sized(100.0, 40.0);
        let geometry = RippleGeometry::measure(100.0, 40.0, &RippleConfig::default());

        let [start, end] = press_keyframes(&bounds, &geometry, None);

        assert_eq!(start.translate, Point { x: 40.0, y: 10.0 });
        assert_eq!(start.translate, end.translate);
    }

    #[test]
    fn transform_css_formats_translate_then_scale() {
        let frame = RippleKeyframe {
            size: 20.0,
            translate: Point { x: 4.5, y: -2.0 },
            scale: 1.0,
        };

        assert_eq!(frame.transform_css(), "translate(4.5px, -2px) scale(1)");
    }
}
