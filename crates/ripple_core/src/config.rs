//! Material 3 ripple timing and sizing tokens.

use serde::{Deserialize, Serialize};

use crate::RippleError;

/// Delay before a touch press is treated as a hold rather than a scroll start.
pub const TOUCH_DELAY_MS: f64 = 150.0;
/// Minimum time a press ripple stays visible once started.
pub const MINIMUM_PRESS_MS: f64 = 225.0;
/// Duration of the press-grow animation.
pub const PRESS_GROW_MS: f64 = 450.0;
/// Emphasized easing curve used by the press-grow animation.
pub const EASING_EMPHASIZED: &str = "cubic-bezier(0.2, 0, 0, 1)";
/// Initial ripple diameter as a fraction of the surface's larger side.
pub const INITIAL_ORIGIN_SCALE: f64 = 0.2;
/// Extra radius past the surface diagonal.
pub const PADDING: f64 = 10.0;
/// Smallest soft-edge halo, in pixels.
pub const SOFT_EDGE_MINIMUM_SIZE: f64 = 75.0;
/// Soft-edge halo as a fraction of the surface's larger side.
pub const SOFT_EDGE_CONTAINER_RATIO: f64 = 0.35;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Tunable ripple timings and sizing ratios.
///
/// Missing fields deserialize to the Material 3 defaults, so a partial override such as
/// `{"touch_delay_ms": 100}` is valid.
pub struct RippleConfig {
    /// Touch hold disambiguation delay in milliseconds.
    pub touch_delay_ms: f64,
    /// Minimum visible press duration in milliseconds.
    pub minimum_press_ms: f64,
    /// Press-grow animation duration in milliseconds.
    pub press_grow_ms: f64,
    /// CSS easing function for the press-grow animation.
    pub easing: String,
    /// Initial diameter ratio relative to the larger surface side.
    pub initial_origin_scale: f64,
    /// Fixed padding added to the surface diagonal.
    pub padding: f64,
    /// Minimum soft-edge size in pixels.
    pub soft_edge_minimum_size: f64,
    /// Soft-edge ratio relative to the larger surface side.
    pub soft_edge_container_ratio: f64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            touch_delay_ms: TOUCH_DELAY_MS,
            minimum_press_ms: MINIMUM_PRESS_MS,
            press_grow_ms: PRESS_GROW_MS,
            easing: EASING_EMPHASIZED.to_string(),
            initial_origin_scale: INITIAL_ORIGIN_SCALE,
            padding: PADDING,
            soft_edge_minimum_size: SOFT_EDGE_MINIMUM_SIZE,
            soft_edge_container_ratio: SOFT_EDGE_CONTAINER_RATIO,
        }
    }
}

impl RippleConfig {
    /// Checks every field for values the controller cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`RippleError::InvalidConfig`] naming the first rejected field.
    pub fn validate(&self) -> Result<(), RippleError> {
        non_negative("touch_delay_ms", self.touch_delay_ms)?;
        non_negative("minimum_press_ms", self.minimum_press_ms)?;
        non_negative("press_grow_ms", self.press_grow_ms)?;
        non_negative("padding", self.padding)?;
        non_negative("soft_edge_minimum_size", self.soft_edge_minimum_size)?;
        non_negative("soft_edge_container_ratio", self.soft_edge_container_ratio)?;

        if !self.initial_origin_scale.is_finite() || self.initial_origin_scale <= 0.0 {
            return Err(RippleError::InvalidConfig {
                field: "initial_origin_scale",
                reason: format!("expected a positive ratio, got {}", self.initial_origin_scale),
            });
        }
        if self.easing.trim().is_empty() {
            return Err(RippleError::InvalidConfig {
                field: "easing",
                reason: "easing must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), RippleError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RippleError::InvalidConfig {
            field,
            reason: format!("expected a finite non-negative value, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_carry_material_tokens() {
        let config = RippleConfig::default();

        assert_eq!(config.touch_delay_ms, 150.0);
        assert_eq!(config.minimum_press_ms, 225.0);
        assert_eq!(config.press_grow_ms, 450.0);
        assert_eq!(config.easing, "cubic-bezier(0.2, 0, 0, 1)");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_override_keeps_remaining_defaults() {
        let config: RippleConfig =
            serde_json::from_str(r#"{"touch_delay_ms": 90, "padding": 4}"#).expect("config");

        assert_eq!(config.touch_delay_ms, 90.0);
        assert_eq!(config.padding, 4.0);
        assert_eq!(config.minimum_press_ms, MINIMUM_PRESS_MS);
        assert_eq!(config.easing, EASING_EMPHASIZED);
    }

    #[test]
    fn validate_rejects_negative_duration_and_zero_scale() {
        let negative = RippleConfig {
            minimum_press_ms: -1.0,
            ..RippleConfig::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(RippleError::InvalidConfig {
                field: "minimum_press_ms",
                ..
            })
        ));

        let zero_scale = RippleConfig {
            initial_origin_scale: 0.0,
            ..RippleConfig::default()
        };
        assert!(matches!(
            zero_scale.validate(),
            Err(RippleError::InvalidConfig {
                field: "initial_origin_scale",
                ..
            })
        ));

        let blank_easing = RippleConfig {
            easing: "  ".to_string(),
            ..RippleConfig::default()
        };
        assert!(blank_easing.validate().is_err());
    }
}
