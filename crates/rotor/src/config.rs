use crate::order::DisplayOrder;
use serde::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, serde_as};
use std::f64::consts::TAU;
use std::time::Duration;

pub const DEFAULT_RADIUS: f64 = 350.0;
pub const DEFAULT_ITEM_SPACING: f64 = TAU / 18.0;
pub const DEFAULT_BOUNDARY_DAMPING: f64 = 0.3;
pub const DEFAULT_BOUNDARY_TOLERANCE: f64 = 0.5;
pub const DEFAULT_DRAG_TO_RADIANS: f64 = -0.005;
pub const DEFAULT_SETTLE_DURATION: Duration = Duration::from_millis(350);
pub const DEFAULT_MOUNT_DELAY: Duration = Duration::from_millis(60);

/// Tuning of a single wheel instance. Fixed for the lifetime of the wheel.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub radius: f64,
    pub item_spacing: f64,
    pub boundary_damping: f64,
    /// How close to an end (in item spacings) counts as being at that end.
    pub boundary_tolerance: f64,
    /// Radians per pixel of vertical drag. Negative: dragging down rotates backwards.
    pub drag_to_radians: f64,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub settle_duration: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub mount_delay: Duration,
    pub display_order: DisplayOrder,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            item_spacing: DEFAULT_ITEM_SPACING,
            boundary_damping: DEFAULT_BOUNDARY_DAMPING,
            boundary_tolerance: DEFAULT_BOUNDARY_TOLERANCE,
            drag_to_radians: DEFAULT_DRAG_TO_RADIANS,
            settle_duration: DEFAULT_SETTLE_DURATION,
            mount_delay: DEFAULT_MOUNT_DELAY,
            display_order: DisplayOrder::default(),
        }
    }
}

impl WheelConfig {
    /// Half-window around an end of the list, in radians.
    pub fn boundary_window(&self) -> f64 {
        self.item_spacing * self.boundary_tolerance
    }

    pub fn settled_angle(&self, display_index: usize) -> f64 {
        crate::angle::CENTER - display_index as f64 * self.item_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{ "radius": 200.0, "settle_duration": 500, "display_order": "Reversed" }"#;
        let config: WheelConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.radius, 200.0);
        assert_eq!(config.settle_duration, Duration::from_millis(500));
        assert_eq!(config.display_order, DisplayOrder::Reversed);
        assert_eq!(config.item_spacing, DEFAULT_ITEM_SPACING);
        assert_eq!(config.boundary_damping, 0.3);
        assert_eq!(config.drag_to_radians, -0.005);
        assert_eq!(config.mount_delay, DEFAULT_MOUNT_DELAY);
    }

    #[test]
    fn test_settled_angles() {
        let config = WheelConfig::default();
        assert_eq!(config.settled_angle(0), std::f64::consts::PI);
        let third = config.settled_angle(3);
        assert!((third - (std::f64::consts::PI - 3.0 * TAU / 18.0)).abs() < 1e-12);
        assert!((config.boundary_window() - TAU / 36.0).abs() < 1e-12);
    }
}
