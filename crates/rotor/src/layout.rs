use crate::angle::{self, FontWeight};
use crate::config::WheelConfig;
use crate::snap;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout {
    pub display_index: usize,
    pub storage_index: usize,
    pub angle: f64,
    pub offset: Point,
    /// Text rotation so labels read along the rim.
    pub text_rotation: f64,
    pub opacity: f64,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub active: bool,
}

impl ItemLayout {
    fn at(display_index: usize, storage_index: usize, item_angle: f64, config: &WheelConfig) -> Self {
        Self {
            display_index,
            storage_index,
            angle: item_angle,
            offset: Point::new(
                item_angle.cos() * config.radius,
                item_angle.sin() * config.radius,
            ),
            text_rotation: item_angle + PI,
            opacity: angle::opacity(item_angle),
            font_size: angle::font_size(item_angle, config.item_spacing),
            font_weight: angle::font_weight(item_angle, config.item_spacing),
            active: snap::is_centered(item_angle, config.item_spacing),
        }
    }
}

/// Visible items for `rotation`, in display order. Items on the back of the
/// wheel or a full lap away from the center are culled.
pub fn layout(rotation: f64, count: usize, config: &WheelConfig) -> Vec<ItemLayout> {
    (0..count)
        .filter_map(|display_index| {
            let item_angle = snap::item_angle(display_index, rotation, config.item_spacing);
            let on_this_lap = snap::unwrapped_offset(item_angle).abs() < PI;
            if !(on_this_lap && angle::is_visible(item_angle)) {
                return None;
            }
            let storage_index = config.display_order.to_storage(display_index, count)?;
            Some(ItemLayout::at(display_index, storage_index, item_angle, config))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::CENTER;

    #[test]
    fn test_centered_item_is_full_size() {
        let config = WheelConfig::default();
        let items = layout(config.settled_angle(2), 10, &config);
        let active: Vec<&ItemLayout> = items.iter().filter(|l| l.active).collect();

        assert_eq!(active.len(), 1);
        let center = active[0];
        assert_eq!(center.display_index, 2);
        assert!((center.font_size - 36.0).abs() < 1e-9);
        assert!((center.opacity - 1.0).abs() < 1e-9);
        assert_eq!(center.font_weight, FontWeight::Bold);
        assert!((center.offset.x + config.radius).abs() < 1e-9);
        assert!(center.offset.y.abs() < 1e-9);
    }

    #[test]
    fn test_back_of_wheel_is_culled() {
        let config = WheelConfig::default();
        let items = layout(CENTER, 18, &config);
        // 3π/4 either side of center, 20° apart: six items above, none below index 0
        let indices: Vec<usize> = items.iter().map(|l| l.display_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_long_lists_do_not_overlap_across_laps() {
        let config = WheelConfig::default();
        let items = layout(config.settled_angle(20), 40, &config);
        let active: Vec<usize> = items
            .iter()
            .filter(|l| l.active)
            .map(|l| l.display_index)
            .collect();
        assert_eq!(active, vec![20]);
        assert!(items.iter().all(|l| (14..=26).contains(&l.display_index)));
    }

    #[test]
    fn test_empty_layout() {
        assert!(layout(CENTER, 0, &WheelConfig::default()).is_empty());
    }
}
