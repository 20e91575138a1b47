use rotor::WheelConfig;
use rotor::layout::Point;

pub mod view;

pub use view::draw;

/// How far right of the drawing area the wheel's center sits.
pub const CENTER_OVERHANG: f64 = 100.0;
pub const FONT_FAMILY: &str = "Sans";
pub const STRIKE_WIDTH: f64 = 2.0;
pub const DEFAULT_WIDTH: i32 = 420;
pub const DEFAULT_HEIGHT: i32 = 820;

pub fn wheel_center(width: f64, height: f64) -> Point {
    Point::new(width + CENTER_OVERHANG, height / 2.0)
}

/// Height of the band the centered item occupies on screen.
pub fn row_height(config: &WheelConfig) -> f64 {
    2.0 * config.radius * (config.item_spacing / 2.0).sin()
}

/// Whether `point` falls inside the centered row.
pub fn hits_center_row(point: Point, height: f64, config: &WheelConfig) -> bool {
    (point.y - height / 2.0).abs() < row_height(config) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_row_band() {
        let config = WheelConfig::default();
        assert!(hits_center_row(Point::new(40.0, 400.0), 800.0, &config));
        assert!(hits_center_row(Point::new(40.0, 440.0), 800.0, &config));
        assert!(!hits_center_row(Point::new(40.0, 470.0), 800.0, &config));
    }
}
