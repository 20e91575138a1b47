use crate::angle::CENTER;

/// Mutable rotation model of one wheel.
///
/// `angle` is unbounded and never normalized; `last_committed_angle` is the
/// angle of the last completed settle (snap or boundary bounce) and is the
/// reference used to hold the visual position steady when items are appended.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub angle: f64,
    pub last_committed_angle: f64,
    pub is_at_boundary: bool,
    pub last_known_item_count: usize,
}

impl RotationState {
    pub fn new(item_count: usize) -> Self {
        Self {
            last_known_item_count: item_count,
            ..Self::default()
        }
    }

    /// Centers the first item without animating.
    pub fn centered(self) -> Self {
        Self {
            angle: CENTER,
            last_committed_angle: CENTER,
            is_at_boundary: false,
            ..self
        }
    }

    pub fn rotated_by(self, delta: f64) -> Self {
        Self {
            angle: self.angle + delta,
            ..self
        }
    }

    pub fn committed(self) -> Self {
        Self {
            last_committed_angle: self.angle,
            is_at_boundary: false,
            ..self
        }
    }
}
