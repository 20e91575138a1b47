use crate::angle::CENTER;
use crate::config::WheelConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryClamp {
    first: f64,
    last: f64,
    window: f64,
}

impl BoundaryClamp {
    /// `None` for an empty list, which has no ends.
    pub fn new(count: usize, config: &WheelConfig) -> Option<Self> {
        (count > 0).then(|| Self {
            first: CENTER,
            last: config.settled_angle(count - 1),
            window: config.boundary_window(),
        })
    }

    pub fn first_angle(&self) -> f64 {
        self.first
    }

    pub fn last_angle(&self) -> f64 {
        self.last
    }

    pub fn is_at_top(&self, angle: f64) -> bool {
        angle > self.first - self.window
    }

    pub fn is_at_bottom(&self, angle: f64) -> bool {
        angle < self.last + self.window
    }

    pub fn is_at_either(&self, angle: f64) -> bool {
        self.is_at_top(angle) || self.is_at_bottom(angle)
    }

    /// The end `angle` is near, preferring the first item when both apply.
    pub fn boundary_at(&self, angle: f64) -> Option<Boundary> {
        if self.is_at_top(angle) {
            Some(Boundary::Top)
        } else if self.is_at_bottom(angle) {
            Some(Boundary::Bottom)
        } else {
            None
        }
    }

    pub fn nearest(&self, angle: f64) -> Boundary {
        if (angle - self.first).abs() <= (angle - self.last).abs() {
            Boundary::Top
        } else {
            Boundary::Bottom
        }
    }

    pub fn angle_of(&self, boundary: Boundary) -> f64 {
        match boundary {
            Boundary::Top => self.first,
            Boundary::Bottom => self.last,
        }
    }

    pub fn clamp(&self, angle: f64) -> f64 {
        angle.clamp(self.last, self.first)
    }
}
