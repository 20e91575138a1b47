use std::time::{Duration, Instant};

/// Time-driven interpolation of the rotation angle toward a settle target.
///
/// `item_count` is the list length the target was computed against; a tween
/// whose count no longer matches the list is stale and must not be committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub started: Instant,
    pub duration: Duration,
    pub item_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Running(f64),
    Finished(f64),
}

impl Tween {
    pub fn new(from: f64, to: f64, started: Instant, duration: Duration, item_count: usize) -> Self {
        Self {
            from,
            to,
            started,
            duration,
            item_count,
        }
    }

    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Angle at `now`. The final sample lands exactly on `to`.
    pub fn sample(&self, now: Instant) -> Sample {
        let t = self.progress(now);
        if t >= 1.0 {
            Sample::Finished(self.to)
        } else {
            Sample::Running(self.from + (self.to - self.from) * ease_out_cubic(t))
        }
    }

    pub fn is_stale(&self, item_count: usize) -> bool {
        self.item_count != item_count
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
