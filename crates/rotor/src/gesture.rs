//! Drag gesture state machine.
//!
//! `Idle -> Dragging` on the first drag sample, `Dragging -> Settling` on
//! release, `Settling -> Idle` when the settle tween completes. A drag sample
//! arriving while settling preempts the tween and keeps the interpolated angle.

use crate::boundary::BoundaryClamp;
use crate::config::WheelConfig;
use crate::rotation::RotationState;
use crate::snap;
use crate::tween::{Sample, Tween};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dragging {
        previous_offset: f64,
    },
    Settling(Tween),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Idle,
    Dragging,
    Animating,
    /// The settle finished on this frame and the angle was committed.
    Committed,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureController {
    phase: Phase,
}

/// Applies one drag delta (in pixels) to `state`, damped near either end of the list.
pub fn apply_drag(
    state: RotationState,
    delta: f64,
    count: usize,
    config: &WheelConfig,
) -> RotationState {
    let rotation = delta * config.drag_to_radians;
    let prospective = state.angle + rotation;
    let at_boundary = BoundaryClamp::new(count, config)
        .is_some_and(|clamp| clamp.is_at_either(prospective));
    let applied = if at_boundary {
        rotation * config.boundary_damping
    } else {
        rotation
    };

    RotationState {
        is_at_boundary: at_boundary,
        ..state.rotated_by(applied)
    }
}

/// Where a released wheel comes to rest; `None` for an empty list.
pub fn release_target(state: &RotationState, count: usize, config: &WheelConfig) -> Option<f64> {
    let clamp = BoundaryClamp::new(count, config)?;
    if state.is_at_boundary {
        let boundary = clamp
            .boundary_at(state.angle)
            .unwrap_or_else(|| clamp.nearest(state.angle));
        return Some(clamp.angle_of(boundary));
    }
    // the list may have shrunk under the drag, leaving the angle past its end
    snap::resolve(clamp.clamp(state.angle), count, config.item_spacing).map(|snap| snap.angle)
}

impl GestureController {
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.phase, Phase::Settling(_))
    }

    pub fn settle_target(&self) -> Option<f64> {
        match self.phase {
            Phase::Settling(tween) => Some(tween.to),
            _ => None,
        }
    }

    /// Feeds one drag sample. `offset` is the vertical translation since the gesture began.
    pub fn drag(
        &mut self,
        state: RotationState,
        offset: f64,
        count: usize,
        config: &WheelConfig,
    ) -> RotationState {
        let previous_offset = match self.phase {
            Phase::Dragging { previous_offset } => previous_offset,
            Phase::Settling(tween) => {
                log::debug!(
                    "drag preempted settle toward {:.4} at {:.4}",
                    tween.to,
                    state.angle
                );
                0.0
            }
            Phase::Idle => {
                log::debug!("drag started at {:.4}", state.angle);
                0.0
            }
        };

        self.phase = Phase::Dragging {
            previous_offset: offset,
        };
        apply_drag(state, offset - previous_offset, count, config)
    }

    pub fn release(
        &mut self,
        state: RotationState,
        count: usize,
        config: &WheelConfig,
        now: Instant,
    ) -> RotationState {
        if !self.is_dragging() {
            return state;
        }

        match release_target(&state, count, config) {
            Some(target) => {
                log::debug!(
                    "released at {:.4}, settling to {:.4} (boundary: {})",
                    state.angle,
                    target,
                    state.is_at_boundary
                );
                self.animate_to(
                    RotationState {
                        is_at_boundary: false,
                        ..state
                    },
                    target,
                    count,
                    config,
                    now,
                )
            }
            None => {
                self.phase = Phase::Idle;
                RotationState {
                    is_at_boundary: false,
                    ..state
                }
            }
        }
    }

    pub fn animate_to(
        &mut self,
        state: RotationState,
        target: f64,
        count: usize,
        config: &WheelConfig,
        now: Instant,
    ) -> RotationState {
        self.phase = Phase::Settling(Tween::new(
            state.angle,
            target,
            now,
            config.settle_duration,
            count,
        ));
        state
    }

    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn tick(
        &mut self,
        state: RotationState,
        count: usize,
        config: &WheelConfig,
        now: Instant,
    ) -> (RotationState, Progress) {
        let tween = match self.phase {
            Phase::Idle => return (state, Progress::Idle),
            Phase::Dragging { .. } => return (state, Progress::Dragging),
            Phase::Settling(tween) => tween,
        };

        if tween.is_stale(count) {
            return self.retarget(state, tween, count, config, now);
        }

        match tween.sample(now) {
            Sample::Running(angle) => (RotationState { angle, ..state }, Progress::Animating),
            Sample::Finished(angle) => {
                self.phase = Phase::Idle;
                log::debug!("settled at {angle:.4}");
                (RotationState { angle, ..state }.committed(), Progress::Committed)
            }
        }
    }

    fn retarget(
        &mut self,
        state: RotationState,
        stale: Tween,
        count: usize,
        config: &WheelConfig,
        now: Instant,
    ) -> (RotationState, Progress) {
        let target = BoundaryClamp::new(count, config).and_then(|clamp| {
            snap::resolve(clamp.clamp(stale.to), count, config.item_spacing)
        });
        log::debug!(
            "discarded settle target {:.4} computed for {} items",
            stale.to,
            stale.item_count
        );
        match target {
            Some(snap) => (
                self.animate_to(state, snap.angle, count, config, now),
                Progress::Animating,
            ),
            None => {
                self.phase = Phase::Idle;
                (state, Progress::Idle)
            }
        }
    }
}
