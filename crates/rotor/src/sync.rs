use crate::boundary::BoundaryClamp;
use crate::config::WheelConfig;
use crate::gesture::{GestureController, Phase};
use crate::rotation::RotationState;
use crate::snap;
use std::time::Instant;

/// Reconciles `state` with a sequence that now holds `count` items.
pub fn reconcile(
    state: RotationState,
    gesture: &mut GestureController,
    count: usize,
    config: &WheelConfig,
    now: Instant,
) -> RotationState {
    let previous = state.last_known_item_count;
    if count == previous {
        return state;
    }

    let state = if count > previous {
        grow(state, gesture, count - previous, count, config, now)
    } else {
        shrink(state, gesture, count, config, now)
    };

    RotationState {
        last_known_item_count: count,
        ..state
    }
}

fn grow(
    state: RotationState,
    gesture: &mut GestureController,
    added: usize,
    count: usize,
    config: &WheelConfig,
    now: Instant,
) -> RotationState {
    let shift = config.display_order.append_shift(added) as f64 * config.item_spacing;
    let committed = state.last_committed_angle - shift;

    match *gesture.phase() {
        Phase::Dragging { .. } => RotationState {
            angle: state.angle - shift,
            last_committed_angle: committed,
            ..state
        },
        Phase::Settling(tween) => gesture.animate_to(
            RotationState {
                angle: state.angle - shift,
                last_committed_angle: committed,
                ..state
            },
            tween.to - shift,
            count,
            config,
            now,
        ),
        Phase::Idle => RotationState {
            angle: committed,
            last_committed_angle: committed,
            ..state
        },
    }
}

fn shrink(
    state: RotationState,
    gesture: &mut GestureController,
    count: usize,
    config: &WheelConfig,
    now: Instant,
) -> RotationState {
    let Some(clamp) = BoundaryClamp::new(count, config) else {
        // the next append restores the committed angle, so it must be the first slot
        gesture.cancel();
        return state.centered();
    };

    let base = match *gesture.phase() {
        // the release will resolve against the new count
        Phase::Dragging { .. } => return state,
        Phase::Settling(tween) => tween.to,
        Phase::Idle => state.angle,
    };

    let Some(snap) = snap::resolve(clamp.clamp(base), count, config.item_spacing) else {
        return state;
    };
    let state = RotationState {
        is_at_boundary: false,
        ..state
    };

    if gesture.is_idle() && state.angle == snap.angle {
        return state.committed();
    }
    gesture.animate_to(state, snap.angle, count, config, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Progress;
    use crate::order::DisplayOrder;
    use std::time::Duration;

    fn idle_on(index: usize, count: usize, config: &WheelConfig) -> RotationState {
        RotationState {
            angle: config.settled_angle(index),
            last_committed_angle: config.settled_angle(index),
            is_at_boundary: false,
            last_known_item_count: count,
        }
    }

    #[test]
    fn test_unchanged_count_is_a_no_op() {
        let config = WheelConfig::default();
        let mut gesture = GestureController::default();
        let state = idle_on(2, 5, &config);
        assert_eq!(
            reconcile(state, &mut gesture, 5, &config, Instant::now()),
            state
        );
    }

    #[test]
    fn test_growth_restores_committed_angle() {
        let config = WheelConfig::default();
        let mut gesture = GestureController::default();
        let mut state = idle_on(3, 5, &config);
        state.angle += 0.05;

        let state = reconcile(state, &mut gesture, 6, &config, Instant::now());
        assert_eq!(state.angle, config.settled_angle(3));
        assert_eq!(state.last_known_item_count, 6);
        assert!(gesture.is_idle());
    }

    #[test]
    fn test_growth_in_reversed_order_shifts_by_added_items() {
        let config = WheelConfig {
            display_order: DisplayOrder::Reversed,
            ..WheelConfig::default()
        };
        let mut gesture = GestureController::default();
        let state = idle_on(1, 4, &config);

        let state = reconcile(state, &mut gesture, 6, &config, Instant::now());
        assert!((state.angle - config.settled_angle(3)).abs() < 1e-12);
        assert_eq!(state.last_committed_angle, state.angle);
    }

    #[test]
    fn test_growth_while_settling_keeps_target() {
        let config = WheelConfig::default();
        let mut gesture = GestureController::default();
        let start = Instant::now();
        let state = idle_on(2, 5, &config);
        let state = gesture.animate_to(state, config.settled_angle(3), 5, &config, start);

        let state = reconcile(state, &mut gesture, 6, &config, start);
        assert_eq!(gesture.settle_target(), Some(config.settled_angle(3)));

        let (state, progress) = gesture.tick(state, 6, &config, start + Duration::from_secs(1));
        assert_eq!(progress, Progress::Committed);
        assert_eq!(state.angle, config.settled_angle(3));
    }

    #[test]
    fn test_shrink_in_the_middle_stays_put() {
        let config = WheelConfig::default();
        let mut gesture = GestureController::default();
        let state = idle_on(1, 3, &config);

        let state = reconcile(state, &mut gesture, 2, &config, Instant::now());
        assert!(gesture.is_idle());
        assert_eq!(state.angle, config.settled_angle(1));
        assert_eq!(state.last_committed_angle, config.settled_angle(1));
    }

    #[test]
    fn test_shrink_at_the_end_settles_on_new_last_item() {
        let config = WheelConfig::default();
        let mut gesture = GestureController::default();
        let start = Instant::now();
        let state = idle_on(4, 5, &config);

        let state = reconcile(state, &mut gesture, 4, &config, start);
        assert_eq!(gesture.settle_target(), Some(config.settled_angle(3)));

        let (state, progress) = gesture.tick(state, 4, &config, start + config.settle_duration);
        assert_eq!(progress, Progress::Committed);
        assert_eq!(state.last_committed_angle, config.settled_angle(3));
    }

    #[test]
    fn test_shrink_to_empty_cancels_settle() {
        let config = WheelConfig::default();
        let mut gesture = GestureController::default();
        let start = Instant::now();
        let state = idle_on(0, 1, &config);
        let state = gesture.animate_to(state, config.settled_angle(0), 1, &config, start);

        let state = reconcile(state, &mut gesture, 0, &config, start);
        assert!(gesture.is_idle());
        assert_eq!(state.last_known_item_count, 0);
        assert_eq!(state.last_committed_angle, config.settled_angle(0));
    }

    #[test]
    fn test_shrink_to_empty_recenters() {
        let config = WheelConfig::default();
        let mut gesture = GestureController::default();
        let state = idle_on(3, 4, &config);

        let state = reconcile(state, &mut gesture, 0, &config, Instant::now());
        assert_eq!(state.angle, config.settled_angle(0));
        assert_eq!(state.last_committed_angle, config.settled_angle(0));

        let state = reconcile(state, &mut gesture, 2, &config, Instant::now());
        assert!(gesture.is_idle());
        assert_eq!(state.angle, config.settled_angle(0));
    }

    #[test]
    fn test_growth_while_dragging_shifts_live_angle() {
        let config = WheelConfig {
            display_order: DisplayOrder::Reversed,
            ..WheelConfig::default()
        };
        let mut gesture = GestureController::default();
        let state = idle_on(1, 4, &config);
        let state = gesture.drag(state, 3.0, 4, &config);
        let dragged = state.angle;

        let state = reconcile(state, &mut gesture, 6, &config, Instant::now());
        assert!(gesture.is_dragging());
        assert_eq!(state.angle, dragged - 2.0 * config.item_spacing);
        assert!((state.last_committed_angle - config.settled_angle(3)).abs() < 1e-12);
        assert_eq!(state.last_known_item_count, 6);
    }

    #[test]
    fn test_shrink_while_dragging_defers_to_release() {
        let config = WheelConfig::default();
        let mut gesture = GestureController::default();
        let state = idle_on(6, 8, &config);
        let state = gesture.drag(state, 3.0, 8, &config);
        let dragged = state.angle;

        let state = reconcile(state, &mut gesture, 4, &config, Instant::now());
        assert!(gesture.is_dragging());
        assert_eq!(state.angle, dragged);

        let start = Instant::now();
        let state = gesture.release(state, 4, &config, start);
        let (state, _) = gesture.tick(state, 4, &config, start + config.settle_duration);
        assert_eq!(state.angle, config.settled_angle(3));
    }
}
