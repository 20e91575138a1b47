//! Nearest settled angle and the active item.
//!
//! Settled angles are `π − k·spacing` on a single unwrapped lap, so lookups
//! work on the raw angle instead of the normalized one: normalizing would
//! alias index `k` with `k ± 18` on lists longer than half a revolution.

use crate::angle::{self, CENTER};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snap {
    pub index: usize,
    pub angle: f64,
}

pub fn wrap_index(index: i64, count: usize) -> usize {
    let count = count as i64;
    (((index % count) + count) % count) as usize
}

/// Nearest settled angle for `angle`; `None` when the list is empty.
pub fn resolve(angle: f64, count: usize, item_spacing: f64) -> Option<Snap> {
    if count == 0 {
        return None;
    }
    let nearest = ((CENTER - angle) / item_spacing).round() as i64;
    let index = wrap_index(nearest, count);
    Some(Snap {
        index,
        angle: CENTER - index as f64 * item_spacing,
    })
}

pub fn item_angle(display_index: usize, rotation: f64, item_spacing: f64) -> f64 {
    display_index as f64 * item_spacing + rotation
}

pub fn unwrapped_offset(item_angle: f64) -> f64 {
    item_angle - CENTER
}

/// True when the item sits within half a spacing of the center on the current lap.
pub fn is_centered(item_angle: f64, item_spacing: f64) -> bool {
    unwrapped_offset(item_angle).abs() < PI
        && angle::distance_from_center(item_angle) < item_spacing / 2.0
}

/// Display index of the item currently within tolerance of the center row.
pub fn active_index(rotation: f64, count: usize, item_spacing: f64) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let candidate = ((CENTER - rotation) / item_spacing).round();
    if candidate < 0.0 || candidate >= count as f64 {
        return None;
    }
    let index = candidate as usize;
    is_centered(item_angle(index, rotation, item_spacing), item_spacing).then_some(index)
}
