use crate::config::WheelConfig;
use crate::item::Item;
use crate::rotation::RotationState;
use crate::snap;

pub fn active_display_index(
    state: &RotationState,
    count: usize,
    config: &WheelConfig,
) -> Option<usize> {
    snap::active_index(state.angle, count, config.item_spacing)
}

pub fn active_storage_index(
    state: &RotationState,
    count: usize,
    config: &WheelConfig,
) -> Option<usize> {
    active_display_index(state, count, config)
        .and_then(|display| config.display_order.to_storage(display, count))
}

/// Flips the centered item's checked flag and returns its storage index.
pub fn toggle_active(
    state: &RotationState,
    items: &mut [Item],
    config: &WheelConfig,
) -> Option<usize> {
    let index = active_storage_index(state, items.len(), config)?;
    items[index].toggle();
    Some(index)
}

pub fn delete_active(
    state: &RotationState,
    items: &mut Vec<Item>,
    config: &WheelConfig,
) -> Option<Item> {
    let index = active_storage_index(state, items.len(), config)?;
    let removed = items.remove(index);
    log::info!("Deleted item '{}'", removed.name);
    Some(removed)
}

/// Settled angle of the item one step up from the centered one.
pub fn previous_target(state: &RotationState, count: usize, config: &WheelConfig) -> Option<f64> {
    let index = active_display_index(state, count, config)?;
    (index > 0).then(|| config.settled_angle(index - 1))
}
