use crate::config::WheelConfig;
use crate::gesture::{GestureController, Progress};
use crate::item::Item;
use crate::layout::{self, ItemLayout};
use crate::rotation::RotationState;
use crate::{selection, sync};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct Wheel {
    config: WheelConfig,
    state: RotationState,
    gesture: GestureController,
    mounted: bool,
}

impl Wheel {
    /// A wheel bound to a list of `item_count` items. Call [`Wheel::mount`]
    /// once the first layout is done to center the first item.
    pub fn new(config: WheelConfig, item_count: usize) -> Self {
        Self {
            config,
            state: RotationState::new(item_count),
            gesture: GestureController::default(),
            mounted: false,
        }
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Swaps the tuning without moving the wheel.
    pub fn set_config(&mut self, config: WheelConfig) {
        self.config = config;
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn angle(&self) -> f64 {
        self.state.angle
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_settling(&self) -> bool {
        self.gesture.is_settling()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Deferred initial centering. Only the first call has an effect.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.gesture.cancel();
        self.state = self.state.centered();
        log::debug!(
            "wheel mounted with {} items",
            self.state.last_known_item_count
        );
    }

    pub fn sync(&mut self, count: usize, now: Instant) {
        self.state = sync::reconcile(self.state, &mut self.gesture, count, &self.config, now);
    }

    /// Feeds one drag sample; `offset` is the vertical translation since the gesture began.
    pub fn drag(&mut self, offset: f64, count: usize, now: Instant) {
        self.sync(count, now);
        self.state = self.gesture.drag(self.state, offset, count, &self.config);
    }

    pub fn release(&mut self, count: usize, now: Instant) {
        self.sync(count, now);
        self.state = self.gesture.release(self.state, count, &self.config, now);
    }

    /// Advances any running settle. Returns whether another frame is needed.
    pub fn tick(&mut self, count: usize, now: Instant) -> bool {
        self.sync(count, now);
        let (state, progress) = self.gesture.tick(self.state, count, &self.config, now);
        self.state = state;
        matches!(progress, Progress::Animating)
    }

    pub fn active_display_index(&self, count: usize) -> Option<usize> {
        selection::active_display_index(&self.state, count, &self.config)
    }

    pub fn active_item<'a>(&self, items: &'a [Item]) -> Option<&'a Item> {
        selection::active_storage_index(&self.state, items.len(), &self.config)
            .map(|index| &items[index])
    }

    pub fn toggle_active(&mut self, items: &mut [Item], now: Instant) -> Option<usize> {
        self.sync(items.len(), now);
        selection::toggle_active(&self.state, items, &self.config)
    }

    pub fn delete_active(&mut self, items: &mut Vec<Item>, now: Instant) -> Option<Item> {
        self.sync(items.len(), now);
        let removed = selection::delete_active(&self.state, items, &self.config)?;
        self.sync(items.len(), now);
        Some(removed)
    }

    /// Animates to the item above the active one. Returns false at the first item.
    pub fn advance_to_previous(&mut self, count: usize, now: Instant) -> bool {
        self.sync(count, now);
        let Some(target) = selection::previous_target(&self.state, count, &self.config) else {
            return false;
        };
        self.state = self
            .gesture
            .animate_to(self.state, target, count, &self.config, now);
        true
    }

    pub fn layout(&self, count: usize) -> Vec<ItemLayout> {
        layout::layout(self.state.angle, count, &self.config)
    }
}
