//! The list and the wheel over it, kept in step and persisted on every mutation.

use rotor::item::{Item, ItemName};
use rotor::layout::ItemLayout;
use rotor::store::{self, KeyValueStore};
use rotor::{Wheel, WheelConfig};
use std::time::Instant;

pub struct Session<S> {
    wheel: Wheel,
    items: Vec<Item>,
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    /// Loads the list from `store` and binds a fresh wheel to it.
    pub fn load(config: WheelConfig, store: S) -> Self {
        let items = store::load_items(&store);
        log::info!("Loaded {} items", items.len());
        Self {
            wheel: Wheel::new(config, items.len()),
            items,
            store,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn config(&self) -> &WheelConfig {
        self.wheel.config()
    }

    pub fn set_config(&mut self, config: WheelConfig) {
        self.wheel.set_config(config);
    }

    pub fn mount(&mut self) {
        self.wheel.mount();
    }

    pub fn drag(&mut self, offset: f64, now: Instant) {
        self.wheel.drag(offset, self.items.len(), now);
    }

    pub fn release(&mut self, now: Instant) {
        self.wheel.release(self.items.len(), now);
    }

    /// Returns whether the wheel needs another frame.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.wheel.tick(self.items.len(), now)
    }

    pub fn layout(&self) -> Vec<ItemLayout> {
        self.wheel.layout(self.items.len())
    }

    pub fn active_item(&self) -> Option<&Item> {
        self.wheel.active_item(&self.items)
    }

    pub fn toggle_active(&mut self, now: Instant) -> bool {
        let toggled = self.wheel.toggle_active(&mut self.items, now).is_some();
        if toggled {
            self.persist();
        }
        toggled
    }

    /// Toggles the centered item and moves on to the one above it.
    pub fn check_off(&mut self, now: Instant) {
        if self.toggle_active(now) {
            self.wheel.advance_to_previous(self.items.len(), now);
        }
    }

    pub fn advance_to_previous(&mut self, now: Instant) -> bool {
        self.wheel.advance_to_previous(self.items.len(), now)
    }

    pub fn delete_active(&mut self, now: Instant) -> Option<Item> {
        let removed = self.wheel.delete_active(&mut self.items, now)?;
        log::info!("Deleted '{}'", removed.name);
        self.persist();
        Some(removed)
    }

    pub fn add(&mut self, name: &ItemName, now: Instant) {
        log::info!("Adding item '{}'", name);
        self.items.push(Item::new(name.clone()));
        self.wheel.sync(self.items.len(), now);
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = store::save_items(&self.store, &self.items) {
            log::error!("Failed to save items: {}", e);
        }
    }
}
