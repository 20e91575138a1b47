pub mod angle;
pub mod boundary;
pub mod config;
pub mod error;
pub mod gesture;
pub mod item;
pub mod layout;
pub mod macros;
pub mod order;
pub mod rotation;
pub mod selection;
pub mod snap;
pub mod store;
pub mod sync;
pub mod tween;
pub mod wheel;

pub use config::WheelConfig;
pub use item::{Item, ItemId, ItemName};
pub use wheel::Wheel;
