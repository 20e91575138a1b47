pub mod add_item;
pub mod app;
pub mod theme;
pub mod wheel;
