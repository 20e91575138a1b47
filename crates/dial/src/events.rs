use crate::config::Config;

#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigReload(Config),
}
