use crate::events::AppEvent;
use async_channel::Sender;
use directories::ProjectDirs;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use rotor::WheelConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct StoreConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub wheel: WheelConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "dial", "dial").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Reads `path` (if present) under `DIAL_*` environment overrides.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("DIAL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Loads the config, writing the commented default file on first run.
pub fn load_or_setup() -> Config {
    let path = match get_config_path() {
        Ok(path) => path,
        Err(e) => {
            log::error!("{}, using defaults", e);
            return Config::default();
        }
    };

    match write_default_config(&path) {
        Ok(true) => log::info!("Wrote default config to {}", path.display()),
        Ok(false) => {}
        Err(e) => log::error!("Failed to write default config: {}", e),
    }

    load_config_from(&path).unwrap_or_else(|e| {
        log::error!("Failed to load config, using defaults: {}", e);
        Config::default()
    })
}

/// Creates `path` with the commented defaults. Returns false if it already exists.
pub fn write_default_config(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    fs_err::write(path, DEFAULT_CONFIG)?;
    Ok(true)
}

fn is_config_change(event: &Event, config_path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == config_path)
}

/// Watches the config file and sends each successfully parsed revision.
pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    if let Err(e) = watch_config(tx).await {
        log::error!("Config watcher stopped: {}", e);
    }
}

async fn watch_config(tx: Sender<AppEvent>) -> Result<(), ConfigError> {
    let config_path = get_config_path()?;
    let config_dir = config_path
        .parent()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .to_path_buf();
    // the file may be replaced rather than edited, so watch its directory
    fs_err::create_dir_all(&config_dir)?;

    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(&config_dir, RecursiveMode::NonRecursive)?;

    while let Ok(res) = bridge_rx.recv().await {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                log::error!("Watch error: {}", e);
                continue;
            }
        };
        if !is_config_change(&event, &config_path) {
            continue;
        }

        match load_config_from(&config_path) {
            Ok(config) => {
                if tx.send(AppEvent::ConfigReload(config)).await.is_err() {
                    break;
                }
            }
            Err(e) => log::warn!("Ignoring invalid config change: {}", e),
        }
    }
    Ok(())
}
