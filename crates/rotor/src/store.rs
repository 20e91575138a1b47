use crate::error::StoreError;
use crate::item::{Item, sample_items};
use directories::ProjectDirs;
use fs_err as fs;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

pub const ITEMS_KEY: &str = "groceryItems";

const STORE_FILE: &str = "store.json";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// All keys in one JSON object file, loaded once and rewritten on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let proj_dirs =
            ProjectDirs::from("org", "dial", "dial").ok_or(StoreError::DataDirNotFound)?;
        Ok(proj_dirs.data_dir().join(STORE_FILE))
    }

    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(Self::default_path()?)
    }

    /// Opens the store at `path`. A missing or undecodable file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                log::warn!(
                    "Store file {} is not valid, starting empty: {}",
                    path.display(),
                    e
                );
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // write aside and rename so an interrupted save never truncates the store
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, serde_json::to_string_pretty(entries)?)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value);
        self.flush(&entries)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }
}

/// Loads the persisted list, substituting the sample list when absent or unreadable.
pub fn load_items(store: &impl KeyValueStore) -> Vec<Item> {
    let raw = match store.get(ITEMS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return sample_items(),
        Err(e) => {
            log::warn!("Failed to read stored items, using sample list: {}", e);
            return sample_items();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Stored items are not valid, using sample list: {}", e);
            sample_items()
        }
    }
}

pub fn save_items(store: &impl KeyValueStore, items: &[Item]) -> Result<(), StoreError> {
    store.set(ITEMS_KEY, serde_json::to_string(items)?)
}
