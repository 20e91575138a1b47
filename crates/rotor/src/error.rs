use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItemError {
    #[error("Item name must not be empty")]
    EmptyName,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to determine data directory")]
    DataDirNotFound,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Invalid store contents: {0}")]
    Json(#[from] serde_json::Error),
}
