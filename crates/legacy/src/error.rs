use thiserror::Error;

#[derive(Debug, Error)]
pub enum LegacyError {
    #[error("Import failed: {0}")]
    Import(String),

    #[error("Invalid item: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
