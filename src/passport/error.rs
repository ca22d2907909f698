use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum PassportError {
    #[error("Coffee not found: {0}")]
    NotFound(Uuid),

    #[error("Position {position} is out of range (collection has {len} entries)")]
    OutOfRange { position: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PassportError>;
