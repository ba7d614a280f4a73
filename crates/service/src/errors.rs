use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("encode error: {0}")]
    Encode(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl StoreError {
    pub fn not_found(entity: &str, id: &str) -> Self {
        Self::NotFound(format!("{entity} {id} not found"))
    }

    /// True for failures that happened while writing the backing file.
    pub fn is_persist_failure(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Encode(_))
    }
}
