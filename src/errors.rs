use thiserror::Error;

/// Error type that captures common record-store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: u32 },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
