use gloo::storage::errors::StorageError;
use thiserror::Error;

/// Failures talking to the generative-language API.
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("no API key has been saved")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Network(#[from] gloo::net::Error),

    #[error("API Error: {0}")]
    Status(u16),
}

/// Failures reading or writing browser local storage.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("refusing to store an empty value")]
    EmptyValue,

    #[error(transparent)]
    Storage(#[from] StorageError),
}
