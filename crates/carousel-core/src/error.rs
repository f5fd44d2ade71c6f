//! Error types for the carousel.

use thiserror::Error;

/// Errors that can occur when reading or writing persisted state.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No storage is available (e.g. `localStorage` disabled).
    #[error("Storage unavailable")]
    Unavailable,

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backend rejected the operation (quota, security error, ...).
    #[error("Store operation failed: {0}")]
    Backend(String),
}

/// Errors from fetching the product list.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Errors in carousel configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for `CarouselConfig`.
    #[error("Configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the widget cannot work with.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
