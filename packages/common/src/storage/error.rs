use thiserror::Error;

/// Errors that can occur during object storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A required setting (endpoint, bucket, credentials) is missing.
    #[error("Object storage not configured: missing {0}")]
    NotConfigured(&'static str),

    #[error("Invalid storage credentials: {0}")]
    Credentials(String),

    #[error("Storage request failed: {0}")]
    Request(String),

    #[error("Storage rejected object '{key}' with status {status}")]
    UnexpectedStatus { key: String, status: u16 },
}
