use async_trait::async_trait;

use super::error::StorageError;

/// Write-only object storage exposing stored objects at public URLs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `data` under `key`, replacing any existing object.
    async fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StorageError>;

    /// Public URL an object stored under `key` is reachable at.
    fn public_url(&self, key: &str) -> String;

    /// Store `data` under `key` and return its public URL.
    async fn put_public(
        &self,
        key: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<String, StorageError> {
        self.put(key, data, content_type).await?;
        Ok(self.public_url(key))
    }
}
