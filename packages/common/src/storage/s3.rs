use async_trait::async_trait;
use s3::creds::Credentials;
use s3::{Bucket, Region};
use tracing::debug;

use super::error::StorageError;
use super::traits::ObjectStore;

/// Connection settings for an S3-compatible bucket (Aliyun OSS, MinIO, AWS).
#[derive(Debug, Clone, Default)]
pub struct S3Settings {
    /// Service host, e.g. `oss-cn-hangzhou.aliyuncs.com`. A scheme prefix is tolerated.
    pub endpoint: String,
    /// Signing region.
    pub region: String,
    pub bucket_name: String,
    pub access_key_id: String,
    pub access_key_secret: String,
}

/// [`ObjectStore`] backed by an S3-compatible bucket, addressed virtual-host style.
pub struct S3ObjectStore {
    bucket: Box<Bucket>,
    bucket_name: String,
    host: String,
}

impl S3ObjectStore {
    /// Build a bucket handle. No request is sent until the first upload.
    pub fn new(settings: &S3Settings) -> Result<Self, StorageError> {
        let host = endpoint_host(&settings.endpoint);
        if host.is_empty() {
            return Err(StorageError::NotConfigured("endpoint"));
        }
        let bucket_name = settings.bucket_name.trim();
        if bucket_name.is_empty() {
            return Err(StorageError::NotConfigured("bucket name"));
        }
        if settings.access_key_id.is_empty() || settings.access_key_secret.is_empty() {
            return Err(StorageError::NotConfigured("access key"));
        }

        let credentials = Credentials::new(
            Some(settings.access_key_id.as_str()),
            Some(settings.access_key_secret.as_str()),
            None,
            None,
            None,
        )
        .map_err(|e| StorageError::Credentials(e.to_string()))?;

        let region = Region::Custom {
            region: settings.region.clone(),
            endpoint: format!("https://{host}"),
        };

        let bucket = Bucket::new(bucket_name, region, credentials)
            .map_err(|e| StorageError::Request(e.to_string()))?;

        Ok(Self {
            bucket,
            bucket_name: bucket_name.to_string(),
            host: host.to_string(),
        })
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StorageError> {
        let response = self
            .bucket
            .put_object_with_content_type(key, data, content_type)
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;

        let status = response.status_code();
        if !(200..300).contains(&status) {
            return Err(StorageError::UnexpectedStatus {
                key: key.to_string(),
                status,
            });
        }

        debug!(key, size = data.len(), "Stored object");
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://{}.{}/{}", self.bucket_name, self.host, key)
    }
}

/// Strip an optional scheme and trailing slashes from a configured endpoint.
fn endpoint_host(endpoint: &str) -> &str {
    let trimmed = endpoint.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    without_scheme.trim_end_matches('/')
}
