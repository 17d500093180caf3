use s3::bucket::Bucket;
use s3::creds::Credentials;
use s3::Region;

use crate::error::{AppError, AppResult};

use super::StorageBackend;

/// Cloudflare R2 through its S3-compatible API.
pub struct R2Backend {
    bucket: Box<Bucket>,
    bucket_name: String,
}

impl R2Backend {
    pub fn new(
        bucket_name: String,
        account_id: String,
        access_key: String,
        secret_key: String,
    ) -> AppResult<Self> {
        let region = Region::Custom {
            region: "auto".to_string(),
            endpoint: format!("https://{}.r2.cloudflarestorage.com", account_id),
        };

        let credentials = Credentials::new(Some(&access_key), Some(&secret_key), None, None, None)
            .map_err(|e| AppError::Storage(format!("R2 credentials error: {}", e)))?;

        let bucket = Bucket::new(&bucket_name, region, credentials)
            .map_err(|e| AppError::Storage(format!("R2 bucket error: {}", e)))?;

        tracing::info!("R2 backend ready: bucket={}", bucket_name);
        Ok(Self {
            bucket,
            bucket_name,
        })
    }

    fn check_status(&self, op: &str, key: &str, status: u16) -> AppResult<()> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(AppError::Storage(format!(
                "R2 {} failed for {}: HTTP {}",
                op, key, status
            )))
        }
    }
}

#[tonic::async_trait]
impl StorageBackend for R2Backend {
    async fn upload(&self, key: &str, data: &[u8], content_type: &str) -> AppResult<String> {
        let response = self
            .bucket
            .put_object_with_content_type(key, data, content_type)
            .await
            .map_err(|e| AppError::Storage(format!("R2 upload failed: {}", e)))?;
        self.check_status("upload", key, response.status_code())?;

        tracing::info!(
            "R2 upload: bucket={}, key={}, size={}",
            self.bucket_name,
            key,
            data.len()
        );
        Ok(format!("r2://{}/{}", self.bucket_name, key))
    }

    async fn download(&self, key: &str) -> AppResult<Vec<u8>> {
        let response = self
            .bucket
            .get_object(key)
            .await
            .map_err(|e| AppError::Storage(format!("R2 download failed: {}", e)))?;
        self.check_status("download", key, response.status_code())?;

        Ok(response.bytes().to_vec())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let response = self
            .bucket
            .delete_object(key)
            .await
            .map_err(|e| AppError::Storage(format!("R2 delete failed: {}", e)))?;
        self.check_status("delete", key, response.status_code())?;

        tracing::info!("R2 delete: bucket={}, key={}", self.bucket_name, key);
        Ok(())
    }

    fn bucket(&self) -> &str {
        &self.bucket_name
    }
}
