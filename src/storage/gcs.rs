use std::borrow::Cow;

use google_cloud_storage::{
    client::{Client, ClientConfig},
    http::objects::{
        delete::DeleteObjectRequest,
        download::Range,
        get::GetObjectRequest,
        upload::{Media, UploadObjectRequest, UploadType},
    },
};

use crate::error::{AppError, AppResult};

use super::StorageBackend;

/// Google Cloud Storage, authenticated through application default credentials.
pub struct GcsBackend {
    client: Client,
    bucket: String,
}

impl GcsBackend {
    pub async fn new(bucket: String) -> AppResult<Self> {
        let config = ClientConfig::default()
            .with_auth()
            .await
            .map_err(|e| AppError::Storage(format!("GCS auth failed: {}", e)))?;
        tracing::info!("GCS backend ready: bucket={}", bucket);
        Ok(Self {
            client: Client::new(config),
            bucket,
        })
    }

    fn object(&self, key: &str) -> GetObjectRequest {
        GetObjectRequest {
            bucket: self.bucket.clone(),
            object: key.to_string(),
            ..Default::default()
        }
    }
}

#[tonic::async_trait]
impl StorageBackend for GcsBackend {
    async fn upload(&self, key: &str, data: &[u8], content_type: &str) -> AppResult<String> {
        let mut media = Media::new(key.to_string());
        media.content_type = Cow::Owned(content_type.to_string());

        let request = UploadObjectRequest {
            bucket: self.bucket.clone(),
            ..Default::default()
        };
        self.client
            .upload_object(&request, data.to_vec(), &UploadType::Simple(media))
            .await
            .map_err(|e| AppError::Storage(format!("GCS upload failed for {}: {}", key, e)))?;

        tracing::info!(
            "GCS upload: bucket={}, key={}, size={}",
            self.bucket,
            key,
            data.len()
        );
        Ok(format!("gs://{}/{}", self.bucket, key))
    }

    async fn download(&self, key: &str) -> AppResult<Vec<u8>> {
        self.client
            .download_object(&self.object(key), &Range::default())
            .await
            .map_err(|e| AppError::Storage(format!("GCS download failed for {}: {}", key, e)))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let request = DeleteObjectRequest {
            bucket: self.bucket.clone(),
            object: key.to_string(),
            ..Default::default()
        };
        self.client
            .delete_object(&request)
            .await
            .map_err(|e| AppError::Storage(format!("GCS delete failed for {}: {}", key, e)))?;

        tracing::info!("GCS delete: bucket={}, key={}", self.bucket, key);
        Ok(())
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }
}
