use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};

use super::StorageBackend;

/// Keeps blobs in process memory; used when no bucket is configured.
pub struct MemoryBackend {
    bucket: String,
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: RwLock::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[tonic::async_trait]
impl StorageBackend for MemoryBackend {
    async fn upload(&self, key: &str, data: &[u8], _content_type: &str) -> AppResult<String> {
        self.objects
            .write()
            .await
            .insert(key.to_string(), data.to_vec());
        tracing::debug!("Memory upload: bucket={}, key={}", self.bucket, key);
        Ok(format!("mem://{}/{}", self.bucket, key))
    }

    async fn download(&self, key: &str) -> AppResult<Vec<u8>> {
        self.objects
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| AppError::Storage(format!("object {} not found", key)))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.objects.write().await.remove(key);
        Ok(())
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }
}
