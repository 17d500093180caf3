// Blob storage for receipts and uploaded documents

pub mod gcs;
pub mod memory;
pub mod r2;

pub use gcs::GcsBackend;
pub use memory::MemoryBackend;
pub use r2::R2Backend;

use crate::error::AppResult;

/// Object storage abstraction shared by the GCS, R2 and in-memory backends.
#[tonic::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Uploads the payload and returns the storage path recorded on documents.
    async fn upload(&self, key: &str, data: &[u8], content_type: &str) -> AppResult<String>;

    async fn download(&self, key: &str) -> AppResult<Vec<u8>>;

    async fn delete(&self, key: &str) -> AppResult<()>;

    fn bucket(&self) -> &str;

    /// Recovers the object key from a path returned by `upload`.
    fn key_from_path<'a>(&self, path: &'a str) -> Option<&'a str> {
        path.split_once("://")
            .and_then(|(_, rest)| rest.strip_prefix(self.bucket()))
            .and_then(|rest| rest.strip_prefix('/'))
    }
}

/// Replaces characters that are awkward in object keys.
pub fn sanitize_filename(filename: &str) -> String {
    let cleaned: String = filename
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_path() {
        let backend = MemoryBackend::new("receipts");
        assert_eq!(
            backend.key_from_path("mem://receipts/u1/order-1.txt"),
            Some("u1/order-1.txt")
        );
        assert_eq!(backend.key_from_path("gs://other/u1/order-1.txt"), None);
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("bill of lading (1).pdf"), "bill_of_lading__1_.pdf");
        assert_eq!(sanitize_filename("  "), "file");
    }
}
