use std::sync::Arc;

use uuid::Uuid;

use crate::db::RecordStore;
use crate::error::{AppError, AppResult};
use crate::middleware::AuthenticatedUser;
use crate::models::{non_empty, Document, NewDocument};
use crate::storage::{sanitize_filename, StorageBackend};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Clone)]
pub struct DocumentLibrary {
    store: Arc<dyn RecordStore>,
    storage: Arc<dyn StorageBackend>,
}

impl DocumentLibrary {
    pub fn new(store: Arc<dyn RecordStore>, storage: Arc<dyn StorageBackend>) -> Self {
        Self { store, storage }
    }

    async fn load_owned(&self, user: &AuthenticatedUser, id: i64) -> AppResult<Document> {
        self.store
            .get_document(id)
            .await?
            .filter(|d| user.can_access(&d.user_id))
            .ok_or_else(|| AppError::NotFound(format!("Document {} not found", id)))
    }

    pub async fn upload_document(
        &self,
        user: &AuthenticatedUser,
        title: &str,
        filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> AppResult<Document> {
        if data.is_empty() {
            return Err(AppError::InvalidInput("document is empty".to_string()));
        }
        let filename = sanitize_filename(filename);
        let title = non_empty(Some(title.to_string())).unwrap_or_else(|| filename.clone());
        let content_type = if content_type.trim().is_empty() {
            DEFAULT_CONTENT_TYPE
        } else {
            content_type.trim()
        };

        let key = format!("documents/{}/{}-{}", user.user_id, Uuid::new_v4(), filename);
        let file_path = self.storage.upload(&key, data, content_type).await?;

        let inserted = self
            .store
            .insert_document(&NewDocument {
                user_id: user.user_id.clone(),
                title,
                file_path,
                order_id: None,
            })
            .await;
        match inserted {
            Ok(document) => {
                tracing::info!(
                    "Document uploaded: id={}, user_id={}, bytes={}",
                    document.id,
                    user.user_id,
                    data.len()
                );
                Ok(document)
            }
            Err(e) => {
                if let Err(cleanup) = self.storage.delete(&key).await {
                    tracing::warn!("Failed to remove upload {} after insert error: {}", key, cleanup);
                }
                Err(e)
            }
        }
    }

    pub async fn list_documents(&self, user: &AuthenticatedUser) -> AppResult<Vec<Document>> {
        self.store.list_documents(user.owner_scope()).await
    }

    pub async fn set_favorite(
        &self,
        user: &AuthenticatedUser,
        id: i64,
        is_favorite: bool,
    ) -> AppResult<Document> {
        self.load_owned(user, id).await?;
        self.store
            .set_document_favorite(id, is_favorite)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Document {} not found", id)))
    }

    /// Deletes the row, then the stored file. A failed file delete is only
    /// logged.
    pub async fn delete_document(&self, user: &AuthenticatedUser, id: i64) -> AppResult<()> {
        let document = self.load_owned(user, id).await?;
        if !self.store.delete_document(id).await? {
            return Err(AppError::NotFound(format!("Document {} not found", id)));
        }
        tracing::info!("Document deleted: id={}, user_id={}", id, user.user_id);

        match self.storage.key_from_path(&document.file_path) {
            Some(key) => {
                if let Err(e) = self.storage.delete(key).await {
                    tracing::warn!("Failed to delete stored file {}: {}", document.file_path, e);
                }
            }
            None => tracing::warn!(
                "Stored file {} is not in bucket {}, leaving it",
                document.file_path,
                self.storage.bucket()
            ),
        }
        Ok(())
    }

    pub async fn download_document(
        &self,
        user: &AuthenticatedUser,
        id: i64,
    ) -> AppResult<(Document, Vec<u8>)> {
        let document = self.load_owned(user, id).await?;
        let key = self.storage.key_from_path(&document.file_path).ok_or_else(|| {
            AppError::Storage(format!(
                "{} is not in bucket {}",
                document.file_path,
                self.storage.bucket()
            ))
        })?;
        let data = self.storage.download(key).await?;
        Ok((document, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::DOCUMENTS;
    use crate::db::MemoryRecordStore;
    use crate::storage::MemoryBackend;

    fn setup() -> (Arc<MemoryRecordStore>, Arc<MemoryBackend>, DocumentLibrary) {
        let store = Arc::new(MemoryRecordStore::new());
        let storage = Arc::new(MemoryBackend::new("freight-files"));
        let library = DocumentLibrary::new(store.clone(), storage.clone());
        (store, storage, library)
    }

    #[tokio::test]
    async fn test_upload_download_delete() {
        let (_, storage, library) = setup();
        let user = AuthenticatedUser::new("alice");

        let document = library
            .upload_document(&user, " ", "bill of lading.pdf", "application/pdf", b"%PDF-1.4")
            .await
            .unwrap();
        assert_eq!(document.title, "bill_of_lading.pdf");
        assert!(document
            .file_path
            .starts_with("mem://freight-files/documents/alice/"));

        let (_, data) = library.download_document(&user, document.id).await.unwrap();
        assert_eq!(data, b"%PDF-1.4");

        let favorite = library.set_favorite(&user, document.id, true).await.unwrap();
        assert!(favorite.is_favorite);

        assert!(matches!(
            library
                .download_document(&AuthenticatedUser::new("bob"), document.id)
                .await,
            Err(AppError::NotFound(_))
        ));

        library.delete_document(&user, document.id).await.unwrap();
        assert!(library.list_documents(&user).await.unwrap().is_empty());
        assert!(storage.is_empty().await);
    }

    #[tokio::test]
    async fn test_failed_insert_removes_upload() {
        let (store, storage, library) = setup();
        store.set_unavailable(DOCUMENTS, true);

        let result = library
            .upload_document(&AuthenticatedUser::new("alice"), "Invoice", "inv.txt", "", b"42")
            .await;
        assert!(result.is_err());
        assert!(storage.is_empty().await);
    }

    #[tokio::test]
    async fn test_empty_upload_rejected() {
        let (_, _, library) = setup();
        assert!(matches!(
            library
                .upload_document(&AuthenticatedUser::new("alice"), "Empty", "a.txt", "", b"")
                .await,
            Err(AppError::InvalidInput(_))
        ));
    }
}
