use tonic::{Request, Response, Status};

use crate::middleware::get_authenticated_user;
use crate::models::Document;
use crate::proto::common::Empty;
use crate::proto::documents::document_service_server::DocumentService;
use crate::proto::documents::{
    self as pb, DocumentIdRequest, DocumentResponse, DownloadDocumentResponse,
    ListDocumentsRequest, ListDocumentsResponse, SetFavoriteRequest, UploadDocumentRequest,
};
use crate::workflows::DocumentLibrary;

use super::convert::timestamp;

pub struct DocumentServiceImpl {
    documents: DocumentLibrary,
}

impl DocumentServiceImpl {
    pub fn new(documents: DocumentLibrary) -> Self {
        Self { documents }
    }

    fn model_to_proto(document: &Document) -> pb::Document {
        pb::Document {
            id: document.id,
            user_id: document.user_id.clone(),
            title: document.title.clone(),
            file_path: document.file_path.clone(),
            is_favorite: document.is_favorite,
            order_id: document.order_id,
            created_at: timestamp(&document.created_at),
        }
    }
}

#[tonic::async_trait]
impl DocumentService for DocumentServiceImpl {
    async fn upload_document(
        &self,
        request: Request<UploadDocumentRequest>,
    ) -> Result<Response<DocumentResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let req = request.into_inner();
        if req.filename.trim().is_empty() {
            return Err(Status::invalid_argument("filename is required"));
        }

        let document = self
            .documents
            .upload_document(&user, &req.title, &req.filename, &req.content_type, &req.data)
            .await?;
        Ok(Response::new(DocumentResponse {
            document: Some(Self::model_to_proto(&document)),
        }))
    }

    async fn list_documents(
        &self,
        request: Request<ListDocumentsRequest>,
    ) -> Result<Response<ListDocumentsResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let documents = self.documents.list_documents(&user).await?;
        Ok(Response::new(ListDocumentsResponse {
            documents: documents.iter().map(Self::model_to_proto).collect(),
        }))
    }

    async fn set_favorite(
        &self,
        request: Request<SetFavoriteRequest>,
    ) -> Result<Response<DocumentResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let req = request.into_inner();
        let document = self
            .documents
            .set_favorite(&user, req.id, req.is_favorite)
            .await?;
        Ok(Response::new(DocumentResponse {
            document: Some(Self::model_to_proto(&document)),
        }))
    }

    async fn delete_document(
        &self,
        request: Request<DocumentIdRequest>,
    ) -> Result<Response<Empty>, Status> {
        let user = get_authenticated_user(&request)?;
        let id = request.into_inner().id;
        self.documents.delete_document(&user, id).await?;
        Ok(Response::new(Empty {}))
    }

    async fn download_document(
        &self,
        request: Request<DocumentIdRequest>,
    ) -> Result<Response<DownloadDocumentResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let id = request.into_inner().id;
        let (document, data) = self.documents.download_document(&user, id).await?;
        tracing::debug!("Document download: id={}, bytes={}", document.id, data.len());
        Ok(Response::new(DownloadDocumentResponse {
            file_path: document.file_path,
            data,
        }))
    }
}
