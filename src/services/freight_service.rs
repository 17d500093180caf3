use tonic::{Request, Response, Status};

use crate::middleware::get_authenticated_user;
use crate::models::{FreightDetails, FreightDraft, FreightItem};
use crate::proto::common::Empty;
use crate::proto::inventory::freight_service_server::FreightService;
use crate::proto::inventory::{
    self as pb, AddFreightItemRequest, BulkImportRequest, BulkImportResponse,
    EditFreightItemRequest, FreightItemIdRequest, FreightItemResponse, ListFreightItemsRequest,
    ListFreightItemsResponse, SetProgressRequest,
};
use crate::workflows::FreightInventory;

use super::convert::{optional_string, timestamp};

pub struct FreightServiceImpl {
    inventory: FreightInventory,
}

impl FreightServiceImpl {
    pub fn new(inventory: FreightInventory) -> Self {
        Self { inventory }
    }

    fn draft_from_proto(draft: pb::FreightDraft) -> FreightDraft {
        FreightDraft {
            classification: optional_string(draft.classification),
            make: optional_string(draft.make),
            model: optional_string(draft.model),
            year: draft.year,
            commodity: optional_string(draft.commodity),
            pallet_count: draft.pallet_count,
            length: draft.length,
            width: draft.width,
            height: draft.height,
            dimension_unit: optional_string(draft.dimension_unit),
            weight: draft.weight,
            weight_unit: optional_string(draft.weight_unit),
            serial_number: optional_string(draft.serial_number),
            inventory_number: optional_string(draft.inventory_number),
        }
    }

    fn model_to_proto(item: &FreightItem) -> pb::FreightItem {
        let FreightDetails {
            classification,
            make,
            model,
            year,
            commodity,
            pallet_count,
            length,
            width,
            height,
            dimension_unit,
            weight,
            weight_unit,
        } = &item.details;
        pb::FreightItem {
            id: item.id,
            user_id: item.user_id.clone(),
            classification: classification.to_string(),
            make: make.clone().unwrap_or_default(),
            model: model.clone().unwrap_or_default(),
            year: *year,
            commodity: commodity.clone().unwrap_or_default(),
            pallet_count: *pallet_count,
            length: *length,
            width: *width,
            height: *height,
            dimension_unit: dimension_unit.clone(),
            weight: *weight,
            weight_unit: weight_unit.clone(),
            serial_number: item.serial_number.clone().unwrap_or_default(),
            inventory_number: item.inventory_number.clone(),
            in_progress: item.in_progress,
            is_complete: item.is_complete,
            created_at: timestamp(&item.created_at),
        }
    }

    fn item_response(item: &FreightItem) -> Response<FreightItemResponse> {
        Response::new(FreightItemResponse {
            item: Some(Self::model_to_proto(item)),
        })
    }
}

#[tonic::async_trait]
impl FreightService for FreightServiceImpl {
    async fn add_freight_item(
        &self,
        request: Request<AddFreightItemRequest>,
    ) -> Result<Response<FreightItemResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let draft = request
            .into_inner()
            .draft
            .ok_or_else(|| Status::invalid_argument("draft is required"))?;

        let item = self
            .inventory
            .add_freight_item(&user, Self::draft_from_proto(draft))
            .await?;
        Ok(Self::item_response(&item))
    }

    async fn bulk_import(
        &self,
        request: Request<BulkImportRequest>,
    ) -> Result<Response<BulkImportResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let rows = request
            .into_inner()
            .rows
            .into_iter()
            .map(Self::draft_from_proto)
            .collect();

        let report = self.inventory.bulk_import(&user, rows).await?;
        Ok(Response::new(BulkImportResponse {
            imported: report.imported.iter().map(Self::model_to_proto).collect(),
            skipped: report
                .skipped
                .iter()
                .map(|s| pb::SkippedRow {
                    row: s.row as i32,
                    inventory_number: s.inventory_number.clone().unwrap_or_default(),
                    reason: s.reason.clone(),
                })
                .collect(),
            total_rows: report.total_rows as i32,
            message: report.message(),
        }))
    }

    async fn edit_freight_item(
        &self,
        request: Request<EditFreightItemRequest>,
    ) -> Result<Response<FreightItemResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let req = request.into_inner();
        let draft = req
            .draft
            .ok_or_else(|| Status::invalid_argument("draft is required"))?;

        let item = self
            .inventory
            .edit_freight_item(&user, req.id, Self::draft_from_proto(draft))
            .await?;
        Ok(Self::item_response(&item))
    }

    async fn delete_freight_item(
        &self,
        request: Request<FreightItemIdRequest>,
    ) -> Result<Response<Empty>, Status> {
        let user = get_authenticated_user(&request)?;
        let id = request.into_inner().id;
        self.inventory.delete_freight_item(&user, id).await?;
        Ok(Response::new(Empty {}))
    }

    async fn get_freight_item(
        &self,
        request: Request<FreightItemIdRequest>,
    ) -> Result<Response<FreightItemResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let id = request.into_inner().id;
        let item = self.inventory.get_freight_item(&user, id).await?;
        Ok(Self::item_response(&item))
    }

    async fn list_freight_items(
        &self,
        request: Request<ListFreightItemsRequest>,
    ) -> Result<Response<ListFreightItemsResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let items = self.inventory.list_freight_items(&user).await?;
        Ok(Response::new(ListFreightItemsResponse {
            items: items.iter().map(Self::model_to_proto).collect(),
        }))
    }

    async fn set_progress(
        &self,
        request: Request<SetProgressRequest>,
    ) -> Result<Response<FreightItemResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let req = request.into_inner();
        let item = self
            .inventory
            .set_progress(&user, req.id, req.in_progress, req.is_complete)
            .await?;
        Ok(Self::item_response(&item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryRecordStore;
    use crate::middleware::AuthenticatedUser;
    use std::sync::Arc;

    fn service() -> FreightServiceImpl {
        FreightServiceImpl::new(FreightInventory::new(Arc::new(MemoryRecordStore::new())))
    }

    fn authed<T>(message: T) -> Request<T> {
        let mut request = Request::new(message);
        request
            .extensions_mut()
            .insert(AuthenticatedUser::new("alice"));
        request
    }

    fn draft(inventory_number: &str) -> pb::FreightDraft {
        pb::FreightDraft {
            inventory_number: inventory_number.to_string(),
            serial_number: "SN-1".to_string(),
            weight: Some(1200.0),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_unauthenticated_request_rejected() {
        let status = service()
            .list_freight_items(Request::new(ListFreightItemsRequest {}))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::Unauthenticated);
    }

    #[tokio::test]
    async fn test_add_applies_defaults_and_reports_duplicates() {
        let svc = service();
        let item = svc
            .add_freight_item(authed(AddFreightItemRequest {
                draft: Some(draft("INV-1")),
            }))
            .await
            .unwrap()
            .into_inner()
            .item
            .unwrap();
        assert_eq!(item.classification, "equipment");
        assert_eq!(item.dimension_unit, "ft");
        assert_eq!(item.weight_unit, "lbs");
        assert_eq!(item.serial_number, "SN-1");

        let status = svc
            .add_freight_item(authed(AddFreightItemRequest {
                draft: Some(draft("INV-1")),
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::AlreadyExists);
        assert!(status.message().contains("INV-1"));
    }

    #[tokio::test]
    async fn test_bulk_import_response() {
        let svc = service();
        let response = svc
            .bulk_import(authed(BulkImportRequest {
                rows: vec![draft("INV-1"), draft(""), draft("INV-1")],
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.imported.len(), 1);
        assert_eq!(response.total_rows, 3);
        let rows: Vec<i32> = response.skipped.iter().map(|s| s.row).collect();
        assert_eq!(rows, vec![2, 3]);
    }
}
