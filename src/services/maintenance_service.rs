use tonic::{Request, Response, Status};

use crate::middleware::get_authenticated_user;
use crate::models::{MaintenanceForm, MaintenanceItem};
use crate::proto::common::Empty;
use crate::proto::maintenance::maintenance_service_server::MaintenanceService;
use crate::proto::maintenance::{
    self as pb, ListMaintenanceItemsRequest, ListMaintenanceItemsResponse,
    MaintenanceItemIdRequest, MaintenanceItemResponse, TransferRequest, TransferStateRequest,
    TransferStateResponse, UpdateMaintenanceItemRequest,
};
use crate::workflows::MaintenanceTransfer;

use super::convert::{optional_string, parse_optional_date, timestamp};

pub struct MaintenanceServiceImpl {
    maintenance: MaintenanceTransfer,
}

impl MaintenanceServiceImpl {
    pub fn new(maintenance: MaintenanceTransfer) -> Self {
        Self { maintenance }
    }

    fn form_from_proto(form: Option<pb::TransferForm>) -> Result<MaintenanceForm, Status> {
        let form = form.ok_or_else(|| Status::invalid_argument("form is required"))?;
        Ok(MaintenanceForm {
            urgency: form.urgency.trim().parse()?,
            parts_needed: form.parts_needed,
            part_description: optional_string(form.part_description),
            assigned_crew: optional_string(form.assigned_crew),
            schedule_date: parse_optional_date("schedule_date", &form.schedule_date)?,
            notes: optional_string(form.notes),
        })
    }

    fn model_to_proto(item: &MaintenanceItem) -> pb::MaintenanceItem {
        let snapshot = &item.snapshot;
        pb::MaintenanceItem {
            id: item.id,
            user_id: item.user_id.clone(),
            freight_id: item.freight_id,
            inventory_number: item.inventory_number.clone(),
            serial_number: item.serial_number.clone().unwrap_or_default(),
            snapshot: Some(pb::FreightSnapshot {
                classification: snapshot.classification.to_string(),
                make: snapshot.make.clone().unwrap_or_default(),
                model: snapshot.model.clone().unwrap_or_default(),
                year: snapshot.year,
                commodity: snapshot.commodity.clone().unwrap_or_default(),
                pallet_count: snapshot.pallet_count,
                length: snapshot.length,
                width: snapshot.width,
                height: snapshot.height,
                dimension_unit: snapshot.dimension_unit.clone(),
                weight: snapshot.weight,
                weight_unit: snapshot.weight_unit.clone(),
            }),
            urgency: item.urgency.to_string(),
            parts_needed: item.parts_needed,
            part_description: item.part_description.clone().unwrap_or_default(),
            assigned_crew: item.assigned_crew.clone().unwrap_or_default(),
            schedule_date: item
                .schedule_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            notes: item.notes.clone().unwrap_or_default(),
            created_at: timestamp(&item.created_at),
        }
    }
}

#[tonic::async_trait]
impl MaintenanceService for MaintenanceServiceImpl {
    async fn transfer_to_maintenance(
        &self,
        request: Request<TransferRequest>,
    ) -> Result<Response<MaintenanceItemResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let req = request.into_inner();
        let form = Self::form_from_proto(req.form)?;

        let item = self
            .maintenance
            .transfer(&user, req.freight_id, form)
            .await?;
        Ok(Response::new(MaintenanceItemResponse {
            item: Some(Self::model_to_proto(&item)),
        }))
    }

    async fn get_transfer_state(
        &self,
        request: Request<TransferStateRequest>,
    ) -> Result<Response<TransferStateResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let freight_id = request.into_inner().freight_id;
        let state = self.maintenance.transfer_state(&user, freight_id).await?;
        Ok(Response::new(TransferStateResponse {
            state: state.as_str().to_string(),
        }))
    }

    async fn list_maintenance_items(
        &self,
        request: Request<ListMaintenanceItemsRequest>,
    ) -> Result<Response<ListMaintenanceItemsResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let items = self.maintenance.list_maintenance_items(&user).await?;
        Ok(Response::new(ListMaintenanceItemsResponse {
            items: items.iter().map(Self::model_to_proto).collect(),
        }))
    }

    async fn update_maintenance_item(
        &self,
        request: Request<UpdateMaintenanceItemRequest>,
    ) -> Result<Response<MaintenanceItemResponse>, Status> {
        let user = get_authenticated_user(&request)?;
        let req = request.into_inner();
        let form = Self::form_from_proto(req.form)?;

        let item = self
            .maintenance
            .update_maintenance_item(&user, req.id, form)
            .await?;
        Ok(Response::new(MaintenanceItemResponse {
            item: Some(Self::model_to_proto(&item)),
        }))
    }

    async fn delete_maintenance_item(
        &self,
        request: Request<MaintenanceItemIdRequest>,
    ) -> Result<Response<Empty>, Status> {
        let user = get_authenticated_user(&request)?;
        let id = request.into_inner().id;
        self.maintenance.delete_maintenance_item(&user, id).await?;
        Ok(Response::new(Empty {}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Urgency;

    #[test]
    fn test_form_from_proto() {
        let form = MaintenanceServiceImpl::form_from_proto(Some(pb::TransferForm {
            urgency: "urgent".to_string(),
            schedule_date: "2026-10-30".to_string(),
            notes: "leak".to_string(),
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(form.urgency, Urgency::Urgent);
        assert_eq!(form.schedule_date.map(|d| d.to_string()).as_deref(), Some("2026-10-30"));
        assert_eq!(form.notes.as_deref(), Some("leak"));
        assert_eq!(form.assigned_crew, None);
    }

    #[test]
    fn test_form_rejects_unknown_urgency() {
        let status = MaintenanceServiceImpl::form_from_proto(Some(pb::TransferForm {
            urgency: "whenever".to_string(),
            ..Default::default()
        }))
        .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }
}
