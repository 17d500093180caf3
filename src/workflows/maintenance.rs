use std::sync::Arc;

use crate::db::RecordStore;
use crate::error::{AppError, AppResult};
use crate::middleware::AuthenticatedUser;
use crate::models::{FreightItem, MaintenanceForm, MaintenanceItem, NewMaintenanceItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferState {
    InInventory,
    PendingTransfer,
    InMaintenance,
}

impl TransferState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferState::InInventory => "in_inventory",
            TransferState::PendingTransfer => "pending_transfer",
            TransferState::InMaintenance => "in_maintenance",
        }
    }
}

/// Moves freight items into the maintenance queue.
#[derive(Clone)]
pub struct MaintenanceTransfer {
    store: Arc<dyn RecordStore>,
}

/// A transfer that has captured its source item and is waiting for the
/// maintenance form.
///
/// The snapshot is taken once in [`MaintenanceTransfer::begin_transfer`] and
/// is what gets copied onto the maintenance item; later edits to the freight
/// item do not flow into it.
pub struct PendingTransfer {
    store: Arc<dyn RecordStore>,
    user: AuthenticatedUser,
    source: FreightItem,
}

impl MaintenanceTransfer {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    async fn load_source(&self, user: &AuthenticatedUser, freight_id: i64) -> AppResult<FreightItem> {
        self.store
            .get_freight_item(freight_id)
            .await?
            .filter(|item| user.can_access(&item.user_id))
            .ok_or_else(|| AppError::NotFound(format!("Freight item {} not found", freight_id)))
    }

    pub async fn transfer_state(
        &self,
        user: &AuthenticatedUser,
        freight_id: i64,
    ) -> AppResult<TransferState> {
        let source = self.load_source(user, freight_id).await?;
        let matches = self
            .store
            .find_maintenance_matching(&source.inventory_number, source.serial_number.as_deref())
            .await?;
        Ok(if matches.is_empty() {
            TransferState::InInventory
        } else {
            TransferState::InMaintenance
        })
    }

    pub async fn begin_transfer(
        &self,
        user: &AuthenticatedUser,
        freight_id: i64,
    ) -> AppResult<PendingTransfer> {
        let source = self.load_source(user, freight_id).await?;
        tracing::debug!(
            "Maintenance transfer started: freight_id={}, inventory_number={}",
            source.id,
            source.inventory_number
        );
        Ok(PendingTransfer {
            store: self.store.clone(),
            user: user.clone(),
            source,
        })
    }

    pub async fn transfer(
        &self,
        user: &AuthenticatedUser,
        freight_id: i64,
        form: MaintenanceForm,
    ) -> AppResult<MaintenanceItem> {
        self.begin_transfer(user, freight_id).await?.submit(form).await
    }

    /// Urgent items first, then newest.
    pub async fn list_maintenance_items(
        &self,
        user: &AuthenticatedUser,
    ) -> AppResult<Vec<MaintenanceItem>> {
        self.store.list_maintenance_items(user.owner_scope()).await
    }

    async fn load_owned(&self, user: &AuthenticatedUser, id: i64) -> AppResult<MaintenanceItem> {
        self.store
            .get_maintenance_item(id)
            .await?
            .filter(|item| user.can_access(&item.user_id))
            .ok_or_else(|| AppError::NotFound(format!("Maintenance item {} not found", id)))
    }

    pub async fn update_maintenance_item(
        &self,
        user: &AuthenticatedUser,
        id: i64,
        form: MaintenanceForm,
    ) -> AppResult<MaintenanceItem> {
        let form = form.validated()?;
        self.load_owned(user, id).await?;
        let item = self
            .store
            .update_maintenance_item(id, &form)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Maintenance item {} not found", id)))?;
        tracing::info!(
            "Maintenance item updated: id={}, urgency={}",
            item.id,
            item.urgency
        );
        Ok(item)
    }

    /// Removes the item from maintenance. The source freight item, if it
    /// still exists, can be transferred again afterwards.
    pub async fn delete_maintenance_item(&self, user: &AuthenticatedUser, id: i64) -> AppResult<()> {
        self.load_owned(user, id).await?;
        if !self.store.delete_maintenance_item(id).await? {
            return Err(AppError::NotFound(format!("Maintenance item {} not found", id)));
        }
        tracing::info!("Maintenance item deleted: id={}, user_id={}", id, user.user_id);
        Ok(())
    }
}

impl PendingTransfer {
    pub fn state(&self) -> TransferState {
        TransferState::PendingTransfer
    }

    pub fn source(&self) -> &FreightItem {
        &self.source
    }

    /// Validates the form and creates the maintenance item.
    ///
    /// Fails with `AlreadyInMaintenance` when any maintenance item matches the
    /// source's inventory number or serial number. The transfer stays usable
    /// after a failure.
    pub async fn submit(&self, form: MaintenanceForm) -> AppResult<MaintenanceItem> {
        let form = form.validated()?;
        let source = &self.source;

        let existing = self
            .store
            .find_maintenance_matching(&source.inventory_number, source.serial_number.as_deref())
            .await?;
        if let Some(found) = existing.first() {
            tracing::debug!(
                "Transfer rejected: freight_id={} matches maintenance item {}",
                source.id,
                found.id
            );
            return Err(AppError::AlreadyInMaintenance(source.inventory_number.clone()));
        }

        let item = self
            .store
            .insert_maintenance_item(
                &self.user.user_id,
                &NewMaintenanceItem {
                    freight_id: source.id,
                    inventory_number: source.inventory_number.clone(),
                    serial_number: source.serial_number.clone(),
                    snapshot: source.details.clone(),
                    form,
                },
            )
            .await?;

        tracing::info!(
            "Freight item transferred to maintenance: freight_id={}, maintenance_id={}, urgency={}",
            source.id,
            item.id,
            item.urgency
        );
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MAINTENANCE_ITEMS;
    use crate::db::MemoryRecordStore;
    use crate::models::Urgency;
    use crate::workflows::freight::FreightInventory;
    use crate::workflows::testing::freight_draft;

    struct Fixture {
        store: Arc<MemoryRecordStore>,
        inventory: FreightInventory,
        maintenance: MaintenanceTransfer,
        user: AuthenticatedUser,
    }

    fn setup() -> Fixture {
        let store = Arc::new(MemoryRecordStore::new());
        Fixture {
            inventory: FreightInventory::new(store.clone()),
            maintenance: MaintenanceTransfer::new(store.clone()),
            store,
            user: AuthenticatedUser::new("alice"),
        }
    }

    #[tokio::test]
    async fn test_add_then_transfer_twice() {
        let f = setup();
        let item = f
            .inventory
            .add_freight_item(&f.user, freight_draft("INV-1", Some("SN-1")))
            .await
            .unwrap();
        assert_eq!(
            f.maintenance.transfer_state(&f.user, item.id).await.unwrap(),
            TransferState::InInventory
        );

        let form = MaintenanceForm::new(Urgency::Urgent).with_notes("leak");
        let moved = f
            .maintenance
            .transfer(&f.user, item.id, form.clone())
            .await
            .unwrap();
        assert_eq!(moved.freight_id, Some(item.id));
        assert_eq!(moved.inventory_number, "INV-1");
        assert_eq!(moved.serial_number.as_deref(), Some("SN-1"));
        assert_eq!(moved.urgency, Urgency::Urgent);
        assert_eq!(moved.notes.as_deref(), Some("leak"));
        assert_eq!(
            f.maintenance.transfer_state(&f.user, item.id).await.unwrap(),
            TransferState::InMaintenance
        );

        let err = f
            .maintenance
            .transfer(&f.user, item.id, form)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyInMaintenance(n) if n == "INV-1"));
        assert_eq!(
            f.maintenance.list_maintenance_items(&f.user).await.unwrap().len(),
            1
        );

        // The source stays in inventory.
        assert!(f.inventory.get_freight_item(&f.user, item.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_serial_number_match_blocks_transfer() {
        let f = setup();
        let first = f
            .inventory
            .add_freight_item(&f.user, freight_draft("INV-1", Some("SN-9")))
            .await
            .unwrap();
        let second = f
            .inventory
            .add_freight_item(&f.user, freight_draft("INV-2", Some("SN-9")))
            .await
            .unwrap();

        f.maintenance
            .transfer(&f.user, first.id, MaintenanceForm::new(Urgency::Schedule))
            .await
            .unwrap();
        let err = f
            .maintenance
            .transfer(&f.user, second.id, MaintenanceForm::new(Urgency::Schedule))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyInMaintenance(_)));
    }

    #[tokio::test]
    async fn test_blank_serial_does_not_match_other_items() {
        let f = setup();
        let first = f
            .inventory
            .add_freight_item(&f.user, freight_draft("INV-1", None))
            .await
            .unwrap();
        let second = f
            .inventory
            .add_freight_item(&f.user, freight_draft("INV-2", None))
            .await
            .unwrap();

        for id in [first.id, second.id] {
            f.maintenance
                .transfer(&f.user, id, MaintenanceForm::new(Urgency::Schedule))
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_snapshot_is_not_resynced() {
        let f = setup();
        let mut draft = freight_draft("INV-1", None);
        draft.make = Some("Caterpillar".to_string());
        let item = f
            .inventory
            .add_freight_item(&f.user, draft.clone())
            .await
            .unwrap();

        let pending = f.maintenance.begin_transfer(&f.user, item.id).await.unwrap();
        assert_eq!(pending.state(), TransferState::PendingTransfer);

        draft.make = Some("Komatsu".to_string());
        f.inventory
            .edit_freight_item(&f.user, item.id, draft)
            .await
            .unwrap();

        let moved = pending
            .submit(MaintenanceForm::new(Urgency::Schedule))
            .await
            .unwrap();
        assert_eq!(moved.snapshot.make.as_deref(), Some("Caterpillar"));
    }

    #[tokio::test]
    async fn test_pending_transfer_survives_failed_submit() {
        let f = setup();
        let item = f
            .inventory
            .add_freight_item(&f.user, freight_draft("INV-1", None))
            .await
            .unwrap();
        let pending = f.maintenance.begin_transfer(&f.user, item.id).await.unwrap();

        let missing_description = MaintenanceForm {
            parts_needed: true,
            ..MaintenanceForm::new(Urgency::Urgent)
        };
        assert!(matches!(
            pending.submit(missing_description).await,
            Err(AppError::InvalidInput(_))
        ));

        f.store.set_unavailable(MAINTENANCE_ITEMS, true);
        assert!(pending
            .submit(MaintenanceForm::new(Urgency::Urgent))
            .await
            .is_err());
        f.store.set_unavailable(MAINTENANCE_ITEMS, false);

        let moved = pending
            .submit(MaintenanceForm::new(Urgency::Urgent))
            .await
            .unwrap();
        assert_eq!(moved.freight_id, Some(item.id));
    }

    #[tokio::test]
    async fn test_delete_source_keeps_maintenance_item() {
        let f = setup();
        let item = f
            .inventory
            .add_freight_item(&f.user, freight_draft("INV-1", None))
            .await
            .unwrap();
        let moved = f
            .maintenance
            .transfer(&f.user, item.id, MaintenanceForm::new(Urgency::Urgent))
            .await
            .unwrap();

        f.inventory.delete_freight_item(&f.user, item.id).await.unwrap();

        let items = f.maintenance.list_maintenance_items(&f.user).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, moved.id);
        assert_eq!(items[0].freight_id, None);
        assert_eq!(items[0].inventory_number, "INV-1");
    }

    #[tokio::test]
    async fn test_update_and_delete_maintenance_item() {
        let f = setup();
        let item = f
            .inventory
            .add_freight_item(&f.user, freight_draft("INV-1", None))
            .await
            .unwrap();
        let moved = f
            .maintenance
            .transfer(&f.user, item.id, MaintenanceForm::new(Urgency::Schedule))
            .await
            .unwrap();

        let update = MaintenanceForm {
            parts_needed: true,
            part_description: Some("hydraulic pump".to_string()),
            assigned_crew: Some("Crew B".to_string()),
            ..MaintenanceForm::new(Urgency::Urgent)
        };
        let updated = f
            .maintenance
            .update_maintenance_item(&f.user, moved.id, update)
            .await
            .unwrap();
        assert_eq!(updated.urgency, Urgency::Urgent);
        assert_eq!(updated.assigned_crew.as_deref(), Some("Crew B"));

        let stranger = AuthenticatedUser::new("mallory");
        assert!(matches!(
            f.maintenance.delete_maintenance_item(&stranger, moved.id).await,
            Err(AppError::NotFound(_))
        ));

        f.maintenance
            .delete_maintenance_item(&f.user, moved.id)
            .await
            .unwrap();
        assert_eq!(
            f.maintenance.transfer_state(&f.user, item.id).await.unwrap(),
            TransferState::InInventory
        );
    }
}
