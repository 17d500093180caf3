use std::sync::Arc;

use crate::db::RecordStore;
use crate::error::{AppError, AppResult};
use crate::middleware::AuthenticatedUser;
use crate::models::{FreightDraft, FreightItem};

/// A row left out of a bulk import, numbered from 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub row: usize,
    pub inventory_number: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub imported: Vec<FreightItem>,
    pub skipped: Vec<SkippedRow>,
    pub total_rows: usize,
}

impl ImportReport {
    pub fn message(&self) -> String {
        if self.skipped.is_empty() {
            format!(
                "Imported {} items out of {} rows",
                self.imported.len(),
                self.total_rows
            )
        } else {
            format!(
                "Imported {} items out of {} rows, skipped {}",
                self.imported.len(),
                self.total_rows,
                self.skipped.len()
            )
        }
    }
}

/// Owns freight records: create, edit, delete, bulk import and the
/// inventory number duplicate check.
#[derive(Clone)]
pub struct FreightInventory {
    store: Arc<dyn RecordStore>,
}

impl FreightInventory {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Early exit for an inventory number that is already taken. The store's
    /// unique constraint still decides when two submissions race.
    async fn ensure_available(&self, inventory_number: &str, except_id: Option<i64>) -> AppResult<()> {
        match self
            .store
            .find_freight_by_inventory_number(inventory_number)
            .await?
        {
            Some(existing) if Some(existing.id) != except_id => Err(
                AppError::DuplicateInventoryNumber(inventory_number.to_string()),
            ),
            _ => Ok(()),
        }
    }

    async fn load_owned(&self, user: &AuthenticatedUser, id: i64) -> AppResult<FreightItem> {
        self.store
            .get_freight_item(id)
            .await?
            .filter(|item| user.can_access(&item.user_id))
            .ok_or_else(|| AppError::NotFound(format!("Freight item {} not found", id)))
    }

    pub async fn add_freight_item(
        &self,
        user: &AuthenticatedUser,
        draft: FreightDraft,
    ) -> AppResult<FreightItem> {
        let input = draft.into_input()?;
        self.ensure_available(&input.inventory_number, None).await?;

        let item = self.store.insert_freight_item(&user.user_id, &input).await?;
        tracing::info!(
            "Freight item added: id={}, inventory_number={}, user_id={}",
            item.id,
            item.inventory_number,
            user.user_id
        );
        Ok(item)
    }

    /// Imports rows one at a time. Invalid and duplicate rows are skipped
    /// with a warning and the rest of the batch still goes in; there is no
    /// all-or-nothing transaction.
    pub async fn bulk_import(
        &self,
        user: &AuthenticatedUser,
        rows: Vec<FreightDraft>,
    ) -> AppResult<ImportReport> {
        let mut report = ImportReport {
            total_rows: rows.len(),
            ..Default::default()
        };

        tracing::info!(
            "Bulk import started: user_id={}, rows={}",
            user.user_id,
            report.total_rows
        );

        for (index, draft) in rows.into_iter().enumerate() {
            let row = index + 1;
            let inventory_number = draft.inventory_number().map(str::to_string);

            let Some(number) = inventory_number.clone() else {
                tracing::warn!("Bulk import row {} skipped: missing inventory number", row);
                report.skipped.push(SkippedRow {
                    row,
                    inventory_number: None,
                    reason: "inventory_number is required".to_string(),
                });
                continue;
            };

            if self
                .store
                .find_freight_by_inventory_number(&number)
                .await?
                .is_some()
            {
                tracing::warn!(
                    "Bulk import row {} skipped: inventory number {} already exists",
                    row,
                    number
                );
                report.skipped.push(SkippedRow {
                    row,
                    inventory_number,
                    reason: format!("Inventory number {} already exists", number),
                });
                continue;
            }

            let input = match draft.into_input() {
                Ok(input) => input,
                Err(e) => {
                    tracing::warn!("Bulk import row {} skipped: {}", row, e);
                    report.skipped.push(SkippedRow {
                        row,
                        inventory_number,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            match self.store.insert_freight_item(&user.user_id, &input).await {
                Ok(item) => {
                    tracing::debug!(
                        "Bulk import row {} inserted: id={}, inventory_number={}",
                        row,
                        item.id,
                        item.inventory_number
                    );
                    report.imported.push(item);
                }
                Err(e) => {
                    tracing::error!("Bulk import row {} failed: {}", row, e);
                    report.skipped.push(SkippedRow {
                        row,
                        inventory_number,
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            "Bulk import finished: user_id={}, {}",
            user.user_id,
            report.message()
        );
        Ok(report)
    }

    /// Full-record update. No version check: the last write wins.
    pub async fn edit_freight_item(
        &self,
        user: &AuthenticatedUser,
        id: i64,
        draft: FreightDraft,
    ) -> AppResult<FreightItem> {
        let input = draft.into_input()?;
        self.load_owned(user, id).await?;
        self.ensure_available(&input.inventory_number, Some(id)).await?;

        let item = self
            .store
            .update_freight_item(id, &input)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Freight item {} not found", id)))?;
        tracing::info!("Freight item edited: id={}, user_id={}", id, user.user_id);
        Ok(item)
    }

    pub async fn delete_freight_item(&self, user: &AuthenticatedUser, id: i64) -> AppResult<()> {
        self.load_owned(user, id).await?;
        if !self.store.delete_freight_item(id).await? {
            return Err(AppError::NotFound(format!("Freight item {} not found", id)));
        }
        tracing::info!("Freight item deleted: id={}, user_id={}", id, user.user_id);
        Ok(())
    }

    pub async fn get_freight_item(&self, user: &AuthenticatedUser, id: i64) -> AppResult<FreightItem> {
        self.load_owned(user, id).await
    }

    pub async fn list_freight_items(&self, user: &AuthenticatedUser) -> AppResult<Vec<FreightItem>> {
        self.store.list_freight_items(user.owner_scope()).await
    }

    pub async fn set_progress(
        &self,
        user: &AuthenticatedUser,
        id: i64,
        in_progress: bool,
        is_complete: bool,
    ) -> AppResult<FreightItem> {
        self.load_owned(user, id).await?;
        self.store
            .set_freight_progress(id, in_progress, is_complete)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Freight item {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::FREIGHT_ITEMS;
    use crate::db::MemoryRecordStore;
    use crate::workflows::testing::freight_draft;

    fn setup() -> (Arc<MemoryRecordStore>, FreightInventory) {
        let store = Arc::new(MemoryRecordStore::new());
        (store.clone(), FreightInventory::new(store))
    }

    #[tokio::test]
    async fn test_add_rejects_duplicate_inventory_number() {
        let (_, inventory) = setup();
        let alice = AuthenticatedUser::new("alice");
        let bob = AuthenticatedUser::new("bob");

        inventory
            .add_freight_item(&alice, freight_draft("INV-1", Some("SN-1")))
            .await
            .unwrap();
        let err = inventory
            .add_freight_item(&bob, freight_draft("INV-1", Some("SN-2")))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::DuplicateInventoryNumber(n) if n == "INV-1"));
        assert_eq!(inventory.list_freight_items(&AuthenticatedUser::admin("root")).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_bulk_import_skips_duplicates_and_continues() {
        let (_, inventory) = setup();
        let user = AuthenticatedUser::new("alice");
        inventory
            .add_freight_item(&user, freight_draft("INV-1", None))
            .await
            .unwrap();

        let rows = vec![
            freight_draft("INV-1", None),
            freight_draft("INV-2", None),
            FreightDraft::default(),
            freight_draft("INV-2", None),
            freight_draft("INV-3", None),
        ];
        let report = inventory.bulk_import(&user, rows).await.unwrap();

        let imported: Vec<&str> = report
            .imported
            .iter()
            .map(|i| i.inventory_number.as_str())
            .collect();
        assert_eq!(imported, vec!["INV-2", "INV-3"]);
        let skipped_rows: Vec<usize> = report.skipped.iter().map(|s| s.row).collect();
        assert_eq!(skipped_rows, vec![1, 3, 4]);
        assert_eq!(report.total_rows, 5);
        assert_eq!(report.message(), "Imported 2 items out of 5 rows, skipped 3");

        let all = inventory.list_freight_items(&user).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_bulk_import_applies_defaults() {
        let (_, inventory) = setup();
        let user = AuthenticatedUser::new("alice");
        let row = FreightDraft {
            inventory_number: Some("INV-7".to_string()),
            weight: Some(900.0),
            ..Default::default()
        };

        let report = inventory.bulk_import(&user, vec![row]).await.unwrap();
        let item = &report.imported[0];
        assert_eq!(item.details.dimension_unit, "ft");
        assert_eq!(item.details.weight_unit, "lbs");
        assert_eq!(item.details.classification.as_str(), "equipment");
    }

    #[tokio::test]
    async fn test_bulk_import_aborts_when_store_unreachable() {
        let (store, inventory) = setup();
        store.set_unavailable(FREIGHT_ITEMS, true);

        let result = inventory
            .bulk_import(&AuthenticatedUser::new("alice"), vec![freight_draft("INV-1", None)])
            .await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_edit_is_last_write_wins() {
        let (_, inventory) = setup();
        let user = AuthenticatedUser::new("alice");
        let item = inventory
            .add_freight_item(&user, freight_draft("INV-1", None))
            .await
            .unwrap();

        let mut first = freight_draft("INV-1", None);
        first.make = Some("Caterpillar".to_string());
        let mut second = freight_draft("INV-1", None);
        second.make = Some("Komatsu".to_string());

        inventory.edit_freight_item(&user, item.id, first).await.unwrap();
        let edited = inventory.edit_freight_item(&user, item.id, second).await.unwrap();
        assert_eq!(edited.details.make.as_deref(), Some("Komatsu"));
    }

    #[tokio::test]
    async fn test_edit_cannot_take_another_inventory_number() {
        let (_, inventory) = setup();
        let user = AuthenticatedUser::new("alice");
        let first = inventory
            .add_freight_item(&user, freight_draft("INV-1", None))
            .await
            .unwrap();
        inventory
            .add_freight_item(&user, freight_draft("INV-2", None))
            .await
            .unwrap();

        let err = inventory
            .edit_freight_item(&user, first.id, freight_draft("INV-2", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateInventoryNumber(_)));
    }

    #[tokio::test]
    async fn test_delete_is_scoped_to_owner() {
        let (_, inventory) = setup();
        let alice = AuthenticatedUser::new("alice");
        let item = inventory
            .add_freight_item(&alice, freight_draft("INV-1", None))
            .await
            .unwrap();

        let err = inventory
            .delete_freight_item(&AuthenticatedUser::new("mallory"), item.id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        inventory.delete_freight_item(&alice, item.id).await.unwrap();
        assert!(inventory.list_freight_items(&alice).await.unwrap().is_empty());
        assert!(matches!(
            inventory.delete_freight_item(&alice, item.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_set_progress() {
        let (_, inventory) = setup();
        let user = AuthenticatedUser::new("alice");
        let item = inventory
            .add_freight_item(&user, freight_draft("INV-1", None))
            .await
            .unwrap();

        let updated = inventory.set_progress(&user, item.id, true, false).await.unwrap();
        assert!(updated.in_progress);
        assert!(!updated.is_complete);
    }
}
