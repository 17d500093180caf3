use std::collections::HashSet;
use std::sync::Mutex;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::models::{
    Document, FreightInput, FreightItem, MaintenanceForm, MaintenanceItem, NewDocument,
    NewMaintenanceItem, Notification, Order, OrderDraft, OrderStatus, OrderWithQuote, QuoteDraft,
    ShippingQuote,
};

use super::store::{OrderFilter, QuoteFilter, RecordStore};

pub const FREIGHT_ITEMS: &str = "freight_items";
pub const MAINTENANCE_ITEMS: &str = "maintenance_items";
pub const SHIPPING_QUOTES: &str = "shipping_quotes";
pub const ORDERS: &str = "orders";
pub const DOCUMENTS: &str = "documents";
pub const NOTIFICATIONS: &str = "notifications";

#[derive(Default)]
struct Tables {
    next_id: i64,
    freight: Vec<FreightItem>,
    maintenance: Vec<MaintenanceItem>,
    quotes: Vec<ShippingQuote>,
    orders: Vec<Order>,
    documents: Vec<Document>,
    notifications: Vec<Notification>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

fn owned_by(user_id: &str, owner: Option<&str>) -> bool {
    owner.map_or(true, |o| o == user_id)
}

/// In-process record store with the same uniqueness rules as the Postgres schema.
///
/// Used when no `DATABASE_URL` is configured and by the workflow tests.
/// Collections can be marked unavailable to simulate remote failures.
#[derive(Default)]
pub struct MemoryRecordStore {
    tables: RwLock<Tables>,
    unavailable: Mutex<HashSet<&'static str>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call touching `collection` fail until re-enabled.
    pub fn set_unavailable(&self, collection: &'static str, unavailable: bool) {
        let mut set = self
            .unavailable
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if unavailable {
            set.insert(collection);
        } else {
            set.remove(collection);
        }
    }

    fn check(&self, collection: &'static str) -> AppResult<()> {
        let set = self
            .unavailable
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if set.contains(collection) {
            return Err(AppError::Internal(format!(
                "{} is unavailable",
                collection
            )));
        }
        Ok(())
    }
}

#[tonic::async_trait]
impl RecordStore for MemoryRecordStore {
    async fn list_freight_items(&self, owner: Option<&str>) -> AppResult<Vec<FreightItem>> {
        self.check(FREIGHT_ITEMS)?;
        let tables = self.tables.read().await;
        let mut items: Vec<FreightItem> = tables
            .freight
            .iter()
            .filter(|f| owned_by(&f.user_id, owner))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(items)
    }

    async fn get_freight_item(&self, id: i64) -> AppResult<Option<FreightItem>> {
        self.check(FREIGHT_ITEMS)?;
        let tables = self.tables.read().await;
        Ok(tables.freight.iter().find(|f| f.id == id).cloned())
    }

    async fn find_freight_by_inventory_number(
        &self,
        inventory_number: &str,
    ) -> AppResult<Option<FreightItem>> {
        self.check(FREIGHT_ITEMS)?;
        let tables = self.tables.read().await;
        Ok(tables
            .freight
            .iter()
            .find(|f| f.inventory_number == inventory_number)
            .cloned())
    }

    async fn insert_freight_item(
        &self,
        user_id: &str,
        input: &FreightInput,
    ) -> AppResult<FreightItem> {
        self.check(FREIGHT_ITEMS)?;
        let mut tables = self.tables.write().await;
        if tables
            .freight
            .iter()
            .any(|f| f.inventory_number == input.inventory_number)
        {
            return Err(AppError::DuplicateInventoryNumber(
                input.inventory_number.clone(),
            ));
        }
        let item = FreightItem {
            id: tables.next_id(),
            user_id: user_id.to_string(),
            details: input.details.clone(),
            serial_number: input.serial_number.clone(),
            inventory_number: input.inventory_number.clone(),
            in_progress: false,
            is_complete: false,
            created_at: Utc::now(),
        };
        tables.freight.push(item.clone());
        Ok(item)
    }

    async fn update_freight_item(
        &self,
        id: i64,
        input: &FreightInput,
    ) -> AppResult<Option<FreightItem>> {
        self.check(FREIGHT_ITEMS)?;
        let mut tables = self.tables.write().await;
        if tables
            .freight
            .iter()
            .any(|f| f.id != id && f.inventory_number == input.inventory_number)
        {
            return Err(AppError::DuplicateInventoryNumber(
                input.inventory_number.clone(),
            ));
        }
        Ok(tables.freight.iter_mut().find(|f| f.id == id).map(|f| {
            f.details = input.details.clone();
            f.serial_number = input.serial_number.clone();
            f.inventory_number = input.inventory_number.clone();
            f.clone()
        }))
    }

    async fn set_freight_progress(
        &self,
        id: i64,
        in_progress: bool,
        is_complete: bool,
    ) -> AppResult<Option<FreightItem>> {
        self.check(FREIGHT_ITEMS)?;
        let mut tables = self.tables.write().await;
        Ok(tables.freight.iter_mut().find(|f| f.id == id).map(|f| {
            f.in_progress = in_progress;
            f.is_complete = is_complete;
            f.clone()
        }))
    }

    async fn delete_freight_item(&self, id: i64) -> AppResult<bool> {
        self.check(FREIGHT_ITEMS)?;
        let mut tables = self.tables.write().await;
        let before = tables.freight.len();
        tables.freight.retain(|f| f.id != id);
        let deleted = tables.freight.len() < before;
        if deleted {
            // ON DELETE SET NULL
            for m in tables.maintenance.iter_mut().filter(|m| m.freight_id == Some(id)) {
                m.freight_id = None;
            }
        }
        Ok(deleted)
    }

    async fn find_maintenance_matching(
        &self,
        inventory_number: &str,
        serial_number: Option<&str>,
    ) -> AppResult<Vec<MaintenanceItem>> {
        self.check(MAINTENANCE_ITEMS)?;
        let tables = self.tables.read().await;
        Ok(tables
            .maintenance
            .iter()
            .filter(|m| {
                m.inventory_number == inventory_number
                    || (serial_number.is_some() && m.serial_number.as_deref() == serial_number)
            })
            .cloned()
            .collect())
    }

    async fn list_maintenance_items(
        &self,
        owner: Option<&str>,
    ) -> AppResult<Vec<MaintenanceItem>> {
        self.check(MAINTENANCE_ITEMS)?;
        let tables = self.tables.read().await;
        let mut items: Vec<MaintenanceItem> = tables
            .maintenance
            .iter()
            .filter(|m| owned_by(&m.user_id, owner))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            let urgent = |m: &MaintenanceItem| m.urgency == crate::models::Urgency::Urgent;
            urgent(b)
                .cmp(&urgent(a))
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.cmp(&a.id))
        });
        Ok(items)
    }

    async fn get_maintenance_item(&self, id: i64) -> AppResult<Option<MaintenanceItem>> {
        self.check(MAINTENANCE_ITEMS)?;
        let tables = self.tables.read().await;
        Ok(tables.maintenance.iter().find(|m| m.id == id).cloned())
    }

    async fn insert_maintenance_item(
        &self,
        user_id: &str,
        item: &NewMaintenanceItem,
    ) -> AppResult<MaintenanceItem> {
        self.check(MAINTENANCE_ITEMS)?;
        let mut tables = self.tables.write().await;
        let serial = item.serial_number.as_deref().unwrap_or("");
        if tables.maintenance.iter().any(|m| {
            m.inventory_number == item.inventory_number
                && m.serial_number.as_deref().unwrap_or("") == serial
        }) {
            return Err(AppError::AlreadyInMaintenance(item.inventory_number.clone()));
        }
        let form = &item.form;
        let record = MaintenanceItem {
            id: tables.next_id(),
            user_id: user_id.to_string(),
            freight_id: Some(item.freight_id),
            inventory_number: item.inventory_number.clone(),
            serial_number: item.serial_number.clone(),
            snapshot: item.snapshot.clone(),
            urgency: form.urgency,
            parts_needed: form.parts_needed,
            part_description: form.part_description.clone(),
            assigned_crew: form.assigned_crew.clone(),
            schedule_date: form.schedule_date,
            notes: form.notes.clone(),
            created_at: Utc::now(),
        };
        tables.maintenance.push(record.clone());
        Ok(record)
    }

    async fn update_maintenance_item(
        &self,
        id: i64,
        form: &MaintenanceForm,
    ) -> AppResult<Option<MaintenanceItem>> {
        self.check(MAINTENANCE_ITEMS)?;
        let mut tables = self.tables.write().await;
        Ok(tables.maintenance.iter_mut().find(|m| m.id == id).map(|m| {
            m.urgency = form.urgency;
            m.parts_needed = form.parts_needed;
            m.part_description = form.part_description.clone();
            m.assigned_crew = form.assigned_crew.clone();
            m.schedule_date = form.schedule_date;
            m.notes = form.notes.clone();
            m.clone()
        }))
    }

    async fn delete_maintenance_item(&self, id: i64) -> AppResult<bool> {
        self.check(MAINTENANCE_ITEMS)?;
        let mut tables = self.tables.write().await;
        let before = tables.maintenance.len();
        tables.maintenance.retain(|m| m.id != id);
        Ok(tables.maintenance.len() < before)
    }

    async fn insert_quote(&self, user_id: &str, draft: &QuoteDraft) -> AppResult<ShippingQuote> {
        self.check(SHIPPING_QUOTES)?;
        let mut tables = self.tables.write().await;
        let quote = ShippingQuote {
            id: tables.next_id(),
            user_id: user_id.to_string(),
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            company: draft.company.clone(),
            origin_street: draft.origin.street.clone(),
            origin_city: draft.origin.city.clone(),
            origin_state: draft.origin.state.clone(),
            origin_zip: draft.origin.zip.clone(),
            destination_street: draft.destination.street.clone(),
            destination_city: draft.destination.city.clone(),
            destination_state: draft.destination.state.clone(),
            destination_zip: draft.destination.zip.clone(),
            freight_description: draft.freight_description.clone(),
            classification: draft.classification,
            pallet_count: draft.pallet_count,
            weight: draft.weight,
            due_date: draft.due_date,
            price: None,
            is_archived: false,
            created_at: Utc::now(),
        };
        tables.quotes.push(quote.clone());
        Ok(quote)
    }

    async fn get_quote(&self, id: i64) -> AppResult<Option<ShippingQuote>> {
        self.check(SHIPPING_QUOTES)?;
        let tables = self.tables.read().await;
        Ok(tables.quotes.iter().find(|q| q.id == id).cloned())
    }

    async fn list_quotes(&self, filter: &QuoteFilter) -> AppResult<Vec<ShippingQuote>> {
        self.check(SHIPPING_QUOTES)?;
        let tables = self.tables.read().await;
        let mut quotes: Vec<ShippingQuote> = tables
            .quotes
            .iter()
            .filter(|q| owned_by(&q.user_id, filter.owner.as_deref()))
            .filter(|q| filter.include_archived || !q.is_archived)
            .cloned()
            .collect();
        quotes.sort_by(|a, b| a.due_date.cmp(&b.due_date).then(a.id.cmp(&b.id)));
        Ok(quotes)
    }

    async fn set_quote_price(&self, id: i64, price: f64) -> AppResult<Option<ShippingQuote>> {
        self.check(SHIPPING_QUOTES)?;
        let mut tables = self.tables.write().await;
        Ok(tables.quotes.iter_mut().find(|q| q.id == id).map(|q| {
            q.price = Some(price);
            q.clone()
        }))
    }

    async fn archive_quote(&self, id: i64) -> AppResult<Option<ShippingQuote>> {
        self.check(SHIPPING_QUOTES)?;
        let mut tables = self.tables.write().await;
        Ok(tables.quotes.iter_mut().find(|q| q.id == id).map(|q| {
            q.is_archived = true;
            q.clone()
        }))
    }

    async fn insert_order(
        &self,
        user_id: &str,
        quote_id: i64,
        draft: &OrderDraft,
    ) -> AppResult<Order> {
        self.check(ORDERS)?;
        let mut tables = self.tables.write().await;
        if !tables.quotes.iter().any(|q| q.id == quote_id) {
            return Err(AppError::NotFound(format!("Quote {} not found", quote_id)));
        }
        if tables.orders.iter().any(|o| o.quote_id == quote_id) {
            return Err(AppError::InvalidState(format!(
                "An order already exists for quote {}",
                quote_id
            )));
        }
        let order = Order {
            id: tables.next_id(),
            user_id: user_id.to_string(),
            quote_id,
            origin_street: draft.origin_street.clone(),
            destination_street: draft.destination_street.clone(),
            earliest_pickup: draft.earliest_pickup,
            latest_pickup: draft.latest_pickup,
            notes: draft.notes.clone(),
            status: OrderStatus::Pending,
            cancellation_reason: None,
            created_at: Utc::now(),
        };
        tables.orders.push(order.clone());
        Ok(order)
    }

    async fn get_order(&self, id: i64) -> AppResult<Option<Order>> {
        self.check(ORDERS)?;
        let tables = self.tables.read().await;
        Ok(tables.orders.iter().find(|o| o.id == id).cloned())
    }

    async fn find_order_by_quote(&self, quote_id: i64) -> AppResult<Option<Order>> {
        self.check(ORDERS)?;
        let tables = self.tables.read().await;
        Ok(tables.orders.iter().find(|o| o.quote_id == quote_id).cloned())
    }

    async fn list_orders(&self, filter: &OrderFilter) -> AppResult<Vec<OrderWithQuote>> {
        self.check(ORDERS)?;
        let tables = self.tables.read().await;
        let mut orders: Vec<OrderWithQuote> = tables
            .orders
            .iter()
            .filter(|o| owned_by(&o.user_id, filter.owner.as_deref()))
            .filter(|o| filter.status.map_or(true, |s| o.status == s))
            .map(|order| {
                let quote = tables
                    .quotes
                    .iter()
                    .find(|q| q.id == order.quote_id)
                    .cloned()
                    .ok_or_else(|| {
                        AppError::Internal(format!(
                            "Order {} references missing quote {}",
                            order.id, order.quote_id
                        ))
                    })?;
                Ok(OrderWithQuote {
                    order: order.clone(),
                    quote,
                })
            })
            .collect::<AppResult<_>>()?;
        orders.sort_by(|a, b| {
            b.order
                .created_at
                .cmp(&a.order.created_at)
                .then(b.order.id.cmp(&a.order.id))
        });
        Ok(orders)
    }

    async fn update_order_status(
        &self,
        id: i64,
        status: OrderStatus,
        cancellation_reason: Option<&str>,
    ) -> AppResult<Option<Order>> {
        self.check(ORDERS)?;
        let mut tables = self.tables.write().await;
        Ok(tables.orders.iter_mut().find(|o| o.id == id).map(|o| {
            o.status = status;
            o.cancellation_reason = cancellation_reason.map(str::to_string);
            o.clone()
        }))
    }

    async fn insert_document(&self, document: &NewDocument) -> AppResult<Document> {
        self.check(DOCUMENTS)?;
        let mut tables = self.tables.write().await;
        let record = Document {
            id: tables.next_id(),
            user_id: document.user_id.clone(),
            title: document.title.clone(),
            file_path: document.file_path.clone(),
            is_favorite: false,
            order_id: document.order_id,
            created_at: Utc::now(),
        };
        tables.documents.push(record.clone());
        Ok(record)
    }

    async fn get_document(&self, id: i64) -> AppResult<Option<Document>> {
        self.check(DOCUMENTS)?;
        let tables = self.tables.read().await;
        Ok(tables.documents.iter().find(|d| d.id == id).cloned())
    }

    async fn list_documents(&self, owner: Option<&str>) -> AppResult<Vec<Document>> {
        self.check(DOCUMENTS)?;
        let tables = self.tables.read().await;
        let mut documents: Vec<Document> = tables
            .documents
            .iter()
            .filter(|d| owned_by(&d.user_id, owner))
            .cloned()
            .collect();
        documents.sort_by(|a, b| {
            b.is_favorite
                .cmp(&a.is_favorite)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.cmp(&a.id))
        });
        Ok(documents)
    }

    async fn set_document_favorite(
        &self,
        id: i64,
        is_favorite: bool,
    ) -> AppResult<Option<Document>> {
        self.check(DOCUMENTS)?;
        let mut tables = self.tables.write().await;
        Ok(tables.documents.iter_mut().find(|d| d.id == id).map(|d| {
            d.is_favorite = is_favorite;
            d.clone()
        }))
    }

    async fn delete_document(&self, id: i64) -> AppResult<bool> {
        self.check(DOCUMENTS)?;
        let mut tables = self.tables.write().await;
        let before = tables.documents.len();
        tables.documents.retain(|d| d.id != id);
        Ok(tables.documents.len() < before)
    }

    async fn insert_notification(&self, user_id: &str, message: &str) -> AppResult<Notification> {
        self.check(NOTIFICATIONS)?;
        let mut tables = self.tables.write().await;
        let notification = Notification {
            id: tables.next_id(),
            user_id: user_id.to_string(),
            message: message.to_string(),
            is_read: false,
            created_at: Utc::now(),
        };
        tables.notifications.push(notification.clone());
        Ok(notification)
    }

    async fn get_notification(&self, id: i64) -> AppResult<Option<Notification>> {
        self.check(NOTIFICATIONS)?;
        let tables = self.tables.read().await;
        Ok(tables.notifications.iter().find(|n| n.id == id).cloned())
    }

    async fn list_notifications(
        &self,
        user_id: &str,
        unread_only: bool,
    ) -> AppResult<Vec<Notification>> {
        self.check(NOTIFICATIONS)?;
        let tables = self.tables.read().await;
        let mut notifications: Vec<Notification> = tables
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id && (!unread_only || !n.is_read))
            .cloned()
            .collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(notifications)
    }

    async fn mark_notification_read(&self, id: i64) -> AppResult<Option<Notification>> {
        self.check(NOTIFICATIONS)?;
        let mut tables = self.tables.write().await;
        Ok(tables.notifications.iter_mut().find(|n| n.id == id).map(|n| {
            n.is_read = true;
            n.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FreightDraft;

    fn input(inventory_number: &str) -> FreightInput {
        FreightDraft {
            inventory_number: Some(inventory_number.to_string()),
            ..Default::default()
        }
        .into_input()
        .unwrap()
    }

    #[tokio::test]
    async fn test_insert_enforces_unique_inventory_number() {
        let store = MemoryRecordStore::new();
        store.insert_freight_item("u1", &input("INV-1")).await.unwrap();

        let err = store.insert_freight_item("u2", &input("INV-1")).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateInventoryNumber(n) if n == "INV-1"));
    }

    #[tokio::test]
    async fn test_update_allows_keeping_own_inventory_number() {
        let store = MemoryRecordStore::new();
        let item = store.insert_freight_item("u1", &input("INV-1")).await.unwrap();
        store.insert_freight_item("u1", &input("INV-2")).await.unwrap();

        assert!(store.update_freight_item(item.id, &input("INV-1")).await.unwrap().is_some());
        let err = store.update_freight_item(item.id, &input("INV-2")).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateInventoryNumber(_)));
    }

    #[tokio::test]
    async fn test_unavailable_collection_fails_calls() {
        let store = MemoryRecordStore::new();
        store.set_unavailable(FREIGHT_ITEMS, true);
        assert!(store.list_freight_items(None).await.is_err());

        store.set_unavailable(FREIGHT_ITEMS, false);
        assert!(store.list_freight_items(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_filters_by_owner() {
        let store = MemoryRecordStore::new();
        store.insert_freight_item("u1", &input("INV-1")).await.unwrap();
        store.insert_freight_item("u2", &input("INV-2")).await.unwrap();

        assert_eq!(store.list_freight_items(Some("u1")).await.unwrap().len(), 1);
        assert_eq!(store.list_freight_items(None).await.unwrap().len(), 2);
    }
}
