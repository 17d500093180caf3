use crate::error::AppResult;
use crate::models::{
    Document, FreightInput, FreightItem, MaintenanceForm, MaintenanceItem, NewDocument,
    NewMaintenanceItem, Notification, Order, OrderDraft, OrderStatus, OrderWithQuote, QuoteDraft,
    ShippingQuote,
};

#[derive(Debug, Clone, Default)]
pub struct QuoteFilter {
    /// `None` reads across all owners (admin views).
    pub owner: Option<String>,
    pub include_archived: bool,
}

#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// `None` reads across all owners (admin views).
    pub owner: Option<String>,
    pub status: Option<OrderStatus>,
}

/// Record store over the named collections.
///
/// Every call is a single request against one collection and is atomic at
/// the row level only. Implementations must enforce the uniqueness rules
/// themselves (inventory numbers, maintenance pairs, one order per quote)
/// and report violations with the same errors the workflows raise from
/// their pre-checks.
#[tonic::async_trait]
pub trait RecordStore: Send + Sync {
    // freight_items
    async fn list_freight_items(&self, owner: Option<&str>) -> AppResult<Vec<FreightItem>>;
    async fn get_freight_item(&self, id: i64) -> AppResult<Option<FreightItem>>;
    async fn find_freight_by_inventory_number(
        &self,
        inventory_number: &str,
    ) -> AppResult<Option<FreightItem>>;
    async fn insert_freight_item(&self, user_id: &str, input: &FreightInput)
        -> AppResult<FreightItem>;
    async fn update_freight_item(
        &self,
        id: i64,
        input: &FreightInput,
    ) -> AppResult<Option<FreightItem>>;
    async fn set_freight_progress(
        &self,
        id: i64,
        in_progress: bool,
        is_complete: bool,
    ) -> AppResult<Option<FreightItem>>;
    async fn delete_freight_item(&self, id: i64) -> AppResult<bool>;

    // maintenance_items
    /// Items matching `inventory_number`, or `serial_number` when one is given.
    async fn find_maintenance_matching(
        &self,
        inventory_number: &str,
        serial_number: Option<&str>,
    ) -> AppResult<Vec<MaintenanceItem>>;
    async fn list_maintenance_items(&self, owner: Option<&str>)
        -> AppResult<Vec<MaintenanceItem>>;
    async fn get_maintenance_item(&self, id: i64) -> AppResult<Option<MaintenanceItem>>;
    async fn insert_maintenance_item(
        &self,
        user_id: &str,
        item: &NewMaintenanceItem,
    ) -> AppResult<MaintenanceItem>;
    async fn update_maintenance_item(
        &self,
        id: i64,
        form: &MaintenanceForm,
    ) -> AppResult<Option<MaintenanceItem>>;
    async fn delete_maintenance_item(&self, id: i64) -> AppResult<bool>;

    // shipping_quotes
    async fn insert_quote(&self, user_id: &str, draft: &QuoteDraft) -> AppResult<ShippingQuote>;
    async fn get_quote(&self, id: i64) -> AppResult<Option<ShippingQuote>>;
    async fn list_quotes(&self, filter: &QuoteFilter) -> AppResult<Vec<ShippingQuote>>;
    async fn set_quote_price(&self, id: i64, price: f64) -> AppResult<Option<ShippingQuote>>;
    async fn archive_quote(&self, id: i64) -> AppResult<Option<ShippingQuote>>;

    // orders
    async fn insert_order(
        &self,
        user_id: &str,
        quote_id: i64,
        draft: &OrderDraft,
    ) -> AppResult<Order>;
    async fn get_order(&self, id: i64) -> AppResult<Option<Order>>;
    async fn find_order_by_quote(&self, quote_id: i64) -> AppResult<Option<Order>>;
    /// Orders joined with their quotes, newest first.
    async fn list_orders(&self, filter: &OrderFilter) -> AppResult<Vec<OrderWithQuote>>;
    async fn update_order_status(
        &self,
        id: i64,
        status: OrderStatus,
        cancellation_reason: Option<&str>,
    ) -> AppResult<Option<Order>>;

    // documents
    async fn insert_document(&self, document: &NewDocument) -> AppResult<Document>;
    async fn get_document(&self, id: i64) -> AppResult<Option<Document>>;
    async fn list_documents(&self, owner: Option<&str>) -> AppResult<Vec<Document>>;
    async fn set_document_favorite(
        &self,
        id: i64,
        is_favorite: bool,
    ) -> AppResult<Option<Document>>;
    async fn delete_document(&self, id: i64) -> AppResult<bool>;

    // notifications
    async fn insert_notification(&self, user_id: &str, message: &str) -> AppResult<Notification>;
    async fn get_notification(&self, id: i64) -> AppResult<Option<Notification>>;
    async fn list_notifications(
        &self,
        user_id: &str,
        unread_only: bool,
    ) -> AppResult<Vec<Notification>>;
    async fn mark_notification_read(&self, id: i64) -> AppResult<Option<Notification>>;
}
