use std::collections::HashMap;

use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{
    Document, FreightInput, FreightItem, MaintenanceForm, MaintenanceItem, NewDocument,
    NewMaintenanceItem, Notification, Order, OrderDraft, OrderStatus, OrderWithQuote, QuoteDraft,
    ShippingQuote,
};

use super::store::{OrderFilter, QuoteFilter, RecordStore};

const FREIGHT_COLUMNS: &str = "id, user_id::text AS user_id, classification, make, model, year, \
     commodity, pallet_count, length, width, height, dimension_unit, weight, weight_unit, \
     serial_number, inventory_number, in_progress, is_complete, created_at";

const MAINTENANCE_COLUMNS: &str = "id, user_id::text AS user_id, freight_id, inventory_number, \
     serial_number, classification, make, model, year, commodity, pallet_count, length, width, \
     height, dimension_unit, weight, weight_unit, urgency, parts_needed, part_description, \
     assigned_crew, schedule_date, notes, created_at";

const QUOTE_COLUMNS: &str = "id, user_id::text AS user_id, first_name, last_name, email, phone, \
     company, origin_street, origin_city, origin_state, origin_zip, destination_street, \
     destination_city, destination_state, destination_zip, freight_description, classification, \
     pallet_count, weight, due_date, price, is_archived, created_at";

const ORDER_COLUMNS: &str = "id, user_id::text AS user_id, quote_id, origin_street, \
     destination_street, earliest_pickup, latest_pickup, notes, status, cancellation_reason, \
     created_at";

const DOCUMENT_COLUMNS: &str =
    "id, user_id::text AS user_id, title, file_path, is_favorite, order_id, created_at";

const NOTIFICATION_COLUMNS: &str = "id, user_id::text AS user_id, message, is_read, created_at";

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Record store backed by Postgres through sqlx.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn quotes_by_id(&self, ids: &[i64]) -> AppResult<HashMap<i64, ShippingQuote>> {
        let sql = format!(
            "SELECT {} FROM shipping_quotes WHERE id = ANY($1)",
            QUOTE_COLUMNS
        );
        let quotes: Vec<ShippingQuote> = sqlx::query_as(&sql)
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;
        Ok(quotes.into_iter().map(|q| (q.id, q)).collect())
    }
}

#[tonic::async_trait]
impl RecordStore for PgRecordStore {
    async fn list_freight_items(&self, owner: Option<&str>) -> AppResult<Vec<FreightItem>> {
        let sql = format!(
            "SELECT {} FROM freight_items \
             WHERE ($1::uuid IS NULL OR user_id = $1::uuid) \
             ORDER BY created_at DESC, id DESC",
            FREIGHT_COLUMNS
        );
        Ok(sqlx::query_as(&sql).bind(owner).fetch_all(&self.pool).await?)
    }

    async fn get_freight_item(&self, id: i64) -> AppResult<Option<FreightItem>> {
        let sql = format!("SELECT {} FROM freight_items WHERE id = $1", FREIGHT_COLUMNS);
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn find_freight_by_inventory_number(
        &self,
        inventory_number: &str,
    ) -> AppResult<Option<FreightItem>> {
        let sql = format!(
            "SELECT {} FROM freight_items WHERE inventory_number = $1 LIMIT 1",
            FREIGHT_COLUMNS
        );
        Ok(sqlx::query_as(&sql)
            .bind(inventory_number)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_freight_item(
        &self,
        user_id: &str,
        input: &FreightInput,
    ) -> AppResult<FreightItem> {
        let d = &input.details;
        let sql = format!(
            "INSERT INTO freight_items (user_id, classification, make, model, year, commodity, \
             pallet_count, length, width, height, dimension_unit, weight, weight_unit, \
             serial_number, inventory_number) \
             VALUES ($1::uuid, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             RETURNING {}",
            FREIGHT_COLUMNS
        );
        sqlx::query_as(&sql)
            .bind(user_id)
            .bind(d.classification.as_str())
            .bind(&d.make)
            .bind(&d.model)
            .bind(d.year)
            .bind(&d.commodity)
            .bind(d.pallet_count)
            .bind(d.length)
            .bind(d.width)
            .bind(d.height)
            .bind(&d.dimension_unit)
            .bind(d.weight)
            .bind(&d.weight_unit)
            .bind(&input.serial_number)
            .bind(&input.inventory_number)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::DuplicateInventoryNumber(input.inventory_number.clone())
                } else {
                    AppError::Database(e)
                }
            })
    }

    async fn update_freight_item(
        &self,
        id: i64,
        input: &FreightInput,
    ) -> AppResult<Option<FreightItem>> {
        let d = &input.details;
        let sql = format!(
            "UPDATE freight_items SET classification = $1, make = $2, model = $3, year = $4, \
             commodity = $5, pallet_count = $6, length = $7, width = $8, height = $9, \
             dimension_unit = $10, weight = $11, weight_unit = $12, serial_number = $13, \
             inventory_number = $14 \
             WHERE id = $15 \
             RETURNING {}",
            FREIGHT_COLUMNS
        );
        sqlx::query_as(&sql)
            .bind(d.classification.as_str())
            .bind(&d.make)
            .bind(&d.model)
            .bind(d.year)
            .bind(&d.commodity)
            .bind(d.pallet_count)
            .bind(d.length)
            .bind(d.width)
            .bind(d.height)
            .bind(&d.dimension_unit)
            .bind(d.weight)
            .bind(&d.weight_unit)
            .bind(&input.serial_number)
            .bind(&input.inventory_number)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::DuplicateInventoryNumber(input.inventory_number.clone())
                } else {
                    AppError::Database(e)
                }
            })
    }

    async fn set_freight_progress(
        &self,
        id: i64,
        in_progress: bool,
        is_complete: bool,
    ) -> AppResult<Option<FreightItem>> {
        let sql = format!(
            "UPDATE freight_items SET in_progress = $1, is_complete = $2 WHERE id = $3 \
             RETURNING {}",
            FREIGHT_COLUMNS
        );
        Ok(sqlx::query_as(&sql)
            .bind(in_progress)
            .bind(is_complete)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete_freight_item(&self, id: i64) -> AppResult<bool> {
        let rows_affected = sqlx::query("DELETE FROM freight_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows_affected > 0)
    }

    async fn find_maintenance_matching(
        &self,
        inventory_number: &str,
        serial_number: Option<&str>,
    ) -> AppResult<Vec<MaintenanceItem>> {
        let sql = format!(
            "SELECT {} FROM maintenance_items \
             WHERE inventory_number = $1 OR ($2::text IS NOT NULL AND serial_number = $2)",
            MAINTENANCE_COLUMNS
        );
        Ok(sqlx::query_as(&sql)
            .bind(inventory_number)
            .bind(serial_number)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn list_maintenance_items(
        &self,
        owner: Option<&str>,
    ) -> AppResult<Vec<MaintenanceItem>> {
        let sql = format!(
            "SELECT {} FROM maintenance_items \
             WHERE ($1::uuid IS NULL OR user_id = $1::uuid) \
             ORDER BY (urgency = 'urgent') DESC, created_at DESC, id DESC",
            MAINTENANCE_COLUMNS
        );
        Ok(sqlx::query_as(&sql).bind(owner).fetch_all(&self.pool).await?)
    }

    async fn get_maintenance_item(&self, id: i64) -> AppResult<Option<MaintenanceItem>> {
        let sql = format!(
            "SELECT {} FROM maintenance_items WHERE id = $1",
            MAINTENANCE_COLUMNS
        );
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn insert_maintenance_item(
        &self,
        user_id: &str,
        item: &NewMaintenanceItem,
    ) -> AppResult<MaintenanceItem> {
        let s = &item.snapshot;
        let f = &item.form;
        let sql = format!(
            "INSERT INTO maintenance_items (user_id, freight_id, inventory_number, serial_number, \
             classification, make, model, year, commodity, pallet_count, length, width, height, \
             dimension_unit, weight, weight_unit, urgency, parts_needed, part_description, \
             assigned_crew, schedule_date, notes) \
             VALUES ($1::uuid, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, \
             $16, $17, $18, $19, $20, $21, $22) \
             RETURNING {}",
            MAINTENANCE_COLUMNS
        );
        sqlx::query_as(&sql)
            .bind(user_id)
            .bind(item.freight_id)
            .bind(&item.inventory_number)
            .bind(&item.serial_number)
            .bind(s.classification.as_str())
            .bind(&s.make)
            .bind(&s.model)
            .bind(s.year)
            .bind(&s.commodity)
            .bind(s.pallet_count)
            .bind(s.length)
            .bind(s.width)
            .bind(s.height)
            .bind(&s.dimension_unit)
            .bind(s.weight)
            .bind(&s.weight_unit)
            .bind(f.urgency.as_str())
            .bind(f.parts_needed)
            .bind(&f.part_description)
            .bind(&f.assigned_crew)
            .bind(f.schedule_date)
            .bind(&f.notes)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::AlreadyInMaintenance(item.inventory_number.clone())
                } else {
                    AppError::Database(e)
                }
            })
    }

    async fn update_maintenance_item(
        &self,
        id: i64,
        form: &MaintenanceForm,
    ) -> AppResult<Option<MaintenanceItem>> {
        let sql = format!(
            "UPDATE maintenance_items SET urgency = $1, parts_needed = $2, part_description = $3, \
             assigned_crew = $4, schedule_date = $5, notes = $6 \
             WHERE id = $7 \
             RETURNING {}",
            MAINTENANCE_COLUMNS
        );
        Ok(sqlx::query_as(&sql)
            .bind(form.urgency.as_str())
            .bind(form.parts_needed)
            .bind(&form.part_description)
            .bind(&form.assigned_crew)
            .bind(form.schedule_date)
            .bind(&form.notes)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete_maintenance_item(&self, id: i64) -> AppResult<bool> {
        let rows_affected = sqlx::query("DELETE FROM maintenance_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows_affected > 0)
    }

    async fn insert_quote(&self, user_id: &str, draft: &QuoteDraft) -> AppResult<ShippingQuote> {
        let sql = format!(
            "INSERT INTO shipping_quotes (user_id, first_name, last_name, email, phone, company, \
             origin_street, origin_city, origin_state, origin_zip, destination_street, \
             destination_city, destination_state, destination_zip, freight_description, \
             classification, pallet_count, weight, due_date) \
             VALUES ($1::uuid, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, \
             $16, $17, $18, $19) \
             RETURNING {}",
            QUOTE_COLUMNS
        );
        Ok(sqlx::query_as(&sql)
            .bind(user_id)
            .bind(&draft.first_name)
            .bind(&draft.last_name)
            .bind(&draft.email)
            .bind(&draft.phone)
            .bind(&draft.company)
            .bind(&draft.origin.street)
            .bind(&draft.origin.city)
            .bind(&draft.origin.state)
            .bind(&draft.origin.zip)
            .bind(&draft.destination.street)
            .bind(&draft.destination.city)
            .bind(&draft.destination.state)
            .bind(&draft.destination.zip)
            .bind(&draft.freight_description)
            .bind(draft.classification.as_str())
            .bind(draft.pallet_count)
            .bind(draft.weight)
            .bind(draft.due_date)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn get_quote(&self, id: i64) -> AppResult<Option<ShippingQuote>> {
        let sql = format!("SELECT {} FROM shipping_quotes WHERE id = $1", QUOTE_COLUMNS);
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn list_quotes(&self, filter: &QuoteFilter) -> AppResult<Vec<ShippingQuote>> {
        let sql = format!(
            "SELECT {} FROM shipping_quotes \
             WHERE ($1::uuid IS NULL OR user_id = $1::uuid) \
             AND ($2 OR NOT is_archived) \
             ORDER BY due_date ASC, id ASC",
            QUOTE_COLUMNS
        );
        Ok(sqlx::query_as(&sql)
            .bind(filter.owner.as_deref())
            .bind(filter.include_archived)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn set_quote_price(&self, id: i64, price: f64) -> AppResult<Option<ShippingQuote>> {
        let sql = format!(
            "UPDATE shipping_quotes SET price = $1 WHERE id = $2 RETURNING {}",
            QUOTE_COLUMNS
        );
        Ok(sqlx::query_as(&sql)
            .bind(price)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn archive_quote(&self, id: i64) -> AppResult<Option<ShippingQuote>> {
        let sql = format!(
            "UPDATE shipping_quotes SET is_archived = TRUE WHERE id = $1 RETURNING {}",
            QUOTE_COLUMNS
        );
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn insert_order(
        &self,
        user_id: &str,
        quote_id: i64,
        draft: &OrderDraft,
    ) -> AppResult<Order> {
        let sql = format!(
            "INSERT INTO orders (user_id, quote_id, origin_street, destination_street, \
             earliest_pickup, latest_pickup, notes, status) \
             VALUES ($1::uuid, $2, $3, $4, $5, $6, $7, 'pending') \
             RETURNING {}",
            ORDER_COLUMNS
        );
        sqlx::query_as(&sql)
            .bind(user_id)
            .bind(quote_id)
            .bind(&draft.origin_street)
            .bind(&draft.destination_street)
            .bind(draft.earliest_pickup)
            .bind(draft.latest_pickup)
            .bind(&draft.notes)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::InvalidState(format!(
                        "An order already exists for quote {}",
                        quote_id
                    ))
                } else {
                    AppError::Database(e)
                }
            })
    }

    async fn get_order(&self, id: i64) -> AppResult<Option<Order>> {
        let sql = format!("SELECT {} FROM orders WHERE id = $1", ORDER_COLUMNS);
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn find_order_by_quote(&self, quote_id: i64) -> AppResult<Option<Order>> {
        let sql = format!("SELECT {} FROM orders WHERE quote_id = $1", ORDER_COLUMNS);
        Ok(sqlx::query_as(&sql)
            .bind(quote_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list_orders(&self, filter: &OrderFilter) -> AppResult<Vec<OrderWithQuote>> {
        let sql = format!(
            "SELECT {} FROM orders \
             WHERE ($1::uuid IS NULL OR user_id = $1::uuid) \
             AND ($2::text IS NULL OR status = $2) \
             ORDER BY created_at DESC, id DESC",
            ORDER_COLUMNS
        );
        let orders: Vec<Order> = sqlx::query_as(&sql)
            .bind(filter.owner.as_deref())
            .bind(filter.status.map(|s| s.as_str()))
            .fetch_all(&self.pool)
            .await?;

        let quote_ids: Vec<i64> = orders.iter().map(|o| o.quote_id).collect();
        let quotes = self.quotes_by_id(&quote_ids).await?;

        orders
            .into_iter()
            .map(|order| {
                let quote = quotes.get(&order.quote_id).cloned().ok_or_else(|| {
                    AppError::Internal(format!(
                        "Order {} references missing quote {}",
                        order.id, order.quote_id
                    ))
                })?;
                Ok(OrderWithQuote { order, quote })
            })
            .collect()
    }

    async fn update_order_status(
        &self,
        id: i64,
        status: OrderStatus,
        cancellation_reason: Option<&str>,
    ) -> AppResult<Option<Order>> {
        let sql = format!(
            "UPDATE orders SET status = $1, cancellation_reason = $2 WHERE id = $3 RETURNING {}",
            ORDER_COLUMNS
        );
        Ok(sqlx::query_as(&sql)
            .bind(status.as_str())
            .bind(cancellation_reason)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_document(&self, document: &NewDocument) -> AppResult<Document> {
        let sql = format!(
            "INSERT INTO documents (user_id, title, file_path, order_id) \
             VALUES ($1::uuid, $2, $3, $4) \
             RETURNING {}",
            DOCUMENT_COLUMNS
        );
        Ok(sqlx::query_as(&sql)
            .bind(&document.user_id)
            .bind(&document.title)
            .bind(&document.file_path)
            .bind(document.order_id)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn get_document(&self, id: i64) -> AppResult<Option<Document>> {
        let sql = format!("SELECT {} FROM documents WHERE id = $1", DOCUMENT_COLUMNS);
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn list_documents(&self, owner: Option<&str>) -> AppResult<Vec<Document>> {
        let sql = format!(
            "SELECT {} FROM documents \
             WHERE ($1::uuid IS NULL OR user_id = $1::uuid) \
             ORDER BY is_favorite DESC, created_at DESC, id DESC",
            DOCUMENT_COLUMNS
        );
        Ok(sqlx::query_as(&sql).bind(owner).fetch_all(&self.pool).await?)
    }

    async fn set_document_favorite(
        &self,
        id: i64,
        is_favorite: bool,
    ) -> AppResult<Option<Document>> {
        let sql = format!(
            "UPDATE documents SET is_favorite = $1 WHERE id = $2 RETURNING {}",
            DOCUMENT_COLUMNS
        );
        Ok(sqlx::query_as(&sql)
            .bind(is_favorite)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete_document(&self, id: i64) -> AppResult<bool> {
        let rows_affected = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows_affected > 0)
    }

    async fn insert_notification(&self, user_id: &str, message: &str) -> AppResult<Notification> {
        let sql = format!(
            "INSERT INTO notifications (user_id, message) VALUES ($1::uuid, $2) RETURNING {}",
            NOTIFICATION_COLUMNS
        );
        Ok(sqlx::query_as(&sql)
            .bind(user_id)
            .bind(message)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn get_notification(&self, id: i64) -> AppResult<Option<Notification>> {
        let sql = format!(
            "SELECT {} FROM notifications WHERE id = $1",
            NOTIFICATION_COLUMNS
        );
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn list_notifications(
        &self,
        user_id: &str,
        unread_only: bool,
    ) -> AppResult<Vec<Notification>> {
        let sql = format!(
            "SELECT {} FROM notifications \
             WHERE user_id = $1::uuid AND (NOT $2 OR NOT is_read) \
             ORDER BY created_at DESC, id DESC",
            NOTIFICATION_COLUMNS
        );
        Ok(sqlx::query_as(&sql)
            .bind(user_id)
            .bind(unread_only)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn mark_notification_read(&self, id: i64) -> AppResult<Option<Notification>> {
        let sql = format!(
            "UPDATE notifications SET is_read = TRUE WHERE id = $1 RETURNING {}",
            NOTIFICATION_COLUMNS
        );
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?)
    }
}
