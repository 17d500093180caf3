use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::db::{OrderFilter, QuoteFilter, RecordStore};
use crate::error::{AppError, AppResult};
use crate::mail::Mail;
use crate::middleware::AuthenticatedUser;
use crate::models::{
    Document, NewDocument, Order, OrderDraft, OrderStatus, OrderSummary, OrderWithQuote,
    QuoteDraft, QuoteState, ShippingQuote,
};
use crate::storage::StorageBackend;

use super::notifications::NotificationDispatcher;
use super::receipt::{render_receipt, RECEIPT_CONTENT_TYPE};

/// A quote together with its derived lifecycle state.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteView {
    pub quote: ShippingQuote,
    pub state: QuoteState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletedOrder {
    pub order: OrderWithQuote,
    pub receipt: Document,
}

/// Drives a shipping quote from request through pricing to an order and its
/// completion or cancellation.
#[derive(Clone)]
pub struct QuoteToOrder {
    store: Arc<dyn RecordStore>,
    storage: Arc<dyn StorageBackend>,
    notifications: NotificationDispatcher,
}

fn require_admin(user: &AuthenticatedUser, action: &str) -> AppResult<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(format!(
            "Only administrators can {}",
            action
        )))
    }
}

impl QuoteToOrder {
    pub fn new(
        store: Arc<dyn RecordStore>,
        storage: Arc<dyn StorageBackend>,
        notifications: NotificationDispatcher,
    ) -> Self {
        Self {
            store,
            storage,
            notifications,
        }
    }

    async fn load_quote(&self, user: &AuthenticatedUser, id: i64) -> AppResult<ShippingQuote> {
        self.store
            .get_quote(id)
            .await?
            .filter(|q| user.can_access(&q.user_id))
            .ok_or_else(|| AppError::NotFound(format!("Quote {} not found", id)))
    }

    async fn load_order(&self, user: &AuthenticatedUser, id: i64) -> AppResult<Order> {
        self.store
            .get_order(id)
            .await?
            .filter(|o| user.can_access(&o.user_id))
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))
    }

    /// Quote referenced by an existing order. A dangling reference is a
    /// store inconsistency, not a caller error.
    async fn quote_for(&self, order: &Order) -> AppResult<ShippingQuote> {
        self.store.get_quote(order.quote_id).await?.ok_or_else(|| {
            AppError::Internal(format!(
                "Quote {} referenced by order {} is missing",
                order.quote_id, order.id
            ))
        })
    }

    async fn view(&self, quote: ShippingQuote) -> AppResult<QuoteView> {
        let order = self.store.find_order_by_quote(quote.id).await?;
        let state = QuoteState::of(&quote, order.as_ref());
        Ok(QuoteView { quote, state })
    }

    pub async fn request_quote(
        &self,
        user: &AuthenticatedUser,
        draft: QuoteDraft,
    ) -> AppResult<ShippingQuote> {
        let draft = draft.validated()?;
        let quote = self.store.insert_quote(&user.user_id, &draft).await?;
        tracing::info!(
            "Quote requested: id={}, user_id={}, {} -> {}",
            quote.id,
            user.user_id,
            quote.origin(),
            quote.destination()
        );
        Ok(quote)
    }

    pub async fn get_quote(&self, user: &AuthenticatedUser, id: i64) -> AppResult<QuoteView> {
        let quote = self.load_quote(user, id).await?;
        self.view(quote).await
    }

    /// Quotes newest first. `pending_only` keeps quotes that have no order yet.
    pub async fn list_quotes(
        &self,
        user: &AuthenticatedUser,
        include_archived: bool,
        pending_only: bool,
    ) -> AppResult<Vec<QuoteView>> {
        let owner = user.owner_scope().map(str::to_string);
        let quotes = self
            .store
            .list_quotes(&QuoteFilter {
                owner: owner.clone(),
                include_archived,
            })
            .await?;
        let orders: HashMap<i64, Order> = self
            .store
            .list_orders(&OrderFilter {
                owner,
                status: None,
            })
            .await?
            .into_iter()
            .map(|v| (v.order.quote_id, v.order))
            .collect();

        Ok(quotes
            .into_iter()
            .filter(|q| !pending_only || !orders.contains_key(&q.id))
            .map(|quote| {
                let state = QuoteState::of(&quote, orders.get(&quote.id));
                QuoteView { quote, state }
            })
            .collect())
    }

    /// Unarchived quotes without an order.
    pub async fn list_pending_quotes(&self, user: &AuthenticatedUser) -> AppResult<Vec<QuoteView>> {
        self.list_quotes(user, false, true).await
    }

    pub async fn set_quote_price(
        &self,
        user: &AuthenticatedUser,
        quote_id: i64,
        price: f64,
    ) -> AppResult<QuoteView> {
        require_admin(user, "price quotes")?;
        if !price.is_finite() || price <= 0.0 {
            return Err(AppError::InvalidInput(
                "price must be a positive amount".to_string(),
            ));
        }
        let quote = self.load_quote(user, quote_id).await?;
        if self.store.find_order_by_quote(quote.id).await?.is_some() {
            return Err(AppError::InvalidState(format!(
                "Quote {} already has an order and can no longer be repriced",
                quote.id
            )));
        }

        let priced = self
            .store
            .set_quote_price(quote.id, price)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quote {} not found", quote_id)))?;
        tracing::info!("Quote priced: id={}, price={:.2}", priced.id, price);

        self.notifications
            .notify_best_effort(
                &priced.user_id,
                &format!(
                    "Your quote #{} from {}, {} to {}, {} has been priced at ${:.2}.",
                    priced.id,
                    priced.origin_city,
                    priced.origin_state,
                    priced.destination_city,
                    priced.destination_state,
                    price
                ),
            )
            .await;

        Ok(QuoteView {
            quote: priced,
            state: QuoteState::Priced,
        })
    }

    /// Flags an unpriced quote for immediate pricing. Nothing is persisted.
    pub async fn acknowledge_urgent(&self, user: &AuthenticatedUser, quote_id: i64) -> AppResult<String> {
        let quote = self.load_quote(user, quote_id).await?;
        if quote.price.is_some() {
            return Err(AppError::InvalidState(format!(
                "Quote {} is already priced; create an order instead",
                quote.id
            )));
        }
        tracing::warn!(
            "Urgent pricing requested: quote_id={}, user_id={}, due_date={}",
            quote.id,
            quote.user_id,
            quote.due_date
        );
        Ok(format!(
            "Urgent request received for quote #{}. Our team will price it as soon as possible.",
            quote.id
        ))
    }

    pub async fn create_order(
        &self,
        user: &AuthenticatedUser,
        quote_id: i64,
        draft: OrderDraft,
    ) -> AppResult<OrderWithQuote> {
        let draft = draft.validated()?;
        let quote = self.load_quote(user, quote_id).await?;
        if quote.is_archived {
            return Err(AppError::InvalidState(format!(
                "Quote {} is archived",
                quote.id
            )));
        }
        if quote.price.is_none() {
            return Err(AppError::InvalidState(format!(
                "Quote {} has not been priced yet; request urgent pricing instead",
                quote.id
            )));
        }
        if self.store.find_order_by_quote(quote.id).await?.is_some() {
            return Err(AppError::InvalidState(format!(
                "An order already exists for quote {}",
                quote.id
            )));
        }

        let order = self
            .store
            .insert_order(&quote.user_id, quote.id, &draft)
            .await?;
        tracing::info!(
            "Order created: id={}, quote_id={}, user_id={}",
            order.id,
            quote.id,
            order.user_id
        );
        Ok(OrderWithQuote { order, quote })
    }

    pub async fn get_order(&self, user: &AuthenticatedUser, id: i64) -> AppResult<OrderWithQuote> {
        let order = self.load_order(user, id).await?;
        let quote = self.quote_for(&order).await?;
        Ok(OrderWithQuote { order, quote })
    }

    pub async fn list_orders(
        &self,
        user: &AuthenticatedUser,
        status: Option<OrderStatus>,
    ) -> AppResult<Vec<OrderWithQuote>> {
        self.store
            .list_orders(&OrderFilter {
                owner: user.owner_scope().map(str::to_string),
                status,
            })
            .await
    }

    /// Renders and stores the receipt, records it as a document for the
    /// order's owner and marks the order completed.
    ///
    /// Steps run in order and stop at the first failure. An uploaded receipt
    /// is left in storage if a later step fails.
    pub async fn complete_order(
        &self,
        user: &AuthenticatedUser,
        order_id: i64,
    ) -> AppResult<CompletedOrder> {
        require_admin(user, "complete orders")?;
        let order = self.load_order(user, order_id).await?;
        if order.status != OrderStatus::Pending {
            return Err(AppError::InvalidState(format!(
                "Order {} is {} and cannot be completed",
                order.id, order.status
            )));
        }
        let quote = self.quote_for(&order).await?;
        let view = OrderWithQuote { order, quote };

        let receipt = render_receipt(&view, Utc::now());
        let key = format!(
            "receipts/{}/order-{}-{}.txt",
            view.order.user_id,
            view.order.id,
            Uuid::new_v4()
        );
        let file_path = self
            .storage
            .upload(&key, receipt.as_bytes(), RECEIPT_CONTENT_TYPE)
            .await?;

        let document = match self
            .store
            .insert_document(&NewDocument {
                user_id: view.order.user_id.clone(),
                title: format!("Receipt for order #{}", view.order.id),
                file_path: file_path.clone(),
                order_id: Some(view.order.id),
            })
            .await
        {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(
                    "Receipt document insert failed, orphaned upload left at {}: {}",
                    file_path,
                    e
                );
                return Err(e);
            }
        };

        let completed = self
            .store
            .update_order_status(view.order.id, OrderStatus::Completed, None)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;
        tracing::info!(
            "Order completed: id={}, receipt_document_id={}, path={}",
            completed.id,
            document.id,
            document.file_path
        );

        self.notifications
            .notify_best_effort(
                &completed.user_id,
                &format!(
                    "Your order #{} has been completed. The receipt is in your documents.",
                    completed.id
                ),
            )
            .await;

        Ok(CompletedOrder {
            order: OrderWithQuote {
                order: completed,
                quote: view.quote,
            },
            receipt: document,
        })
    }

    /// Cancels a pending order. The owner notification and the email to the
    /// quote's contact are best effort and never fail the cancellation.
    pub async fn cancel_order(
        &self,
        user: &AuthenticatedUser,
        order_id: i64,
        reason: &str,
    ) -> AppResult<OrderWithQuote> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(AppError::InvalidInput(
                "A cancellation reason is required".to_string(),
            ));
        }
        let order = self.load_order(user, order_id).await?;
        if order.status != OrderStatus::Pending {
            return Err(AppError::InvalidState(format!(
                "Order {} is {} and cannot be cancelled",
                order.id, order.status
            )));
        }
        let quote = self.quote_for(&order).await?;

        let cancelled = self
            .store
            .update_order_status(order.id, OrderStatus::Cancelled, Some(reason))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;
        tracing::info!(
            "Order cancelled: id={}, by={}, reason={}",
            cancelled.id,
            user.user_id,
            reason
        );

        self.notifications
            .notify_best_effort(
                &cancelled.user_id,
                &format!("Your order #{} has been cancelled: {}", cancelled.id, reason),
            )
            .await;

        let queued = self.notifications.send_email(Mail::new(
            quote.email.clone(),
            format!("Order #{} cancelled", cancelled.id),
            format!(
                "Hello {},\n\nYour order #{} for the shipment from {} to {} has been cancelled.\n\nReason: {}\n",
                quote.requester_name(),
                cancelled.id,
                quote.origin(),
                quote.destination(),
                reason
            ),
        ));
        if !queued {
            tracing::warn!(
                "Cancellation email for order {} was not queued",
                cancelled.id
            );
        }

        Ok(OrderWithQuote {
            order: cancelled,
            quote,
        })
    }

    /// Hides the quote from active lists. Orders referencing it are untouched.
    pub async fn archive_quote(&self, user: &AuthenticatedUser, quote_id: i64) -> AppResult<QuoteView> {
        let quote = self.load_quote(user, quote_id).await?;
        let archived = self
            .store
            .archive_quote(quote.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quote {} not found", quote_id)))?;
        tracing::info!("Quote archived: id={}, by={}", archived.id, user.user_id);
        self.view(archived).await
    }

    pub async fn order_summary(&self, user: &AuthenticatedUser) -> AppResult<OrderSummary> {
        require_admin(user, "view the order summary")?;
        let quotes = self.list_quotes(user, true, false).await?;
        let orders = self.list_orders(user, None).await?;

        let mut summary = OrderSummary::default();
        for view in &quotes {
            if view.quote.is_archived {
                summary.quotes_archived += 1;
                continue;
            }
            match view.state {
                QuoteState::Requested => summary.quotes_requested += 1,
                QuoteState::Priced => summary.quotes_priced += 1,
                _ => {}
            }
        }
        for view in &orders {
            match view.order.status {
                OrderStatus::Pending => summary.orders_pending += 1,
                OrderStatus::Completed => {
                    summary.orders_completed += 1;
                    summary.completed_revenue += view.quote.price.unwrap_or(0.0);
                }
                OrderStatus::Cancelled => summary.orders_cancelled += 1,
            }
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::{DOCUMENTS, NOTIFICATIONS};
    use crate::db::MemoryRecordStore;
    use crate::storage::MemoryBackend;
    use crate::workflows::testing::{order_draft, quote_draft, recording_outbox};
    use tokio::sync::mpsc::UnboundedReceiver;

    struct Fixture {
        store: Arc<MemoryRecordStore>,
        storage: Arc<MemoryBackend>,
        workflow: QuoteToOrder,
        sent: UnboundedReceiver<Mail>,
        requester: AuthenticatedUser,
        admin: AuthenticatedUser,
    }

    fn setup() -> Fixture {
        let store = Arc::new(MemoryRecordStore::new());
        let storage = Arc::new(MemoryBackend::new("freight-files"));
        let (outbox, sent) = recording_outbox();
        let notifications = NotificationDispatcher::new(store.clone(), outbox);
        Fixture {
            workflow: QuoteToOrder::new(store.clone(), storage.clone(), notifications),
            store,
            storage,
            sent,
            requester: AuthenticatedUser::new("alice"),
            admin: AuthenticatedUser::admin("root"),
        }
    }

    async fn priced_order(f: &Fixture) -> OrderWithQuote {
        let quote = f
            .workflow
            .request_quote(&f.requester, quote_draft())
            .await
            .unwrap();
        f.workflow
            .set_quote_price(&f.admin, quote.id, 500.0)
            .await
            .unwrap();
        f.workflow
            .create_order(&f.requester, quote.id, order_draft())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_quote_to_cancelled_order() {
        let mut f = setup();
        let quote = f
            .workflow
            .request_quote(&f.requester, quote_draft())
            .await
            .unwrap();
        assert_eq!(quote.price, None);

        let err = f
            .workflow
            .create_order(&f.requester, quote.id, order_draft())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
        let ack = f
            .workflow
            .acknowledge_urgent(&f.requester, quote.id)
            .await
            .unwrap();
        assert!(ack.contains(&format!("#{}", quote.id)));

        let priced = f
            .workflow
            .set_quote_price(&f.admin, quote.id, 500.0)
            .await
            .unwrap();
        assert_eq!(priced.quote.price, Some(500.0));
        assert_eq!(priced.state, QuoteState::Priced);

        let created = f
            .workflow
            .create_order(&f.requester, quote.id, order_draft())
            .await
            .unwrap();
        assert_eq!(created.order.status, OrderStatus::Pending);
        assert_eq!(created.order.origin_street, "1 Dock Rd");
        assert!(f
            .workflow
            .list_pending_quotes(&f.requester)
            .await
            .unwrap()
            .is_empty());

        let cancelled = f
            .workflow
            .cancel_order(&f.requester, created.order.id, "  client changed mind ")
            .await
            .unwrap();
        assert_eq!(cancelled.order.status, OrderStatus::Cancelled);
        assert_eq!(
            cancelled.order.cancellation_reason.as_deref(),
            Some("client changed mind")
        );

        let mail = f.sent.recv().await.unwrap();
        assert_eq!(mail.to, "ada@example.com");
        assert!(mail.body.contains("client changed mind"));

        // The quote is unaffected by the cancellation.
        let after = f.workflow.get_quote(&f.requester, quote.id).await.unwrap();
        assert_eq!(after.quote, priced.quote);
        assert_eq!(after.state, QuoteState::Cancelled);

        let notes = f
            .store
            .list_notifications("alice", false)
            .await
            .unwrap();
        assert_eq!(notes.len(), 2);
    }

    #[tokio::test]
    async fn test_cancel_survives_notification_failure() {
        let mut f = setup();
        let created = priced_order(&f).await;
        f.store.set_unavailable(NOTIFICATIONS, true);

        let cancelled = f
            .workflow
            .cancel_order(&f.requester, created.order.id, "duplicate booking")
            .await
            .unwrap();
        assert_eq!(cancelled.order.status, OrderStatus::Cancelled);
        assert!(f.sent.recv().await.is_some());
    }

    #[tokio::test]
    async fn test_cancel_requires_reason_and_pending_status() {
        let f = setup();
        let created = priced_order(&f).await;

        assert!(matches!(
            f.workflow.cancel_order(&f.requester, created.order.id, "   ").await,
            Err(AppError::InvalidInput(_))
        ));
        f.workflow
            .cancel_order(&f.requester, created.order.id, "changed plans")
            .await
            .unwrap();
        assert!(matches!(
            f.workflow.cancel_order(&f.requester, created.order.id, "again").await,
            Err(AppError::InvalidState(_))
        ));
        assert!(matches!(
            f.workflow.complete_order(&f.admin, created.order.id).await,
            Err(AppError::InvalidState(_))
        ));
    }

    #[tokio::test]
    async fn test_one_order_per_quote() {
        let f = setup();
        let created = priced_order(&f).await;
        let err = f
            .workflow
            .create_order(&f.requester, created.quote.id, order_draft())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
        assert!(matches!(
            f.workflow
                .set_quote_price(&f.admin, created.quote.id, 650.0)
                .await,
            Err(AppError::InvalidState(_))
        ));
    }

    #[tokio::test]
    async fn test_pricing_rules() {
        let f = setup();
        let quote = f
            .workflow
            .request_quote(&f.requester, quote_draft())
            .await
            .unwrap();

        assert!(matches!(
            f.workflow.set_quote_price(&f.requester, quote.id, 500.0).await,
            Err(AppError::PermissionDenied(_))
        ));
        for bad in [0.0, -10.0, f64::NAN] {
            assert!(matches!(
                f.workflow.set_quote_price(&f.admin, quote.id, bad).await,
                Err(AppError::InvalidInput(_))
            ));
        }

        f.workflow
            .set_quote_price(&f.admin, quote.id, 500.0)
            .await
            .unwrap();
        assert!(matches!(
            f.workflow.acknowledge_urgent(&f.requester, quote.id).await,
            Err(AppError::InvalidState(_))
        ));

        let notes = f.store.list_notifications("alice", false).await.unwrap();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].message.contains("$500.00"));
    }

    #[tokio::test]
    async fn test_complete_order_creates_one_receipt() {
        let f = setup();
        let created = priced_order(&f).await;

        assert!(matches!(
            f.workflow.complete_order(&f.requester, created.order.id).await,
            Err(AppError::PermissionDenied(_))
        ));

        let completed = f
            .workflow
            .complete_order(&f.admin, created.order.id)
            .await
            .unwrap();
        assert_eq!(completed.order.order.status, OrderStatus::Completed);
        assert_eq!(completed.receipt.order_id, Some(created.order.id));
        assert_eq!(completed.receipt.user_id, "alice");

        let documents = f.store.list_documents(Some("alice")).await.unwrap();
        assert_eq!(documents.len(), 1);

        let key = f
            .storage
            .key_from_path(&completed.receipt.file_path)
            .unwrap()
            .to_string();
        assert!(key.starts_with(&format!("receipts/alice/order-{}-", created.order.id)));
        let body = String::from_utf8(f.storage.download(&key).await.unwrap()).unwrap();
        assert!(body.contains("Ada Lovelace"));
        assert!(body.contains("Denver, CO 80202"));
        assert!(body.contains("$500.00"));

        assert!(matches!(
            f.workflow.complete_order(&f.admin, created.order.id).await,
            Err(AppError::InvalidState(_))
        ));
        assert_eq!(f.store.list_documents(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_complete_order_failure_leaves_order_pending() {
        let f = setup();
        let created = priced_order(&f).await;
        f.store.set_unavailable(DOCUMENTS, true);

        assert!(f
            .workflow
            .complete_order(&f.admin, created.order.id)
            .await
            .is_err());

        let order = f
            .workflow
            .get_order(&f.requester, created.order.id)
            .await
            .unwrap();
        assert_eq!(order.order.status, OrderStatus::Pending);
        // The uploaded receipt stays behind.
        assert_eq!(f.storage.len().await, 1);
    }

    #[tokio::test]
    async fn test_archive_keeps_orders() {
        let f = setup();
        let created = priced_order(&f).await;
        let spare = f
            .workflow
            .request_quote(&f.requester, quote_draft())
            .await
            .unwrap();

        let archived = f
            .workflow
            .archive_quote(&f.requester, created.quote.id)
            .await
            .unwrap();
        assert!(archived.quote.is_archived);
        f.workflow
            .archive_quote(&f.requester, spare.id)
            .await
            .unwrap();

        assert!(f
            .workflow
            .list_quotes(&f.requester, false, false)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(
            f.workflow
                .list_quotes(&f.requester, true, false)
                .await
                .unwrap()
                .len(),
            2
        );

        let order = f
            .workflow
            .get_order(&f.requester, created.order.id)
            .await
            .unwrap();
        assert_eq!(order.order, created.order);
        assert!(order.quote.is_archived);

        assert!(matches!(
            f.workflow.create_order(&f.requester, spare.id, order_draft()).await,
            Err(AppError::InvalidState(_))
        ));
    }

    #[tokio::test]
    async fn test_orders_are_scoped_to_owner() {
        let f = setup();
        let created = priced_order(&f).await;
        let bob = AuthenticatedUser::new("bob");

        assert!(matches!(
            f.workflow.get_order(&bob, created.order.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            f.workflow.cancel_order(&bob, created.order.id, "not mine").await,
            Err(AppError::NotFound(_))
        ));
        assert!(f.workflow.list_orders(&bob, None).await.unwrap().is_empty());
        assert_eq!(f.workflow.list_orders(&f.admin, None).await.unwrap().len(), 1);
        assert_eq!(
            f.workflow
                .list_orders(&f.requester, Some(OrderStatus::Pending))
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn test_order_summary() {
        let f = setup();
        let done = priced_order(&f).await;
        f.workflow
            .complete_order(&f.admin, done.order.id)
            .await
            .unwrap();
        let cancelled = priced_order(&f).await;
        f.workflow
            .cancel_order(&f.requester, cancelled.order.id, "no longer needed")
            .await
            .unwrap();
        f.workflow
            .request_quote(&f.requester, quote_draft())
            .await
            .unwrap();

        assert!(matches!(
            f.workflow.order_summary(&f.requester).await,
            Err(AppError::PermissionDenied(_))
        ));
        let summary = f.workflow.order_summary(&f.admin).await.unwrap();
        assert_eq!(summary.quotes_requested, 1);
        assert_eq!(summary.quotes_priced, 0);
        assert_eq!(summary.orders_completed, 1);
        assert_eq!(summary.orders_cancelled, 1);
        assert_eq!(summary.orders_pending, 0);
        assert_eq!(summary.completed_revenue, 500.0);
    }
}
