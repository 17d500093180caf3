//! Business workflows over the record store, blob storage and mail outbox.
//!
//! Every operation takes the caller's [`AuthenticatedUser`](crate::middleware::AuthenticatedUser)
//! explicitly. Records owned by someone else are reported as not found.

pub mod documents;
pub mod freight;
pub mod maintenance;
pub mod notifications;
pub mod orders;
pub mod receipt;

pub use documents::DocumentLibrary;
pub use freight::{FreightInventory, ImportReport, SkippedRow};
pub use maintenance::{MaintenanceTransfer, PendingTransfer, TransferState};
pub use notifications::NotificationDispatcher;
pub use orders::{CompletedOrder, QuoteToOrder, QuoteView};

use std::sync::Arc;

use crate::db::RecordStore;
use crate::mail::EmailOutbox;
use crate::storage::StorageBackend;

/// All workflows wired to the same collaborators.
#[derive(Clone)]
pub struct Workflows {
    pub freight: FreightInventory,
    pub maintenance: MaintenanceTransfer,
    pub orders: QuoteToOrder,
    pub documents: DocumentLibrary,
    pub notifications: NotificationDispatcher,
}

impl Workflows {
    pub fn new(
        store: Arc<dyn RecordStore>,
        storage: Arc<dyn StorageBackend>,
        outbox: EmailOutbox,
    ) -> Self {
        let notifications = NotificationDispatcher::new(store.clone(), outbox);
        Self {
            freight: FreightInventory::new(store.clone()),
            maintenance: MaintenanceTransfer::new(store.clone()),
            orders: QuoteToOrder::new(store.clone(), storage.clone(), notifications.clone()),
            documents: DocumentLibrary::new(store, storage),
            notifications,
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::NaiveDate;
    use tokio::sync::mpsc;

    use crate::error::AppResult;
    use crate::mail::{EmailOutbox, Mail, MailSender, RetryPolicy};
    use crate::models::{FreightClass, FreightDraft, Location, OrderDraft, QuoteDraft};

    struct RecordingSender {
        sent: mpsc::UnboundedSender<Mail>,
    }

    #[tonic::async_trait]
    impl MailSender for RecordingSender {
        async fn send(&self, mail: &Mail) -> AppResult<()> {
            let _ = self.sent.send(mail.clone());
            Ok(())
        }
    }

    /// Outbox whose delivered mail shows up on the returned receiver.
    pub fn recording_outbox() -> (EmailOutbox, mpsc::UnboundedReceiver<Mail>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (outbox, _handle) = EmailOutbox::spawn(
            Arc::new(RecordingSender { sent: tx }),
            RetryPolicy {
                max_attempts: 1,
                base_delay: Duration::from_millis(1),
            },
        );
        (outbox, rx)
    }

    pub fn freight_draft(inventory_number: &str, serial_number: Option<&str>) -> FreightDraft {
        FreightDraft {
            classification: Some("equipment".to_string()),
            make: Some("Caterpillar".to_string()),
            model: Some("320".to_string()),
            year: Some(2019),
            length: Some(31.0),
            width: Some(10.5),
            height: Some(9.8),
            weight: Some(48_000.0),
            serial_number: serial_number.map(str::to_string),
            inventory_number: Some(inventory_number.to_string()),
            ..Default::default()
        }
    }

    pub fn quote_draft() -> QuoteDraft {
        QuoteDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("555-0100".to_string()),
            company: None,
            origin: Location {
                street: None,
                city: "Denver".to_string(),
                state: "CO".to_string(),
                zip: "80202".to_string(),
            },
            destination: Location {
                street: None,
                city: "Austin".to_string(),
                state: "TX".to_string(),
                zip: "73301".to_string(),
            },
            freight_description: Some("Excavator".to_string()),
            classification: FreightClass::Equipment,
            pallet_count: None,
            weight: Some(48_000.0),
            due_date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
        }
    }

    pub fn order_draft() -> OrderDraft {
        OrderDraft {
            origin_street: "1 Dock Rd".to_string(),
            destination_street: "9 Yard Ave".to_string(),
            earliest_pickup: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
            latest_pickup: NaiveDate::from_ymd_opt(2026, 10, 22).unwrap(),
            notes: None,
        }
    }
}
