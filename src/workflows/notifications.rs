use std::sync::Arc;

use crate::db::RecordStore;
use crate::error::{AppError, AppResult};
use crate::mail::{EmailOutbox, Mail};
use crate::middleware::AuthenticatedUser;
use crate::models::Notification;

/// In-app notifications plus the queued email channel.
#[derive(Clone)]
pub struct NotificationDispatcher {
    store: Arc<dyn RecordStore>,
    outbox: EmailOutbox,
}

impl NotificationDispatcher {
    pub fn new(store: Arc<dyn RecordStore>, outbox: EmailOutbox) -> Self {
        Self { store, outbox }
    }

    pub async fn notify(&self, user_id: &str, message: &str) -> AppResult<Notification> {
        let notification = self.store.insert_notification(user_id, message).await?;
        tracing::debug!(
            "Notification created: id={}, user_id={}",
            notification.id,
            user_id
        );
        Ok(notification)
    }

    /// Like [`notify`](Self::notify) but only logs a failure.
    pub async fn notify_best_effort(&self, user_id: &str, message: &str) {
        if let Err(e) = self.notify(user_id, message).await {
            tracing::warn!("Failed to create notification for {}: {}", user_id, e);
        }
    }

    /// Marking an already read notification returns it unchanged.
    pub async fn mark_as_read(&self, user: &AuthenticatedUser, id: i64) -> AppResult<Notification> {
        let notification = self
            .store
            .get_notification(id)
            .await?
            .filter(|n| n.user_id == user.user_id)
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))?;
        if notification.is_read {
            return Ok(notification);
        }
        self.store
            .mark_notification_read(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))
    }

    pub async fn list_notifications(
        &self,
        user: &AuthenticatedUser,
        unread_only: bool,
    ) -> AppResult<Vec<Notification>> {
        self.store
            .list_notifications(&user.user_id, unread_only)
            .await
    }

    /// Queues the mail; delivery and retries happen off the caller's path.
    pub fn send_email(&self, mail: Mail) -> bool {
        tracing::debug!("Queueing mail: to={}, subject={}", mail.to, mail.subject);
        self.outbox.enqueue(mail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::NOTIFICATIONS;
    use crate::db::MemoryRecordStore;
    use crate::workflows::testing::recording_outbox;

    #[tokio::test]
    async fn test_mark_as_read_is_idempotent_and_owner_only() {
        let store = Arc::new(MemoryRecordStore::new());
        let (outbox, _sent) = recording_outbox();
        let dispatcher = NotificationDispatcher::new(store, outbox);
        let user = AuthenticatedUser::new("alice");

        let created = dispatcher.notify("alice", "Quote priced").await.unwrap();
        assert!(!created.is_read);

        let stranger = AuthenticatedUser::admin("root");
        assert!(matches!(
            dispatcher.mark_as_read(&stranger, created.id).await,
            Err(AppError::NotFound(_))
        ));

        let first = dispatcher.mark_as_read(&user, created.id).await.unwrap();
        let second = dispatcher.mark_as_read(&user, created.id).await.unwrap();
        assert!(first.is_read);
        assert_eq!(first, second);

        assert!(dispatcher
            .list_notifications(&user, true)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(dispatcher.list_notifications(&user, false).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_best_effort_notify_swallows_failures() {
        let store = Arc::new(MemoryRecordStore::new());
        store.set_unavailable(NOTIFICATIONS, true);
        let (outbox, _sent) = recording_outbox();
        let dispatcher = NotificationDispatcher::new(store, outbox);

        dispatcher.notify_best_effort("alice", "hello").await;
        assert!(dispatcher.notify("alice", "hello").await.is_err());
    }

    #[tokio::test]
    async fn test_send_email_is_delivered_by_outbox() {
        let store = Arc::new(MemoryRecordStore::new());
        let (outbox, mut sent) = recording_outbox();
        let dispatcher = NotificationDispatcher::new(store, outbox);

        assert!(dispatcher.send_email(Mail::new("ops@example.com", "Hi", "Body")));
        let mail = sent.recv().await.unwrap();
        assert_eq!(mail.to, "ops@example.com");
    }
}
