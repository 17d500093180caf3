use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

use crate::error::AppResult;

use super::{Mail, MailSender};

const OUTBOX_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Backoff before retry number `attempt` (1-based): base, 2*base, 4*base, ...
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(1u32 << exp)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
        }
    }
}

/// Queue of outgoing mail drained by a background task.
///
/// Enqueueing never waits and never fails the caller; delivery failures are
/// retried per the policy and then logged.
#[derive(Clone)]
pub struct EmailOutbox {
    tx: mpsc::Sender<Mail>,
}

impl EmailOutbox {
    /// Spawns the delivery task. It exits once every outbox handle is dropped
    /// and the queue is drained.
    pub fn spawn(sender: Arc<dyn MailSender>, policy: RetryPolicy) -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::channel::<Mail>(OUTBOX_CAPACITY);

        let handle = tokio::spawn(async move {
            while let Some(mail) = rx.recv().await {
                if let Err(e) = deliver_with_retry(sender.as_ref(), &mail, policy).await {
                    tracing::error!(
                        "Giving up on mail to {} ({}): {}",
                        mail.to,
                        mail.subject,
                        e
                    );
                }
            }
            tracing::debug!("Email outbox closed");
        });

        (Self { tx }, handle)
    }

    /// Queues `mail` for delivery. Returns false if it was dropped.
    pub fn enqueue(&self, mail: Mail) -> bool {
        match self.tx.try_send(mail) {
            Ok(()) => true,
            Err(TrySendError::Full(mail)) => {
                tracing::warn!("Email outbox full, dropping mail to {}", mail.to);
                false
            }
            Err(TrySendError::Closed(mail)) => {
                tracing::warn!("Email outbox closed, dropping mail to {}", mail.to);
                false
            }
        }
    }
}

async fn deliver_with_retry(
    sender: &dyn MailSender,
    mail: &Mail,
    policy: RetryPolicy,
) -> AppResult<()> {
    let mut attempt = 1;
    loop {
        match sender.send(mail).await {
            Ok(()) => return Ok(()),
            Err(e) if attempt < policy.max_attempts => {
                let delay = policy.delay_for(attempt);
                tracing::warn!(
                    "Mail to {} failed (attempt {}/{}), retrying in {:?}: {}",
                    mail.to,
                    attempt,
                    policy.max_attempts,
                    delay,
                    e
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails the first `failures` sends, then reports each delivered mail.
    struct FlakySender {
        failures: u32,
        calls: AtomicU32,
        delivered: mpsc::UnboundedSender<Mail>,
    }

    #[tonic::async_trait]
    impl MailSender for FlakySender {
        async fn send(&self, mail: &Mail) -> AppResult<()> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call <= self.failures {
                return Err(AppError::Mail("smtp down".to_string()));
            }
            let _ = self.delivered.send(mail.clone());
            Ok(())
        }
    }

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay: Duration::from_millis(1),
        }
    }

    #[test]
    fn test_delay_doubles() {
        let policy = RetryPolicy {
            max_attempts: 5,
            base_delay: Duration::from_millis(100),
        };
        assert_eq!(policy.delay_for(1), Duration::from_millis(100));
        assert_eq!(policy.delay_for(2), Duration::from_millis(200));
        assert_eq!(policy.delay_for(3), Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_retries_until_delivered() {
        let (delivered_tx, mut delivered_rx) = mpsc::unbounded_channel();
        let sender = Arc::new(FlakySender {
            failures: 2,
            calls: AtomicU32::new(0),
            delivered: delivered_tx,
        });
        let (outbox, handle) = EmailOutbox::spawn(sender.clone(), fast_policy(3));

        assert!(outbox.enqueue(Mail::new("a@example.com", "hi", "body")));
        drop(outbox);
        handle.await.unwrap();

        assert_eq!(delivered_rx.recv().await.unwrap().to, "a@example.com");
        assert_eq!(sender.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let (delivered_tx, mut delivered_rx) = mpsc::unbounded_channel();
        let sender = Arc::new(FlakySender {
            failures: 10,
            calls: AtomicU32::new(0),
            delivered: delivered_tx,
        });
        let (outbox, handle) = EmailOutbox::spawn(sender.clone(), fast_policy(2));

        outbox.enqueue(Mail::new("a@example.com", "hi", "body"));
        drop(outbox);
        handle.await.unwrap();

        assert_eq!(sender.calls.load(Ordering::SeqCst), 2);
        assert!(delivered_rx.try_recv().is_err());
    }
}
