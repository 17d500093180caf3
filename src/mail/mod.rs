//! Outbound transactional email.
//!
//! Senders deliver a single message; the [`EmailOutbox`] queues messages
//! off the caller's path and owns the retry policy.

pub mod api;
pub mod outbox;

pub use api::HttpMailSender;
pub use outbox::{EmailOutbox, RetryPolicy};

use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Mail {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

#[tonic::async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, mail: &Mail) -> AppResult<()>;
}

/// Writes messages to the log instead of delivering them. Used when no mail
/// API is configured.
#[derive(Debug, Default)]
pub struct LogMailSender;

#[tonic::async_trait]
impl MailSender for LogMailSender {
    async fn send(&self, mail: &Mail) -> AppResult<()> {
        tracing::info!(
            "Mail delivery disabled, would send: to={}, subject={}",
            mail.to,
            mail.subject
        );
        Ok(())
    }
}
