use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::http_client::HttpClient;

use super::{Mail, MailSender};

#[derive(Serialize)]
struct SendEmailPayload<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

/// Delivers mail through a JSON email API (`POST {api_url}` with a bearer key).
pub struct HttpMailSender {
    http_client: HttpClient,
    api_url: String,
    api_key: Option<String>,
    from: String,
}

impl HttpMailSender {
    pub fn new(
        http_client: HttpClient,
        api_url: String,
        api_key: Option<String>,
        from: String,
    ) -> Self {
        Self {
            http_client,
            api_url,
            api_key,
            from,
        }
    }
}

#[tonic::async_trait]
impl MailSender for HttpMailSender {
    async fn send(&self, mail: &Mail) -> AppResult<()> {
        let payload = SendEmailPayload {
            from: &self.from,
            to: [&mail.to],
            subject: &mail.subject,
            text: &mail.body,
        };

        let response = self
            .http_client
            .post_json(&self.api_url, self.api_key.as_deref(), &payload)
            .await
            .map_err(|e| AppError::Mail(format!("Failed to reach mail API: {}", e)))?;

        if response.status().is_success() {
            tracing::info!("Mail sent: to={}, subject={}", mail.to, mail.subject);
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(AppError::Mail(format!("Mail API returned {}: {}", status, body)))
        }
    }
}
