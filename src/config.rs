use std::env;
use std::time::Duration;

/// Which object storage receives receipts and uploaded documents.
#[derive(Clone, Debug, PartialEq)]
pub enum StorageConfig {
    Gcs {
        bucket: String,
    },
    R2 {
        bucket: String,
        account_id: String,
        access_key: String,
        secret_key: String,
    },
    /// No bucket configured; blobs live in process memory.
    Memory,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub from: String,
    pub max_attempts: u32,
    pub retry_base: Duration,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: Option<String>,
    pub server_host: String,
    pub server_port: u16,
    pub jwt_secret: String,
    pub jwt_audience: String,
    pub storage: StorageConfig,
    pub mail: MailConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenvy::dotenv().ok();

        let storage = match env::var("STORAGE_BACKEND").ok().as_deref() {
            Some("gcs") => StorageConfig::Gcs {
                bucket: env::var("GCS_BUCKET")?,
            },
            Some("r2") => StorageConfig::R2 {
                bucket: env::var("R2_BUCKET")?,
                account_id: env::var("R2_ACCOUNT_ID")?,
                access_key: env::var("R2_ACCESS_KEY_ID")?,
                secret_key: env::var("R2_SECRET_ACCESS_KEY")?,
            },
            _ => StorageConfig::Memory,
        };

        let mail = MailConfig {
            api_url: env::var("MAIL_API_URL").ok().filter(|s| !s.is_empty()),
            api_key: env::var("MAIL_API_KEY").ok().filter(|s| !s.is_empty()),
            from: env::var("MAIL_FROM")
                .unwrap_or_else(|_| "Freight Desk <no-reply@localhost>".to_string()),
            max_attempts: env::var("MAIL_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            retry_base: Duration::from_millis(
                env::var("MAIL_RETRY_BASE_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(500),
            ),
        };

        Ok(Config {
            database_url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "50051".to_string())
                .parse()
                .unwrap_or(50051),
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_audience: env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "authenticated".to_string()),
            storage,
            mail,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
