use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    /// Opaque locator returned by the storage backend (`gs://`, `r2://`, `mem://`).
    pub file_path: String,
    pub is_favorite: bool,
    /// Set for receipts generated on order completion.
    pub order_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDocument {
    pub user_id: String,
    pub title: String,
    pub file_path: String,
    pub order_id: Option<i64>,
}
