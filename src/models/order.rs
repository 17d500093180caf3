use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{AppError, AppResult};

use super::freight::non_empty;
use super::quote::ShippingQuote;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(AppError::InvalidInput(format!(
                "status must be 'pending', 'completed' or 'cancelled', got '{}'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: String,
    pub quote_id: i64,
    pub origin_street: String,
    pub destination_street: String,
    pub earliest_pickup: NaiveDate,
    pub latest_pickup: NaiveDate,
    pub notes: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: OrderStatus,
    pub cancellation_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An order together with the quote it was created from. Price and freight
/// context are always read from the quote, never copied onto the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderWithQuote {
    pub order: Order,
    pub quote: ShippingQuote,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub origin_street: String,
    pub destination_street: String,
    pub earliest_pickup: NaiveDate,
    pub latest_pickup: NaiveDate,
    pub notes: Option<String>,
}

impl OrderDraft {
    pub fn validated(self) -> AppResult<Self> {
        let origin_street = self.origin_street.trim().to_string();
        let destination_street = self.destination_street.trim().to_string();
        if origin_street.is_empty() || destination_street.is_empty() {
            return Err(AppError::InvalidInput(
                "origin and destination street addresses are required".to_string(),
            ));
        }
        if self.earliest_pickup > self.latest_pickup {
            return Err(AppError::InvalidInput(
                "earliest pickup date must not be after the latest pickup date".to_string(),
            ));
        }
        Ok(Self {
            origin_street,
            destination_street,
            notes: non_empty(self.notes),
            ..self
        })
    }
}

/// Admin dashboard counters across all owners.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderSummary {
    pub quotes_requested: i64,
    pub quotes_priced: i64,
    pub quotes_archived: i64,
    pub orders_pending: i64,
    pub orders_completed: i64,
    pub orders_cancelled: i64,
    pub completed_revenue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_draft_rejects_inverted_pickup_window() {
        let draft = OrderDraft {
            origin_street: "1 Dock Rd".to_string(),
            destination_street: "9 Yard Ave".to_string(),
            earliest_pickup: date(20),
            latest_pickup: date(18),
            notes: None,
        };
        assert!(matches!(draft.validated(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_draft_requires_streets() {
        let draft = OrderDraft {
            origin_street: " ".to_string(),
            destination_street: "9 Yard Ave".to_string(),
            earliest_pickup: date(18),
            latest_pickup: date(18),
            notes: Some("".to_string()),
        };
        assert!(matches!(draft.validated(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_status_roundtrip_through_text() {
        for status in [OrderStatus::Pending, OrderStatus::Completed, OrderStatus::Cancelled] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }
}
