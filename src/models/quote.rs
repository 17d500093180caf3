use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{AppError, AppResult};

use super::freight::{non_empty, FreightClass};
use super::order::{Order, OrderStatus};

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub id: i64,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub origin_street: Option<String>,
    pub origin_city: String,
    pub origin_state: String,
    pub origin_zip: String,
    pub destination_street: Option<String>,
    pub destination_city: String,
    pub destination_state: String,
    pub destination_zip: String,
    pub freight_description: Option<String>,
    #[sqlx(try_from = "String")]
    pub classification: FreightClass,
    pub pallet_count: Option<i32>,
    pub weight: Option<f64>,
    pub due_date: NaiveDate,
    /// `None` until an admin prices the quote.
    pub price: Option<f64>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
}

impl ShippingQuote {
    pub fn origin(&self) -> Location {
        Location {
            street: self.origin_street.clone(),
            city: self.origin_city.clone(),
            state: self.origin_state.clone(),
            zip: self.origin_zip.clone(),
        }
    }

    pub fn destination(&self) -> Location {
        Location {
            street: self.destination_street.clone(),
            city: self.destination_city.clone(),
            state: self.destination_state.clone(),
            zip: self.destination_zip.clone(),
        }
    }

    pub fn requester_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub street: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Location {
    fn validated(self, label: &str) -> AppResult<Self> {
        let city = self.city.trim().to_string();
        let state = self.state.trim().to_string();
        let zip = self.zip.trim().to_string();
        if city.is_empty() || state.is_empty() || zip.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "{} city, state and zip are required",
                label
            )));
        }
        Ok(Self {
            street: non_empty(self.street),
            city,
            state,
            zip,
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(street) = &self.street {
            write!(f, "{}, ", street)?;
        }
        write!(f, "{}, {} {}", self.city, self.state, self.zip)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub origin: Location,
    pub destination: Location,
    pub freight_description: Option<String>,
    pub classification: FreightClass,
    pub pallet_count: Option<i32>,
    pub weight: Option<f64>,
    pub due_date: NaiveDate,
}

impl QuoteDraft {
    pub fn validated(self) -> AppResult<Self> {
        let first_name = self.first_name.trim().to_string();
        let last_name = self.last_name.trim().to_string();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(AppError::InvalidInput(
                "first_name and last_name are required".to_string(),
            ));
        }
        let email = self.email.trim().to_string();
        if !is_plausible_email(&email) {
            return Err(AppError::InvalidInput(format!(
                "'{}' is not a valid email address",
                email
            )));
        }
        if matches!(self.weight, Some(w) if !w.is_finite() || w < 0.0) {
            return Err(AppError::InvalidInput(
                "weight must be a non-negative number".to_string(),
            ));
        }
        Ok(Self {
            first_name,
            last_name,
            email,
            phone: non_empty(self.phone),
            company: non_empty(self.company),
            origin: self.origin.validated("origin")?,
            destination: self.destination.validated("destination")?,
            freight_description: non_empty(self.freight_description),
            ..self
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

/// Position of a quote in the quote-to-order lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteState {
    Requested,
    Priced,
    OrderCreated,
    Completed,
    Cancelled,
}

impl QuoteState {
    /// Derives the state from the quote and the order created from it, if any.
    pub fn of(quote: &ShippingQuote, order: Option<&Order>) -> Self {
        match order.map(|o| o.status) {
            Some(OrderStatus::Pending) => QuoteState::OrderCreated,
            Some(OrderStatus::Completed) => QuoteState::Completed,
            Some(OrderStatus::Cancelled) => QuoteState::Cancelled,
            None if quote.price.is_some() => QuoteState::Priced,
            None => QuoteState::Requested,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteState::Requested => "requested",
            QuoteState::Priced => "priced",
            QuoteState::OrderCreated => "order_created",
            QuoteState::Completed => "completed",
            QuoteState::Cancelled => "cancelled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuoteDraft {
        QuoteDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some(" ".to_string()),
            company: None,
            origin: Location {
                street: None,
                city: "Denver".to_string(),
                state: "CO".to_string(),
                zip: "80202".to_string(),
            },
            destination: Location {
                street: Some("1 Main St".to_string()),
                city: "Austin".to_string(),
                state: "TX".to_string(),
                zip: "73301".to_string(),
            },
            freight_description: None,
            classification: FreightClass::LtlFtl,
            pallet_count: Some(4),
            weight: Some(1200.0),
            due_date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
        }
    }

    #[test]
    fn test_valid_draft_normalizes_optional_fields() {
        let draft = draft().validated().unwrap();
        assert_eq!(draft.phone, None);
        assert_eq!(draft.destination.to_string(), "1 Main St, Austin, TX 73301");
    }

    #[test]
    fn test_draft_rejects_bad_email() {
        let mut bad = draft();
        bad.email = "ada.example.com".to_string();
        assert!(matches!(bad.validated(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_draft_requires_origin_city() {
        let mut bad = draft();
        bad.origin.city = " ".to_string();
        let err = bad.validated().unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(msg) if msg.starts_with("origin")));
    }
}
