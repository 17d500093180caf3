// Shared proto <-> model conversions

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use tonic::Status;

use crate::models::{non_empty, Location, ShippingQuote};
use crate::proto::quotes;
use crate::workflows::QuoteView;

pub fn timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parses a `YYYY-MM-DD` field.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, Status> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        Status::invalid_argument(format!("{} must be a YYYY-MM-DD date, got '{}'", field, value))
    })
}

/// Like [`parse_date`] but an empty string means no date.
pub fn parse_optional_date(field: &str, value: &str) -> Result<Option<NaiveDate>, Status> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(field, value).map(Some)
    }
}

pub fn optional_string(value: String) -> Option<String> {
    non_empty(Some(value))
}

pub fn location_from_proto(location: Option<quotes::Location>) -> Location {
    let location = location.unwrap_or_default();
    Location {
        street: optional_string(location.street),
        city: location.city,
        state: location.state,
        zip: location.zip,
    }
}

fn location_to_proto(location: Location) -> quotes::Location {
    quotes::Location {
        street: location.street.unwrap_or_default(),
        city: location.city,
        state: location.state,
        zip: location.zip,
    }
}

pub fn quote_to_proto(quote: &ShippingQuote, state: &str) -> quotes::ShippingQuote {
    quotes::ShippingQuote {
        id: quote.id,
        user_id: quote.user_id.clone(),
        first_name: quote.first_name.clone(),
        last_name: quote.last_name.clone(),
        email: quote.email.clone(),
        phone: quote.phone.clone().unwrap_or_default(),
        company: quote.company.clone().unwrap_or_default(),
        origin: Some(location_to_proto(quote.origin())),
        destination: Some(location_to_proto(quote.destination())),
        freight_description: quote.freight_description.clone().unwrap_or_default(),
        classification: quote.classification.to_string(),
        pallet_count: quote.pallet_count,
        weight: quote.weight,
        due_date: quote.due_date.to_string(),
        price: quote.price,
        is_archived: quote.is_archived,
        created_at: timestamp(&quote.created_at),
        state: state.to_string(),
    }
}

pub fn quote_view_to_proto(view: &QuoteView) -> quotes::ShippingQuote {
    quote_to_proto(&view.quote, view.state.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_dates() {
        assert_eq!(
            parse_date("due_date", "2026-11-01").unwrap(),
            NaiveDate::from_ymd_opt(2026, 11, 1).unwrap()
        );
        let err = parse_date("due_date", "11/01/2026").unwrap_err();
        assert_eq!(err.code(), tonic::Code::InvalidArgument);
        assert_eq!(parse_optional_date("schedule_date", " ").unwrap(), None);
    }

    #[test]
    fn test_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 8, 5, 0).unwrap();
        assert_eq!(timestamp(&at), "2026-10-16T08:05:00Z");
    }
}
