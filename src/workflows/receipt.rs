use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::models::{Location, OrderWithQuote};

pub const RECEIPT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn with_street(location: Location, street: &str) -> Location {
    Location {
        street: Some(street.to_string()),
        ..location
    }
}

/// Plain text receipt for a completed order, built from the order joined
/// with its quote.
pub fn render_receipt(view: &OrderWithQuote, generated_at: DateTime<Utc>) -> String {
    let order = &view.order;
    let quote = &view.quote;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "FREIGHT ORDER RECEIPT");
    let _ = writeln!(out, "=====================");
    let _ = writeln!(out, "Order:            #{}", order.id);
    let _ = writeln!(out, "Quote:            #{}", quote.id);
    let _ = writeln!(out, "Generated:        {}", generated_at.format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(out);

    let _ = writeln!(out, "Customer");
    let _ = writeln!(out, "  Name:           {}", quote.requester_name());
    let _ = writeln!(out, "  Company:        {}", or_dash(quote.company.as_deref()));
    let _ = writeln!(out, "  Email:          {}", quote.email);
    let _ = writeln!(out, "  Phone:          {}", or_dash(quote.phone.as_deref()));
    let _ = writeln!(out);

    let _ = writeln!(out, "Route");
    let _ = writeln!(
        out,
        "  Origin:         {}",
        with_street(quote.origin(), &order.origin_street)
    );
    let _ = writeln!(
        out,
        "  Destination:    {}",
        with_street(quote.destination(), &order.destination_street)
    );
    let _ = writeln!(
        out,
        "  Pickup window:  {} to {}",
        order.earliest_pickup, order.latest_pickup
    );
    let _ = writeln!(out, "  Due date:       {}", quote.due_date);
    let _ = writeln!(out);

    let _ = writeln!(out, "Freight");
    let _ = writeln!(out, "  Classification: {}", quote.classification);
    let _ = writeln!(
        out,
        "  Description:    {}",
        or_dash(quote.freight_description.as_deref())
    );
    match quote.pallet_count {
        Some(n) => {
            let _ = writeln!(out, "  Pallets:        {}", n);
        }
        None => {
            let _ = writeln!(out, "  Pallets:        -");
        }
    }
    match quote.weight {
        Some(w) => {
            let _ = writeln!(out, "  Weight:         {} lbs", w);
        }
        None => {
            let _ = writeln!(out, "  Weight:         -");
        }
    }
    let _ = writeln!(out);

    if let Some(notes) = &order.notes {
        let _ = writeln!(out, "Notes:            {}", notes);
    }
    match quote.price {
        Some(price) => {
            let _ = writeln!(out, "Total:            ${:.2}", price);
        }
        None => {
            let _ = writeln!(out, "Total:            -");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FreightClass, Order, OrderStatus, ShippingQuote};
    use chrono::{NaiveDate, TimeZone};

    fn view() -> OrderWithQuote {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
        OrderWithQuote {
            order: Order {
                id: 12,
                user_id: "alice".to_string(),
                quote_id: 5,
                origin_street: "1 Dock Rd".to_string(),
                destination_street: "9 Yard Ave".to_string(),
                earliest_pickup: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
                latest_pickup: NaiveDate::from_ymd_opt(2026, 10, 22).unwrap(),
                notes: Some("Gate code 4411".to_string()),
                status: OrderStatus::Pending,
                cancellation_reason: None,
                created_at: now,
            },
            quote: ShippingQuote {
                id: 5,
                user_id: "alice".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: None,
                company: Some("Engines Ltd".to_string()),
                origin_street: None,
                origin_city: "Denver".to_string(),
                origin_state: "CO".to_string(),
                origin_zip: "80202".to_string(),
                destination_street: None,
                destination_city: "Austin".to_string(),
                destination_state: "TX".to_string(),
                destination_zip: "73301".to_string(),
                freight_description: Some("Excavator".to_string()),
                classification: FreightClass::Equipment,
                pallet_count: None,
                weight: Some(1200.0),
                due_date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
                price: Some(500.0),
                is_archived: false,
                created_at: now,
            },
        }
    }

    #[test]
    fn test_receipt_contains_joined_quote_fields() {
        let at = Utc.with_ymd_and_hms(2026, 10, 23, 14, 0, 0).unwrap();
        let text = render_receipt(&view(), at);

        assert!(text.contains("Order:            #12"));
        assert!(text.contains("Quote:            #5"));
        assert!(text.contains("Generated:        2026-10-23 14:00 UTC"));
        assert!(text.contains("Ada Lovelace"));
        assert!(text.contains("Engines Ltd"));
        assert!(text.contains("Origin:         1 Dock Rd, Denver, CO 80202"));
        assert!(text.contains("Destination:    9 Yard Ave, Austin, TX 73301"));
        assert!(text.contains("2026-10-20 to 2026-10-22"));
        assert!(text.contains("Excavator"));
        assert!(text.contains("Gate code 4411"));
        assert!(text.contains("Total:            $500.00"));
        assert!(text.contains("Phone:          -"));
    }
}
