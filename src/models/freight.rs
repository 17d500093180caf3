use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{AppError, AppResult};

pub const DEFAULT_DIMENSION_UNIT: &str = "ft";
pub const DEFAULT_WEIGHT_UNIT: &str = "lbs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreightClass {
    #[default]
    Equipment,
    LtlFtl,
}

impl FreightClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            FreightClass::Equipment => "equipment",
            FreightClass::LtlFtl => "ltl_ftl",
        }
    }
}

impl fmt::Display for FreightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FreightClass {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equipment" => Ok(FreightClass::Equipment),
            "ltl_ftl" => Ok(FreightClass::LtlFtl),
            other => Err(AppError::InvalidInput(format!(
                "classification must be 'equipment' or 'ltl_ftl', got '{}'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for FreightClass {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Descriptive and dimension fields of a freight item.
///
/// A freight item carries its live details; a maintenance item carries a
/// copy taken at transfer time which is never re-synced with the source.
#[derive(Debug, Clone, PartialEq, Default, FromRow, Serialize, Deserialize)]
pub struct FreightDetails {
    #[sqlx(try_from = "String")]
    pub classification: FreightClass,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub commodity: Option<String>,
    pub pallet_count: Option<i32>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub dimension_unit: String,
    pub weight: Option<f64>,
    pub weight_unit: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct FreightItem {
    pub id: i64,
    pub user_id: String,
    #[sqlx(flatten)]
    pub details: FreightDetails,
    pub serial_number: Option<String>,
    pub inventory_number: String,
    pub in_progress: bool,
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated field set written on insert and on full-record edit.
#[derive(Debug, Clone, PartialEq)]
pub struct FreightInput {
    pub details: FreightDetails,
    pub serial_number: Option<String>,
    pub inventory_number: String,
}

/// Raw freight fields as submitted by a form or an import row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FreightDraft {
    pub classification: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub commodity: Option<String>,
    pub pallet_count: Option<i32>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub dimension_unit: Option<String>,
    pub weight: Option<f64>,
    pub weight_unit: Option<String>,
    pub serial_number: Option<String>,
    pub inventory_number: Option<String>,
}

impl FreightDraft {
    /// Trimmed inventory number, if one was provided.
    pub fn inventory_number(&self) -> Option<&str> {
        self.inventory_number
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Applies default units and classification and validates the draft.
    pub fn into_input(self) -> AppResult<FreightInput> {
        let inventory_number = self
            .inventory_number()
            .map(str::to_string)
            .ok_or_else(|| AppError::InvalidInput("inventory_number is required".to_string()))?;

        let classification = match non_empty(self.classification) {
            Some(c) => c.parse()?,
            None => FreightClass::default(),
        };

        for (name, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
            ("weight", self.weight),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(AppError::InvalidInput(format!(
                        "{} must be a non-negative number",
                        name
                    )));
                }
            }
        }
        if matches!(self.pallet_count, Some(n) if n < 0) {
            return Err(AppError::InvalidInput(
                "pallet_count must not be negative".to_string(),
            ));
        }

        Ok(FreightInput {
            details: FreightDetails {
                classification,
                make: non_empty(self.make),
                model: non_empty(self.model),
                year: self.year,
                commodity: non_empty(self.commodity),
                pallet_count: self.pallet_count,
                length: self.length,
                width: self.width,
                height: self.height,
                dimension_unit: non_empty(self.dimension_unit)
                    .unwrap_or_else(|| DEFAULT_DIMENSION_UNIT.to_string()),
                weight: self.weight,
                weight_unit: non_empty(self.weight_unit)
                    .unwrap_or_else(|| DEFAULT_WEIGHT_UNIT.to_string()),
            },
            serial_number: non_empty(self.serial_number),
            inventory_number,
        })
    }
}

/// Trims the value and maps blank strings to `None`.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_applies_defaults() {
        let input = FreightDraft {
            inventory_number: Some("  INV-9 ".to_string()),
            make: Some("".to_string()),
            ..Default::default()
        }
        .into_input()
        .unwrap();

        assert_eq!(input.inventory_number, "INV-9");
        assert_eq!(input.details.classification, FreightClass::Equipment);
        assert_eq!(input.details.dimension_unit, "ft");
        assert_eq!(input.details.weight_unit, "lbs");
        assert_eq!(input.details.make, None);
        assert_eq!(input.serial_number, None);
    }

    #[test]
    fn test_draft_requires_inventory_number() {
        let err = FreightDraft {
            inventory_number: Some("   ".to_string()),
            ..Default::default()
        }
        .into_input()
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_draft_rejects_unknown_classification() {
        let err = FreightDraft {
            inventory_number: Some("INV-1".to_string()),
            classification: Some("boat".to_string()),
            ..Default::default()
        }
        .into_input()
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_draft_rejects_negative_weight() {
        let err = FreightDraft {
            inventory_number: Some("INV-1".to_string()),
            weight: Some(-3.0),
            ..Default::default()
        }
        .into_input()
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(msg) if msg.contains("weight")));
    }

    #[test]
    fn test_freight_class_parse() {
        assert_eq!("ltl_ftl".parse::<FreightClass>().unwrap(), FreightClass::LtlFtl);
        assert_eq!(FreightClass::LtlFtl.to_string(), "ltl_ftl");
    }
}
