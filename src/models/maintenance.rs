use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{AppError, AppResult};

use super::freight::{non_empty, FreightDetails};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Urgent,
    Schedule,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Urgent => "urgent",
            Urgency::Schedule => "schedule",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "urgent" => Ok(Urgency::Urgent),
            "schedule" => Ok(Urgency::Schedule),
            other => Err(AppError::InvalidInput(format!(
                "urgency must be 'urgent' or 'schedule', got '{}'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for Urgency {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct MaintenanceItem {
    pub id: i64,
    pub user_id: String,
    /// Live reference to the originating freight item; cleared if it is deleted.
    pub freight_id: Option<i64>,
    pub inventory_number: String,
    pub serial_number: Option<String>,
    /// Freight details as they were when the transfer was submitted.
    #[sqlx(flatten)]
    pub snapshot: FreightDetails,
    #[sqlx(try_from = "String")]
    pub urgency: Urgency,
    pub parts_needed: bool,
    pub part_description: Option<String>,
    pub assigned_crew: Option<String>,
    pub schedule_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The user-editable part of a maintenance record.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceForm {
    pub urgency: Urgency,
    pub parts_needed: bool,
    pub part_description: Option<String>,
    pub assigned_crew: Option<String>,
    pub schedule_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl MaintenanceForm {
    pub fn new(urgency: Urgency) -> Self {
        Self {
            urgency,
            parts_needed: false,
            part_description: None,
            assigned_crew: None,
            schedule_date: None,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Normalizes blank text fields and checks that a part is described
    /// whenever parts are needed.
    pub fn validated(self) -> AppResult<Self> {
        let form = Self {
            part_description: non_empty(self.part_description),
            assigned_crew: non_empty(self.assigned_crew),
            notes: non_empty(self.notes),
            ..self
        };
        if form.parts_needed && form.part_description.is_none() {
            return Err(AppError::InvalidInput(
                "part_description is required when parts are needed".to_string(),
            ));
        }
        Ok(form)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMaintenanceItem {
    pub freight_id: i64,
    pub inventory_number: String,
    pub serial_number: Option<String>,
    pub snapshot: FreightDetails,
    pub form: MaintenanceForm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_needed_requires_description() {
        let form = MaintenanceForm {
            parts_needed: true,
            part_description: Some("  ".to_string()),
            ..MaintenanceForm::new(Urgency::Schedule)
        };
        assert!(matches!(form.validated(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_validated_trims_blank_fields() {
        let form = MaintenanceForm {
            assigned_crew: Some("".to_string()),
            ..MaintenanceForm::new(Urgency::Urgent).with_notes(" leak ")
        }
        .validated()
        .unwrap();
        assert_eq!(form.assigned_crew, None);
        assert_eq!(form.notes.as_deref(), Some("leak"));
    }

    #[test]
    fn test_urgency_parse() {
        assert_eq!("urgent".parse::<Urgency>().unwrap(), Urgency::Urgent);
        assert!("soon".parse::<Urgency>().is_err());
    }
}
