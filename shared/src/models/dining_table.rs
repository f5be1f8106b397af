//! Dining Table Model

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation;

/// Dining table entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub table_id: i64,
    pub table_name: String,
    pub capacity: u32,
    /// Seated reservation, `None` while the table is free
    #[serde(default)]
    pub reservation_id: Option<i64>,
}

impl DiningTable {
    pub fn is_occupied(&self) -> bool {
        self.reservation_id.is_some()
    }

    /// Dashboard label: "Occupied" or "Free"
    pub fn status_label(&self) -> &'static str {
        if self.is_occupied() { "Occupied" } else { "Free" }
    }
}

/// Create dining table payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDraft {
    pub table_name: String,
    pub capacity: u32,
}

/// Table form input as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableForm {
    pub table_name: String,
    pub capacity: String,
}

impl TableForm {
    pub fn new(table_name: impl Into<String>, capacity: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            capacity: capacity.into(),
        }
    }

    /// Validate the form and coerce capacity to a number
    pub fn into_draft(self) -> Result<TableDraft, ValidationError> {
        validation::validate_table(&self.table_name, &self.capacity)
    }
}
