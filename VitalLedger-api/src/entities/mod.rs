// Public entities for the VitalLedger API
// This module contains data structures that cross the application boundary.

// Request/response structures per collection
pub mod blood_pressure;
pub mod expense;
pub mod weight;

// Common entities shared by every endpoint
pub mod common;

use serde_json::Value;

/// Render a raw field value for a validation message, with absent fields
/// shown as `None`.
pub(crate) fn fmt_field(value: Option<&Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "None".to_string(),
    }
}
