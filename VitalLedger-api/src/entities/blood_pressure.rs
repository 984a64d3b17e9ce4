use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use vital_ledger_data::models::{BloodPressureReading, NewBloodPressureReading};
use vital_ledger_domain::error::ApiError;

use super::fmt_field;

/// Raw body for `POST /blood-pressure`, before validation.
///
/// Field names must match exactly; the canonical spelling is `heart_rate`
/// (the historical `heartRate` variant is not accepted).
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RecordBloodPressureBody {
    /// Systolic blood pressure (the higher number)
    #[schema(value_type = Option<f64>)]
    pub systolic: Option<Value>,

    /// Diastolic blood pressure (the lower number)
    #[schema(value_type = Option<f64>)]
    pub diastolic: Option<Value>,

    /// Heart rate in beats per minute
    #[schema(value_type = Option<f64>)]
    pub heart_rate: Option<Value>,
}

/// Validated payload for recording a blood pressure reading
#[derive(Debug, Clone, PartialEq)]
pub struct RecordBloodPressure {
    pub systolic: f64,
    pub diastolic: f64,
    pub heart_rate: f64,
}

impl RecordBloodPressureBody {
    /// Single validation stage: either a typed request, or a 400 message
    /// listing every required field with the value that was received.
    pub fn validate(self) -> Result<RecordBloodPressure, ApiError> {
        if self.systolic.is_none() || self.diastolic.is_none() || self.heart_rate.is_none() {
            return Err(ApiError::Validation(format!(
                "Missing required fields: systolic={}, diastolic={}, heart_rate={}",
                fmt_field(self.systolic.as_ref()),
                fmt_field(self.diastolic.as_ref()),
                fmt_field(self.heart_rate.as_ref()),
            )));
        }

        Ok(RecordBloodPressure {
            systolic: require_number("systolic", self.systolic.as_ref())?,
            diastolic: require_number("diastolic", self.diastolic.as_ref())?,
            heart_rate: require_number("heart_rate", self.heart_rate.as_ref())?,
        })
    }
}

fn require_number(name: &str, value: Option<&Value>) -> Result<f64, ApiError> {
    value
        .and_then(Value::as_f64)
        .ok_or_else(|| ApiError::Validation(format!("{name} must be a number")))
}

impl From<RecordBloodPressure> for NewBloodPressureReading {
    fn from(request: RecordBloodPressure) -> Self {
        NewBloodPressureReading {
            systolic: request.systolic,
            diastolic: request.diastolic,
            heart_rate: request.heart_rate,
        }
    }
}

/// Reading as it appears in list responses, id rendered as an opaque string
#[derive(Debug, Serialize, ToSchema)]
pub struct BloodPressureEntry {
    /// Store-generated identifier
    pub id: Uuid,

    /// Server-assigned recording time
    pub timestamp: DateTime<Utc>,

    pub systolic: f64,
    pub diastolic: f64,
    pub heart_rate: f64,
}

impl From<BloodPressureReading> for BloodPressureEntry {
    fn from(reading: BloodPressureReading) -> Self {
        Self {
            id: reading.id,
            timestamp: reading.timestamp,
            systolic: reading.systolic,
            diastolic: reading.diastolic,
            heart_rate: reading.heart_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn body(value: Value) -> RecordBloodPressureBody {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn complete_body_validates() {
        let request = body(json!({ "systolic": 120, "diastolic": 80, "heart_rate": 72 }))
            .validate()
            .unwrap();

        assert_eq!(request.systolic, 120.0);
        assert_eq!(request.diastolic, 80.0);
        assert_eq!(request.heart_rate, 72.0);
    }

    #[test]
    fn missing_field_is_listed_with_received_values() {
        let error = body(json!({ "systolic": 120, "diastolic": 80 }))
            .validate()
            .unwrap_err();

        let message = error.to_string();
        assert_eq!(
            message,
            "Missing required fields: systolic=120, diastolic=80, heart_rate=None"
        );
    }

    #[test]
    fn camel_case_heart_rate_is_treated_as_missing() {
        // The historical `heartRate` spelling is not the canonical field name.
        let error = body(json!({ "systolic": 120, "diastolic": 80, "heartRate": 72 }))
            .validate()
            .unwrap_err();

        assert!(error.to_string().contains("heart_rate=None"));
    }

    #[test]
    fn non_numeric_field_names_the_field() {
        let error = body(json!({ "systolic": "high", "diastolic": 80, "heart_rate": 72 }))
            .validate()
            .unwrap_err();

        assert_eq!(error.to_string(), "systolic must be a number");
    }
}
