use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storage model for a blood pressure reading.
///
/// Readings are immutable once inserted; there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodPressureReading {
    /// Store-generated identifier, surfaced to clients as an opaque string
    pub id: Uuid,

    /// When the reading was recorded, assigned by the server at insert time
    pub timestamp: DateTime<Utc>,

    /// Systolic blood pressure (the higher number)
    pub systolic: f64,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: f64,

    /// Heart rate in beats per minute
    pub heart_rate: f64,
}

/// Input data for creating a new blood pressure reading
#[derive(Debug, Clone, PartialEq)]
pub struct NewBloodPressureReading {
    /// Systolic blood pressure (the higher number)
    pub systolic: f64,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: f64,

    /// Heart rate in beats per minute
    pub heart_rate: f64,
}

impl NewBloodPressureReading {
    /// Materialize a stored document with a fresh id and server timestamp.
    /// Clients cannot supply either field, so backdating is impossible.
    pub fn into_document(self) -> BloodPressureReading {
        BloodPressureReading {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            systolic: self.systolic,
            diastolic: self.diastolic,
            heart_rate: self.heart_rate,
        }
    }
}
