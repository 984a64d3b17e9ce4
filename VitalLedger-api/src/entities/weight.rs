use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use vital_ledger_data::models::{NewWeightReading, WeightReading};
use vital_ledger_domain::error::ApiError;

/// Raw body for `POST /weight`, before validation
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RecordWeightBody {
    /// Weight value
    #[schema(value_type = Option<f64>)]
    pub weight: Option<Value>,
}

/// Validated payload for recording a weight reading
#[derive(Debug, Clone, PartialEq)]
pub struct RecordWeight {
    pub weight: f64,
}

impl RecordWeightBody {
    pub fn validate(self) -> Result<RecordWeight, ApiError> {
        let value = self
            .weight
            .ok_or_else(|| ApiError::Validation("Missing weight field".to_string()))?;

        let weight = value
            .as_f64()
            .ok_or_else(|| ApiError::Validation("weight must be a number".to_string()))?;

        Ok(RecordWeight { weight })
    }
}

impl From<RecordWeight> for NewWeightReading {
    fn from(request: RecordWeight) -> Self {
        NewWeightReading {
            weight: request.weight,
        }
    }
}

/// Reading as it appears in list responses
#[derive(Debug, Serialize, ToSchema)]
pub struct WeightEntry {
    /// Store-generated identifier
    pub id: Uuid,

    /// Server-assigned recording time
    pub timestamp: DateTime<Utc>,

    pub weight: f64,
}

impl From<WeightReading> for WeightEntry {
    fn from(reading: WeightReading) -> Self {
        Self {
            id: reading.id,
            timestamp: reading.timestamp,
            weight: reading.weight,
        }
    }
}
