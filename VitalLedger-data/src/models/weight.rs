use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storage model for a weight reading. Immutable once inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightReading {
    /// Store-generated identifier, surfaced to clients as an opaque string
    pub id: Uuid,

    /// When the reading was recorded, assigned by the server at insert time
    pub timestamp: DateTime<Utc>,

    /// Weight value as supplied by the client
    pub weight: f64,
}

/// Input data for creating a new weight reading
#[derive(Debug, Clone, PartialEq)]
pub struct NewWeightReading {
    /// Weight value as supplied by the client
    pub weight: f64,
}

impl NewWeightReading {
    /// Materialize a stored document with a fresh id and server timestamp.
    pub fn into_document(self) -> WeightReading {
        WeightReading {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            weight: self.weight,
        }
    }
}
