use serde::{Deserialize, Serialize};

/// Storage model for an API key record.
///
/// Records are created out-of-band (seeded directly into the store); the HTTP
/// surface only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyRecord {
    /// The opaque bearer credential presented via the `X-API-Key` header
    pub key: String,

    /// Spending budget for expense summaries. Treated as 0 when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
}
