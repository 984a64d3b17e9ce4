use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success message returned by every record endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Error body returned for every failure. Documentation-only mirror of the
/// wire format produced by the domain error type.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Error message
    pub error: String,
}
