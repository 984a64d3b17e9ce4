//! Authentication gate for the VitalLedger API.
//!
//! Every protected route is wrapped by [`require_api_key`], which reads the
//! `X-API-Key` header and checks membership in the api_keys collection. The
//! lookup is fresh on every request; validity is never cached and repeated
//! failures are not locked out.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, warn};

use vital_ledger_data::repository::ApiKeyCollection;

use crate::error::ApiError;

/// Request header carrying the credential
pub const API_KEY_HEADER: &str = "X-API-Key";

/// The API key that authenticated the current request, inserted into request
/// extensions so handlers needing owner identity (expenses) can read it.
#[derive(Debug, Clone)]
pub struct AuthenticatedKey(pub String);

/// Middleware for protected routes. Rejects with 401 before any handler
/// logic runs; a store failure during the lookup surfaces as 500.
pub async fn require_api_key(
    State(api_keys): State<ApiKeyCollection>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(value) = req.headers().get(API_KEY_HEADER) else {
        debug!("Request to {} without an API key", req.uri().path());
        return Err(ApiError::MissingApiKey);
    };

    let key = value
        .to_str()
        .map_err(|_| ApiError::InvalidApiKey)?
        .to_string();

    match api_keys.find_key(&key).await? {
        Some(_) => {
            req.extensions_mut().insert(AuthenticatedKey(key));
            Ok(next.run(req).await)
        }
        None => {
            warn!("Rejected request to {} with unknown API key", req.uri().path());
            Err(ApiError::InvalidApiKey)
        }
    }
}
