use axum::extract::{Json, State};
use axum::http::StatusCode;
use tracing::{error, info};

use vital_ledger_domain::error::ApiError;

use crate::api::routes::AppState;
use crate::entities::common::MessageResponse;
use crate::entities::weight::{RecordWeightBody, WeightEntry};

/// Record a new weight reading
#[utoipa::path(
    post,
    path = "/weight",
    request_body = RecordWeightBody,
    responses(
        (status = 201, description = "Reading recorded", body = MessageResponse),
        (status = 400, description = "Missing or invalid field", body = crate::entities::common::ErrorBody),
        (status = 401, description = "Missing or invalid API key", body = crate::entities::common::ErrorBody),
        (status = 500, description = "Store failure", body = crate::entities::common::ErrorBody),
    ),
    security(
        ("api_key" = [])
    ),
    tag = "weight"
)]
pub async fn record_weight(
    State(state): State<AppState>,
    Json(body): Json<RecordWeightBody>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let request = body.validate()?;

    let reading = state.weight.insert(request.into()).await.map_err(|e| {
        error!("Failed to store weight reading: {}", e);
        ApiError::from(e)
    })?;

    info!("Recorded weight reading {}", reading.id);
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Weight recorded successfully")),
    ))
}

/// List every weight reading ever recorded
#[utoipa::path(
    get,
    path = "/weight",
    responses(
        (status = 200, description = "All recorded readings", body = [WeightEntry]),
        (status = 401, description = "Missing or invalid API key", body = crate::entities::common::ErrorBody),
        (status = 500, description = "Store failure", body = crate::entities::common::ErrorBody),
    ),
    security(
        ("api_key" = [])
    ),
    tag = "weight"
)]
pub async fn get_weight(State(state): State<AppState>) -> Result<Json<Vec<WeightEntry>>, ApiError> {
    let readings = state.weight.get_all().await.map_err(|e| {
        error!("Failed to list weight readings: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(readings.into_iter().map(WeightEntry::from).collect()))
}
