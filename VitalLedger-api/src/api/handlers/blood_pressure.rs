use axum::extract::{Json, State};
use axum::http::StatusCode;
use tracing::{error, info};

use vital_ledger_domain::error::ApiError;

use crate::api::routes::AppState;
use crate::entities::blood_pressure::{BloodPressureEntry, RecordBloodPressureBody};
use crate::entities::common::MessageResponse;

/// Record a new blood pressure reading
#[utoipa::path(
    post,
    path = "/blood-pressure",
    request_body = RecordBloodPressureBody,
    responses(
        (status = 201, description = "Reading recorded", body = MessageResponse),
        (status = 400, description = "Missing or invalid field", body = crate::entities::common::ErrorBody),
        (status = 401, description = "Missing or invalid API key", body = crate::entities::common::ErrorBody),
        (status = 500, description = "Store failure", body = crate::entities::common::ErrorBody),
    ),
    security(
        ("api_key" = [])
    ),
    tag = "blood_pressure"
)]
pub async fn record_blood_pressure(
    State(state): State<AppState>,
    Json(body): Json<RecordBloodPressureBody>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let request = body.validate()?;

    let reading = state
        .blood_pressure
        .insert(request.into())
        .await
        .map_err(|e| {
            error!("Failed to store blood pressure reading: {}", e);
            ApiError::from(e)
        })?;

    info!("Recorded blood pressure reading {}", reading.id);
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Blood pressure recorded successfully")),
    ))
}

/// List every blood pressure reading ever recorded
#[utoipa::path(
    get,
    path = "/blood-pressure",
    responses(
        (status = 200, description = "All recorded readings", body = [BloodPressureEntry]),
        (status = 401, description = "Missing or invalid API key", body = crate::entities::common::ErrorBody),
        (status = 500, description = "Store failure", body = crate::entities::common::ErrorBody),
    ),
    security(
        ("api_key" = [])
    ),
    tag = "blood_pressure"
)]
pub async fn get_blood_pressure(
    State(state): State<AppState>,
) -> Result<Json<Vec<BloodPressureEntry>>, ApiError> {
    let readings = state.blood_pressure.get_all().await.map_err(|e| {
        error!("Failed to list blood pressure readings: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(
        readings.into_iter().map(BloodPressureEntry::from).collect(),
    ))
}
