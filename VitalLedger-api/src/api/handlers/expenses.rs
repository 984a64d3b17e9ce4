use axum::extract::{Extension, Json, State};
use axum::http::StatusCode;
use tracing::{error, info};

use vital_ledger_data::models::NewExpense;
use vital_ledger_domain::auth::AuthenticatedKey;
use vital_ledger_domain::error::ApiError;
use vital_ledger_domain::services::summarize;

use crate::api::routes::AppState;
use crate::entities::common::MessageResponse;
use crate::entities::expense::{ExpenseSummaryResponse, RecordExpenseBody};

/// Record an expense against the calling API key
#[utoipa::path(
    post,
    path = "/expenses",
    request_body = RecordExpenseBody,
    responses(
        (status = 201, description = "Expense recorded", body = MessageResponse),
        (status = 400, description = "Missing or invalid field", body = crate::entities::common::ErrorBody),
        (status = 401, description = "Missing or invalid API key", body = crate::entities::common::ErrorBody),
        (status = 500, description = "Store failure", body = crate::entities::common::ErrorBody),
    ),
    security(
        ("api_key" = [])
    ),
    tag = "expenses"
)]
pub async fn record_expense(
    State(state): State<AppState>,
    Extension(key): Extension<AuthenticatedKey>,
    Json(body): Json<RecordExpenseBody>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let request = body.validate()?;

    let expense = state
        .expenses
        .insert(NewExpense {
            user: key.0,
            description: request.description,
            amount: request.amount,
        })
        .await
        .map_err(|e| {
            error!("Failed to store expense: {}", e);
            ApiError::from(e)
        })?;

    info!("Recorded expense {} for {}", expense.id, expense.user);
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Expense recorded successfully")),
    ))
}

/// Summarize the calling key's spending against its budget
///
/// The route name suggests a weekly window, but no date filter has ever
/// been applied: the summary covers every expense recorded for the key.
#[utoipa::path(
    get,
    path = "/expenses/current-week",
    responses(
        (status = 200, description = "Spending summary", body = ExpenseSummaryResponse),
        (status = 401, description = "Missing or invalid API key", body = crate::entities::common::ErrorBody),
        (status = 500, description = "Store failure", body = crate::entities::common::ErrorBody),
    ),
    security(
        ("api_key" = [])
    ),
    tag = "expenses"
)]
pub async fn get_expense_summary(
    State(state): State<AppState>,
    Extension(key): Extension<AuthenticatedKey>,
) -> Result<Json<ExpenseSummaryResponse>, ApiError> {
    let expenses = state.expenses.find_by_user(&key.0).await.map_err(|e| {
        error!("Failed to list expenses for {}: {}", key.0, e);
        ApiError::from(e)
    })?;

    // Second, independent read. The budget can change between the two
    // but the summary is advisory so no atomicity is needed.
    let record = state.api_keys.find_key(&key.0).await.map_err(|e| {
        error!("Failed to look up key record for {}: {}", key.0, e);
        ApiError::from(e)
    })?;

    let summary = summarize(&expenses, record.and_then(|r| r.budget));
    Ok(Json(ExpenseSummaryResponse::from(summary)))
}
