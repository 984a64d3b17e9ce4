use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use vital_ledger_data::repository::{
    ApiKeyCollection, ApiKeyRepository, BloodPressureCollection, BloodPressureRepository,
    ExpenseCollection, ExpenseRepository, WeightCollection, WeightRepository,
};
use vital_ledger_domain::auth::require_api_key;

use crate::api::handlers;
use crate::openapi::configure_swagger_routes;

/// Shared handler state, one collection handle per document kind
#[derive(Clone)]
pub struct AppState {
    pub blood_pressure: BloodPressureCollection,
    pub weight: WeightCollection,
    pub expenses: ExpenseCollection,
    pub api_keys: ApiKeyCollection,
}

impl AppState {
    /// Build state from a single store that backs every collection
    pub fn from_store<S>(store: S) -> Self
    where
        S: BloodPressureRepository
            + WeightRepository
            + ExpenseRepository
            + ApiKeyRepository
            + Clone
            + 'static,
    {
        Self {
            blood_pressure: Arc::new(store.clone()),
            weight: Arc::new(store.clone()),
            expenses: Arc::new(store.clone()),
            api_keys: Arc::new(store),
        }
    }
}

/// Build the application router
///
/// Every recording route sits behind the API key middleware; /health and
/// the Swagger UI stay open.
pub fn create_app(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/blood-pressure",
            post(handlers::record_blood_pressure).get(handlers::get_blood_pressure),
        )
        .route(
            "/weight",
            post(handlers::record_weight).get(handlers::get_weight),
        )
        .route("/expenses", post(handlers::record_expense))
        .route("/expenses/current-week", get(handlers::get_expense_summary))
        .layer(middleware::from_fn_with_state(
            state.api_keys.clone(),
            require_api_key,
        ));

    Router::new()
        .merge(protected)
        .route("/health", get(handlers::health_check))
        .with_state(state)
        .merge(configure_swagger_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
