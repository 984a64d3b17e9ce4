use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::entities;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::blood_pressure::record_blood_pressure,
        handlers::blood_pressure::get_blood_pressure,
        handlers::weight::record_weight,
        handlers::weight::get_weight,
        handlers::expenses::record_expense,
        handlers::expenses::get_expense_summary,
    ),
    components(
        schemas(
            handlers::health::HealthResponse,
            entities::blood_pressure::RecordBloodPressureBody,
            entities::blood_pressure::BloodPressureEntry,
            entities::weight::RecordWeightBody,
            entities::weight::WeightEntry,
            entities::expense::RecordExpenseBody,
            entities::expense::ExpenseSummaryResponse,
            entities::common::MessageResponse,
            entities::common::ErrorBody,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "blood_pressure", description = "Blood pressure readings"),
        (name = "weight", description = "Weight readings"),
        (name = "expenses", description = "Expense recording and budget summary"),
    ),
    info(
        title = "VitalLedger API",
        description = "Personal vitals and expense recorder gated by static API keys",
    ),
    servers(
        (url = "/", description = "Local server")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-API-Key"))),
            );
        }
    }
}

/// Swagger UI at /api-docs, backed by the generated document
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/health",
            "/blood-pressure",
            "/weight",
            "/expenses",
            "/expenses/current-week",
        ] {
            assert!(
                paths.iter().any(|p| *p == expected),
                "missing path {expected}"
            );
        }
    }

    #[test]
    fn api_key_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("api_key"));
    }
}
