//! # API REST
//!
//! REST API implementation for the clinicals service.
//!
//! Handles:
//! - HTTP endpoints with axum under `/api/patients` and `/api/clinicaldata`
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, status codes, CORS)
//!
//! Handlers call the `clinicals-core` repositories directly; there is no service layer in between.

#![warn(rust_2018_idioms)]

use axum::{response::Json, routing::get, routing::post, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{pb, HealthService};

pub mod clinical_data;
pub mod error;
pub mod patients;
pub mod state;

#[cfg(test)]
mod test_support;

pub use error::ApiError;
pub use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        patients::list_patients,
        patients::get_patient,
        patients::create_patient,
        patients::update_patient,
        patients::delete_patient,
        clinical_data::list_clinical_data,
        clinical_data::get_clinical_data,
        clinical_data::create_clinical_data,
        clinical_data::update_clinical_data,
        clinical_data::delete_clinical_data,
        clinical_data::save_clinical_data,
    ),
    components(schemas(
        pb::HealthRes,
        pb::Patient,
        pb::PatientReq,
        pb::ClinicalData,
        pb::CreateClinicalDataReq,
        pb::UpdateClinicalDataReq,
        pb::ClinicalDataRequest,
    ))
)]
pub struct ApiDoc;

/// Build the REST router with every endpoint, Swagger UI and a permissive CORS layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/patients",
            get(patients::list_patients).post(patients::create_patient),
        )
        .route(
            "/api/patients/:id",
            get(patients::get_patient)
                .put(patients::update_patient)
                .delete(patients::delete_patient),
        )
        .route(
            "/api/clinicaldata",
            get(clinical_data::list_clinical_data).post(clinical_data::create_clinical_data),
        )
        .route(
            "/api/clinicaldata/clinicals",
            post(clinical_data::save_clinical_data),
        )
        .route(
            "/api/clinicaldata/:id",
            get(clinical_data::get_clinical_data)
                .put(clinical_data::update_clinical_data)
                .delete(clinical_data::delete_clinical_data),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = pb::HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
async fn health() -> Json<pb::HealthRes> {
    Json(HealthService::check_health())
}
