//! `/api/clinicaldata` handlers.

use crate::error::{internal_error, not_found, ApiError};
use crate::state::AppState;
use api_shared::pb;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use clinicals_core::{CoreError, Repository};

#[utoipa::path(
    get,
    path = "/api/clinicaldata",
    responses(
        (status = 200, description = "All clinical data", body = [pb::ClinicalData]),
        (status = 500, description = "Internal server error")
    )
)]
/// List every clinical-data record
///
/// Records come back in identifier order, across all patients, with no filtering or paging.
#[axum::debug_handler]
pub async fn list_clinical_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<pb::ClinicalData>>, ApiError> {
    tracing::info!("Fetching all clinical data");
    match state.clinical_data.find_all().await {
        Ok(records) => Ok(Json(records)),
        Err(e) => Err(internal_error("List clinical data", e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/clinicaldata/{id}",
    params(("id" = i32, Path, description = "Clinical data identifier")),
    responses(
        (status = 200, description = "Clinical data found", body = pb::ClinicalData),
        (status = 404, description = "No clinical data with that identifier"),
        (status = 500, description = "Internal server error")
    )
)]
/// Get a clinical-data record by identifier
///
/// An unknown identifier answers 404 with an empty body.
#[axum::debug_handler]
pub async fn get_clinical_data(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<pb::ClinicalData>, ApiError> {
    tracing::info!("Fetching clinical data with id: {}", id);
    match state.clinical_data.find_by_id(id).await {
        Ok(Some(record)) => Ok(Json(record)),
        Ok(None) => {
            tracing::warn!("Clinical data with id: {} not found", id);
            Err(not_found())
        }
        Err(e) => Err(internal_error("Get clinical data", e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/clinicaldata",
    request_body = pb::CreateClinicalDataReq,
    responses(
        (status = 200, description = "Clinical data created", body = pb::ClinicalData),
        (status = 500, description = "Internal server error")
    )
)]
/// Create a clinical-data record for the patient named in the body
///
/// A missing `measuredDateTime` is filled in with the creation time. A `patientId` that does not
/// reference an existing patient fails the foreign-key constraint and surfaces as a 500.
#[axum::debug_handler]
pub async fn create_clinical_data(
    State(state): State<AppState>,
    Json(req): Json<pb::CreateClinicalDataReq>,
) -> Result<Json<pb::ClinicalData>, ApiError> {
    tracing::info!("Creating new clinical data");
    match state.clinical_data.insert(req).await {
        Ok(record) => Ok(Json(record)),
        Err(e) => Err(internal_error("Create clinical data", e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/clinicaldata/{id}",
    params(("id" = i32, Path, description = "Clinical data identifier")),
    request_body = pb::UpdateClinicalDataReq,
    responses(
        (status = 200, description = "Clinical data updated", body = pb::ClinicalData),
        (status = 404, description = "No clinical data with that identifier"),
        (status = 500, description = "Internal server error")
    )
)]
/// Overwrite the component name, component value and measured time of a record
///
/// The owning patient never changes.
#[axum::debug_handler]
pub async fn update_clinical_data(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<pb::UpdateClinicalDataReq>,
) -> Result<Json<pb::ClinicalData>, ApiError> {
    tracing::info!("Updating clinical data with id: {}", id);

    let existing = match state.clinical_data.find_by_id(id).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            tracing::warn!("Clinical data with id: {} not found", id);
            return Err(not_found());
        }
        Err(e) => return Err(internal_error("Update clinical data", e)),
    };

    let updated = pb::ClinicalData {
        component_name: req.component_name,
        component_value: req.component_value,
        measured_date_time: req.measured_date_time,
        ..existing
    };

    match state.clinical_data.save(&updated).await {
        Ok(record) => Ok(Json(record)),
        Err(CoreError::ClinicalDataNotFound(_)) => {
            tracing::warn!("Clinical data with id: {} not found", id);
            Err(not_found())
        }
        Err(e) => Err(internal_error("Update clinical data", e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/clinicaldata/{id}",
    params(("id" = i32, Path, description = "Clinical data identifier")),
    responses(
        (status = 204, description = "Clinical data deleted"),
        (status = 404, description = "No clinical data with that identifier"),
        (status = 500, description = "Internal server error")
    )
)]
/// Delete a clinical-data record
///
/// Answers 204 when a row was removed and 404 when nothing matched. The owning patient is left in
/// place.
#[axum::debug_handler]
pub async fn delete_clinical_data(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    tracing::info!("Deleting clinical data with id: {}", id);
    match state.clinical_data.delete(id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => {
            tracing::warn!("Clinical data with id: {} not found", id);
            Err(not_found())
        }
        Err(e) => Err(internal_error("Delete clinical data", e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/clinicaldata/clinicals",
    request_body = pb::ClinicalDataRequest,
    responses(
        (status = 200, description = "Clinical data recorded for the patient", body = pb::ClinicalData),
        (status = 500, description = "Patient does not exist, or internal server error")
    )
)]
/// Record a measurement directly under a patient
///
/// Resolves the patient server-side and stamps the record with the current time. An unknown
/// `patientId` is treated as an unexpected failure rather than a 404.
#[axum::debug_handler]
pub async fn save_clinical_data(
    State(state): State<AppState>,
    Json(req): Json<pb::ClinicalDataRequest>,
) -> Result<Json<pb::ClinicalData>, ApiError> {
    tracing::info!("Saving clinical data for patient id: {}", req.patient_id);

    let patient = match state.patients.find_by_id(req.patient_id).await {
        Ok(Some(patient)) => patient,
        Ok(None) => {
            return Err(internal_error(
                "Save clinical data",
                CoreError::PatientNotFound(req.patient_id),
            ))
        }
        Err(e) => return Err(internal_error("Save clinical data", e)),
    };

    let new = pb::CreateClinicalDataReq {
        component_name: req.component_name,
        component_value: req.component_value,
        measured_date_time: None,
        patient_id: patient.id,
    };

    match state.clinical_data.insert(new).await {
        Ok(record) => Ok(Json(record)),
        Err(e) => Err(internal_error("Save clinical data", e)),
    }
}
