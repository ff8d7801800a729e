//! `/api/patients` handlers.

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
    path = "/api/patients",
    responses(
        (status = 200, description = "All patients", body = [pb::Patient]),
        (status = 500, description = "Internal server error")
    )
)]
/// List all patients in the system
///
/// No filtering or pagination; patients are returned in identifier order.
#[axum::debug_handler]
pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<pb::Patient>>, ApiError> {
    match state.patients.find_all().await {
        Ok(patients) => Ok(Json(patients)),
        Err(e) => Err(internal_error("List patients", e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/patients/{id}",
    params(("id" = i32, Path, description = "Patient identifier")),
    responses(
        (status = 200, description = "Patient found", body = pb::Patient),
        (status = 404, description = "No patient with that identifier"),
        (status = 500, description = "Internal server error")
    )
)]
/// Fetch a single patient
///
/// # Errors
/// Returns `404 Not Found` with an empty body if the patient does not exist, or
/// `500 Internal Server Error` (body `Error retrieving patient`) if the lookup fails.
#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<pb::Patient>, ApiError> {
    match state.patients.find_by_id(id).await {
        Ok(Some(patient)) => Ok(Json(patient)),
        Ok(None) => Err(not_found()),
        Err(e) => {
            tracing::error!("Get patient error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving patient"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/patients",
    request_body = pb::PatientReq,
    responses(
        (status = 200, description = "Patient created", body = pb::Patient),
        (status = 500, description = "Internal server error")
    )
)]
/// Create a new patient record
///
/// The identifier is assigned by the database; any `id` in the body is ignored.
#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<AppState>,
    Json(req): Json<pb::PatientReq>,
) -> Result<Json<pb::Patient>, ApiError> {
    match state.patients.insert(req).await {
        Ok(patient) => Ok(Json(patient)),
        Err(e) => Err(internal_error("Create patient", e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/patients/{id}",
    params(("id" = i32, Path, description = "Patient identifier")),
    request_body = pb::PatientReq,
    responses(
        (status = 200, description = "Patient updated", body = pb::Patient),
        (status = 404, description = "No patient with that identifier"),
        (status = 500, description = "Internal server error")
    )
)]
/// Overwrite a patient's first name, last name and age
///
/// The patient's clinical data stays attached to it; records are never moved between patients
/// through this endpoint.
#[axum::debug_handler]
pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<pb::PatientReq>,
) -> Result<Json<pb::Patient>, ApiError> {
    let existing = match state.patients.find_by_id(id).await {
        Ok(Some(patient)) => patient,
        Ok(None) => return Err(not_found()),
        Err(e) => return Err(internal_error("Update patient", e)),
    };

    let updated = pb::Patient {
        id: existing.id,
        first_name: req.first_name,
        last_name: req.last_name,
        age: req.age,
    };

    match state.patients.save(&updated).await {
        Ok(patient) => Ok(Json(patient)),
        // Deleted between the lookup and the write.
        Err(CoreError::PatientNotFound(_)) => Err(not_found()),
        Err(e) => Err(internal_error("Update patient", e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/patients/{id}",
    params(("id" = i32, Path, description = "Patient identifier")),
    responses(
        (status = 204, description = "Patient and its clinical data deleted"),
        (status = 404, description = "No patient with that identifier"),
        (status = 500, description = "Internal server error")
    )
)]
/// Delete a patient together with all of its clinical data
#[axum::debug_handler]
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    match state.patients.delete(id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(not_found()),
        Err(e) => Err(internal_error("Delete patient", e)),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{send, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_list_patients_starts_empty() {
        let app = test_app().await;

        let (status, body) = send(&app, Method::GET, "/api/patients", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_record() {
        let app = test_app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/patients",
            Some(json!({"id": 77, "firstName": "Ada", "lastName": "Lovelace", "age": 36})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let created: Value = serde_json::from_slice(&body).unwrap();
        let id = created["id"].as_i64().unwrap();
        assert_ne!(id, 77, "client-supplied id must be ignored");
        assert_eq!(created["firstName"], "Ada");
        assert_eq!(created["lastName"], "Lovelace");
        assert_eq!(created["age"], 36);

        let (status, body) = send(&app, Method::GET, &format!("/api/patients/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), created);

        let (_, body) = send(&app, Method::GET, "/api/patients", None).await;
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!([created])
        );
    }

    #[tokio::test]
    async fn test_get_absent_patient_is_empty_404() {
        let app = test_app().await;

        let (status, body) = send(&app, Method::GET, "/api/patients/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_get_with_non_integer_id_is_rejected() {
        let app = test_app().await;

        let (status, _) = send(&app, Method::GET, "/api/patients/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_and_keeps_id() {
        let app = test_app().await;
        let (_, body) = send(
            &app,
            Method::POST,
            "/api/patients",
            Some(json!({"firstName": "Ada", "lastName": "Lovelace", "age": 36})),
        )
        .await;
        let id = serde_json::from_slice::<Value>(&body).unwrap()["id"]
            .as_i64()
            .unwrap();

        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/patients/{id}"),
            Some(json!({"firstName": "Augusta", "lastName": "King", "age": 37})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let expected = json!({"id": id, "firstName": "Augusta", "lastName": "King", "age": 37});
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), expected);

        let (_, body) = send(&app, Method::GET, &format!("/api/patients/{id}"), None).await;
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), expected);
    }

    #[tokio::test]
    async fn test_update_keeps_clinical_data_attached() {
        let app = test_app().await;
        let (_, body) = send(
            &app,
            Method::POST,
            "/api/patients",
            Some(json!({"firstName": "Ada", "lastName": "Lovelace", "age": 36})),
        )
        .await;
        let id = serde_json::from_slice::<Value>(&body).unwrap()["id"]
            .as_i64()
            .unwrap();
        send(
            &app,
            Method::POST,
            "/api/clinicaldata/clinicals",
            Some(json!({"patientId": id, "componentName": "HR", "componentValue": "72"})),
        )
        .await;

        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/api/patients/{id}"),
            Some(json!({"firstName": "Augusta", "lastName": "King", "age": 37})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::GET, "/api/clinicaldata", None).await;
        let records: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(records.as_array().unwrap().len(), 1);
        assert_eq!(records[0]["patientId"], id);
    }

    #[tokio::test]
    async fn test_update_absent_patient_is_404_and_writes_nothing() {
        let app = test_app().await;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/patients/999",
            Some(json!({"firstName": "No", "lastName": "One", "age": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());

        let (_, body) = send(&app, Method::GET, "/api/patients", None).await;
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));
    }

    #[tokio::test]
    async fn test_delete_cascades_to_clinical_data() {
        let app = test_app().await;
        let (_, body) = send(
            &app,
            Method::POST,
            "/api/patients",
            Some(json!({"firstName": "Ada", "lastName": "Lovelace", "age": 36})),
        )
        .await;
        let id = serde_json::from_slice::<Value>(&body).unwrap()["id"]
            .as_i64()
            .unwrap();
        let (_, body) = send(
            &app,
            Method::POST,
            "/api/clinicaldata/clinicals",
            Some(json!({"patientId": id, "componentName": "HR", "componentValue": "72"})),
        )
        .await;
        let record_id = serde_json::from_slice::<Value>(&body).unwrap()["id"]
            .as_i64()
            .unwrap();

        let (status, body) = send(&app, Method::DELETE, &format!("/api/patients/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, _) = send(&app, Method::GET, &format!("/api/patients/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(
            &app,
            Method::GET,
            &format!("/api/clinicaldata/{record_id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_absent_patient_is_404() {
        let app = test_app().await;

        let (status, body) = send(&app, Method::DELETE, "/api/patients/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }
}
