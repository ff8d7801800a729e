//! JSON wire types.
//!
//! Field names are camelCase on the wire. Request bodies tolerate missing fields (strings default
//! to empty, numbers to zero) and ignore unknown ones, so a client-supplied `id` on create is
//! simply dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// A person under observation.
///
/// The owned clinical-data collection is not part of the patient's JSON; each clinical-data
/// record points back at its patient through `patientId` instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

/// Body of `POST /api/patients` and `PUT /api/patients/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientReq {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

/// A single measurement owned by one patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalData {
    pub id: i32,
    pub component_name: String,
    pub component_value: String,
    pub measured_date_time: Option<DateTime<Utc>>,
    pub patient_id: i32,
}

/// Body of `POST /api/clinicaldata`.
///
/// `measuredDateTime` may be omitted, in which case the server stamps the record with the
/// creation time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClinicalDataReq {
    #[serde(default)]
    pub component_name: String,
    #[serde(default)]
    pub component_value: String,
    #[serde(default)]
    pub measured_date_time: Option<DateTime<Utc>>,
    pub patient_id: i32,
}

/// Body of `PUT /api/clinicaldata/{id}`.
///
/// All three fields overwrite the stored values, including a missing `measuredDateTime`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateClinicalDataReq {
    pub component_name: String,
    pub component_value: String,
    pub measured_date_time: Option<DateTime<Utc>>,
}

/// Body of `POST /api/clinicaldata/clinicals`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalDataRequest {
    pub patient_id: i32,
    #[serde(default)]
    pub component_name: String,
    #[serde(default)]
    pub component_value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_serialises_camel_case() {
        let patient = Patient {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            age: 36,
        };
        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "firstName": "Ada", "lastName": "Lovelace", "age": 36})
        );
    }

    #[test]
    fn test_patient_req_ignores_id_and_defaults_missing_fields() {
        let req: PatientReq =
            serde_json::from_str(r#"{"id": 42, "firstName": "Grace"}"#).unwrap();
        assert_eq!(req.first_name, "Grace");
        assert_eq!(req.last_name, "");
        assert_eq!(req.age, 0);
    }

    #[test]
    fn test_defaulted_request_schemas_expose_camel_case_properties() {
        let (name, schema) = <PatientReq as ToSchema>::schema();
        assert_eq!(name, "PatientReq");
        let json = serde_json::to_value(&schema).unwrap();
        for field in ["firstName", "lastName", "age"] {
            assert!(json["properties"].get(field).is_some(), "missing {field}");
        }

        let (name, schema) = <UpdateClinicalDataReq as ToSchema>::schema();
        assert_eq!(name, "UpdateClinicalDataReq");
        let json = serde_json::to_value(&schema).unwrap();
        for field in ["componentName", "componentValue", "measuredDateTime"] {
            assert!(json["properties"].get(field).is_some(), "missing {field}");
        }
    }

    #[test]
    fn test_create_clinical_data_req_requires_patient_id() {
        let res = serde_json::from_str::<CreateClinicalDataReq>(
            r#"{"componentName": "HR", "componentValue": "72"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_clinical_data_request_parses_convenience_shape() {
        let req: ClinicalDataRequest = serde_json::from_str(
            r#"{"patientId": 1, "componentName": "HR", "componentValue": "72"}"#,
        )
        .unwrap();
        assert_eq!(req.patient_id, 1);
        assert_eq!(req.component_name, "HR");
        assert_eq!(req.component_value, "72");
    }

    #[test]
    fn test_clinical_data_timestamp_is_rfc3339() {
        let measured = "2026-10-16T09:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let record = ClinicalData {
            id: 7,
            component_name: "HR".into(),
            component_value: "72".into(),
            measured_date_time: Some(measured),
            patient_id: 1,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["measuredDateTime"], "2026-10-16T09:30:00Z");
        assert_eq!(json["patientId"], 1);
    }
}
