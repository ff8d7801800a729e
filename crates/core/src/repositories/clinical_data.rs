//! Clinical-data persistence.
//!
//! Rows live in the `clinicaldata` table with a non-null `patient_id` foreign key. The patient
//! reference is fixed at insert time: [`Repository::save`] rewrites the component name, value and
//! measured time only.
//!
//! A record inserted without a measured time is stamped with the insert time.

use super::Repository;
use crate::pb;
use crate::{CoreError, CoreResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

#[derive(Debug, sqlx::FromRow)]
struct ClinicalDataRow {
    id: i32,
    component_name: String,
    component_value: String,
    measured_date_time: Option<DateTime<Utc>>,
    patient_id: i32,
}

impl From<ClinicalDataRow> for pb::ClinicalData {
    fn from(row: ClinicalDataRow) -> Self {
        pb::ClinicalData {
            id: row.id,
            component_name: row.component_name,
            component_value: row.component_value,
            measured_date_time: row.measured_date_time,
            patient_id: row.patient_id,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ClinicalDataRepository {
    pool: SqlitePool,
}

impl ClinicalDataRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for ClinicalDataRepository {
    type Entity = pb::ClinicalData;
    type NewEntity = pb::CreateClinicalDataReq;

    async fn find_all(&self) -> CoreResult<Vec<pb::ClinicalData>> {
        let rows = sqlx::query_as::<_, ClinicalDataRow>(
            "SELECT id, component_name, component_value, measured_date_time, patient_id \
             FROM clinicaldata ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(CoreError::Query)?;

        Ok(rows.into_iter().map(pb::ClinicalData::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> CoreResult<Option<pb::ClinicalData>> {
        let row = sqlx::query_as::<_, ClinicalDataRow>(
            "SELECT id, component_name, component_value, measured_date_time, patient_id \
             FROM clinicaldata WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(CoreError::Query)?;

        Ok(row.map(pb::ClinicalData::from))
    }

    async fn insert(&self, new: pb::CreateClinicalDataReq) -> CoreResult<pb::ClinicalData> {
        let measured = new.measured_date_time.unwrap_or_else(Utc::now);

        let row = sqlx::query_as::<_, ClinicalDataRow>(
            "INSERT INTO clinicaldata (component_name, component_value, measured_date_time, patient_id) \
             VALUES (?, ?, ?, ?) \
             RETURNING id, component_name, component_value, measured_date_time, patient_id",
        )
        .bind(new.component_name)
        .bind(new.component_value)
        .bind(measured)
        .bind(new.patient_id)
        .fetch_one(&self.pool)
        .await
        .map_err(CoreError::Query)?;

        tracing::debug!(
            "inserted clinical data {} for patient {}",
            row.id,
            row.patient_id
        );
        Ok(row.into())
    }

    async fn save(&self, record: &pb::ClinicalData) -> CoreResult<pb::ClinicalData> {
        let row = sqlx::query_as::<_, ClinicalDataRow>(
            "UPDATE clinicaldata SET component_name = ?, component_value = ?, measured_date_time = ? \
             WHERE id = ? \
             RETURNING id, component_name, component_value, measured_date_time, patient_id",
        )
        .bind(&record.component_name)
        .bind(&record.component_value)
        .bind(record.measured_date_time)
        .bind(record.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(CoreError::Query)?;

        row.map(pb::ClinicalData::from)
            .ok_or(CoreError::ClinicalDataNotFound(record.id))
    }

    async fn delete(&self, id: i32) -> CoreResult<bool> {
        let result = sqlx::query("DELETE FROM clinicaldata WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(CoreError::Query)?;

        Ok(result.rows_affected() > 0)
    }
}
