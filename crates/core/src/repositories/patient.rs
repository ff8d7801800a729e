//! Patient persistence.
//!
//! Rows live in the `patient` table. Clinical data hangs off a patient by foreign key and is
//! removed by the database when its patient is deleted; this repository never touches the
//! `clinicaldata` table itself.

use super::Repository;
use crate::pb;
use crate::{CoreError, CoreResult};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Debug, sqlx::FromRow)]
struct PatientRow {
    id: i32,
    first_name: String,
    last_name: String,
    age: i32,
}

impl From<PatientRow> for pb::Patient {
    fn from(row: PatientRow) -> Self {
        pb::Patient {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            age: row.age,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PatientRepository {
    pool: SqlitePool,
}

impl PatientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for PatientRepository {
    type Entity = pb::Patient;
    type NewEntity = pb::PatientReq;

    async fn find_all(&self) -> CoreResult<Vec<pb::Patient>> {
        let rows = sqlx::query_as::<_, PatientRow>(
            "SELECT id, first_name, last_name, age FROM patient ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(CoreError::Query)?;

        Ok(rows.into_iter().map(pb::Patient::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> CoreResult<Option<pb::Patient>> {
        let row = sqlx::query_as::<_, PatientRow>(
            "SELECT id, first_name, last_name, age FROM patient WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(CoreError::Query)?;

        Ok(row.map(pb::Patient::from))
    }

    async fn insert(&self, new: pb::PatientReq) -> CoreResult<pb::Patient> {
        let row = sqlx::query_as::<_, PatientRow>(
            "INSERT INTO patient (first_name, last_name, age) VALUES (?, ?, ?) \
             RETURNING id, first_name, last_name, age",
        )
        .bind(new.first_name)
        .bind(new.last_name)
        .bind(new.age)
        .fetch_one(&self.pool)
        .await
        .map_err(CoreError::Query)?;

        tracing::debug!("inserted patient {}", row.id);
        Ok(row.into())
    }

    async fn save(&self, patient: &pb::Patient) -> CoreResult<pb::Patient> {
        let row = sqlx::query_as::<_, PatientRow>(
            "UPDATE patient SET first_name = ?, last_name = ?, age = ? WHERE id = ? \
             RETURNING id, first_name, last_name, age",
        )
        .bind(&patient.first_name)
        .bind(&patient.last_name)
        .bind(patient.age)
        .bind(patient.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(CoreError::Query)?;

        row.map(pb::Patient::from)
            .ok_or(CoreError::PatientNotFound(patient.id))
    }

    async fn delete(&self, id: i32) -> CoreResult<bool> {
        let result = sqlx::query("DELETE FROM patient WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(CoreError::Query)?;

        Ok(result.rows_affected() > 0)
    }
}
