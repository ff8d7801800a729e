use clinicals_core::{ClinicalDataRepository, Database, PatientRepository};

/// Application state shared across REST API handlers
///
/// Holds one repository per table. Both wrap clones of the same connection pool.
#[derive(Clone, Debug)]
pub struct AppState {
    pub patients: PatientRepository,
    pub clinical_data: ClinicalDataRepository,
}

impl AppState {
    pub fn new(db: &Database) -> Self {
        Self {
            patients: PatientRepository::new(db.pool().clone()),
            clinical_data: ClinicalDataRepository::new(db.pool().clone()),
        }
    }
}
