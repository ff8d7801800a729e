use crate::pb::HealthRes;

/// Simple health service backing the REST API's `/health` endpoint.
///
/// Provides a standardised way to check that the clinicals service is up.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Check health without creating an instance.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Clinicals API is alive".into(),
        }
    }
}
