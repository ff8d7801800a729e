//! Mapping from core failures to HTTP responses.
//!
//! Handlers answer with `(StatusCode, &'static str)` on failure: an empty 404 when the requested
//! record is absent, and a generic 500 for everything else. The underlying cause is logged, never
//! returned to the client.

use axum::http::StatusCode;
use clinicals_core::CoreError;

pub type ApiError = (StatusCode, &'static str);

pub(crate) fn not_found() -> ApiError {
    (StatusCode::NOT_FOUND, "")
}

pub(crate) fn internal_error(context: &str, e: CoreError) -> ApiError {
    tracing::error!("{} error: {:?}", context, e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
}
