//! # API Shared
//!
//! Shared utilities and definitions for the clinicals APIs.
//!
//! Contains:
//! - JSON wire types (`pb` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `clinicals-core`, `api-rest` and the CLI so every surface speaks the same shapes.

pub mod health;
pub mod pb;

pub use health::HealthService;
pub use pb::*;
