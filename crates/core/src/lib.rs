//! # Clinicals Core
//!
//! Core persistence for the clinicals API.
//!
//! This crate contains pure data operations over the relational store:
//! - Startup configuration (`CoreConfig`)
//! - Connection pool and embedded migrations (`Database`)
//! - One repository per table, behind the generic [`Repository`] trait
//!
//! **No API concerns**: HTTP routing, status codes and OpenAPI documents belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod repositories;

// Wire types are shared with the API crates.
pub use api_shared::pb;

pub use config::CoreConfig;
pub use db::Database;
pub use error::{CoreError, CoreResult};
pub use repositories::clinical_data::ClinicalDataRepository;
pub use repositories::patient::PatientRepository;
pub use repositories::Repository;
