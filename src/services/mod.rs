//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate validation, query building and the accessors.
//! Handlers depend on the [`ClinicService`] trait, not the implementation.

mod clinic_service;

pub use clinic_service::{ClinicManager, ClinicService};
