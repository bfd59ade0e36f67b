//! MindLog API - clinic data service.
//!
//! Exposes users, user types, assignment statuses and therapist/patient
//! assignments stored in MySQL over a JSON HTTP API.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entity descriptors and write payloads
//! - **services**: Use cases behind every endpoint
//! - **infra**: Database connection, statement execution, accessors
//! - **api**: HTTP handlers, extractors, middleware, and routes
//! - **types**: The result envelope and error body
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! mindlog-api serve --port 5000
//!
//! # Check the database
//! mindlog-api ping
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use types::{Envelope, Outcome};
