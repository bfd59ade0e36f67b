//! Infrastructure layer - External systems integration
//!
//! This module handles all storage concerns:
//! - Database connection lifecycle
//! - Statement execution with timeouts
//! - The generic accessor layer (query builder, read and mutation accessors)

pub mod accessors;
pub mod db;
pub mod executor;

pub use db::Database;
pub use executor::{ExecSummary, QueryError, SqlExecutor, SqlSession};

#[cfg(any(test, feature = "test-utils"))]
pub use executor::MockSqlExecutor;
