//! SQL executor - the seam between the accessors and the storage driver.
//!
//! Accessors only ever see [`SqlExecutor`]; the production implementation
//! is [`SqlSession`], which runs statements on any sea-orm connection
//! (pool or open transaction) under a per-statement timeout.

use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DbErr, FromQueryResult, JsonValue, Statement};
use thiserror::Error;
use tokio::time;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Failure to run a statement
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("{0}")]
    Driver(#[from] DbErr),

    #[error("Query timed out after {} ms", .0.as_millis())]
    Timeout(Duration),
}

/// Effect metadata of an INSERT/UPDATE/DELETE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecSummary {
    pub last_insert_id: u64,
    pub rows_affected: u64,
}

/// Statement execution, abstracted for injection and mocking.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Run a SELECT and return every row as a JSON object keyed by column.
    async fn fetch_rows(&self, statement: Statement) -> Result<Vec<JsonValue>, QueryError>;

    /// Run a write statement and report its effect.
    async fn execute(&self, statement: Statement) -> Result<ExecSummary, QueryError>;
}

/// Executor over a borrowed sea-orm connection.
pub struct SqlSession<'c, C> {
    conn: &'c C,
    timeout: Duration,
}

impl<'c, C> SqlSession<'c, C>
where
    C: ConnectionTrait,
{
    pub fn new(conn: &'c C, timeout: Duration) -> Self {
        Self { conn, timeout }
    }
}

#[async_trait]
impl<'c, C> SqlExecutor for SqlSession<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn fetch_rows(&self, statement: Statement) -> Result<Vec<JsonValue>, QueryError> {
        tracing::debug!(sql = %statement.sql, "fetching rows");

        let rows = time::timeout(
            self.timeout,
            JsonValue::find_by_statement(statement).all(self.conn),
        )
        .await
        .map_err(|_| QueryError::Timeout(self.timeout))??;

        tracing::debug!(rows = rows.len(), "rows fetched");
        Ok(rows)
    }

    async fn execute(&self, statement: Statement) -> Result<ExecSummary, QueryError> {
        tracing::debug!(sql = %statement.sql, "executing statement");

        let result = time::timeout(self.timeout, self.conn.execute(statement))
            .await
            .map_err(|_| QueryError::Timeout(self.timeout))??;

        let summary = ExecSummary {
            last_insert_id: result.last_insert_id(),
            rows_affected: result.rows_affected(),
        };
        tracing::debug!(?summary, "statement executed");
        Ok(summary)
    }
}
