//! Read accessor.

use sea_orm::Statement;

use crate::infra::executor::SqlExecutor;
use crate::types::Envelope;

/// Run a SELECT and classify the row count.
///
/// Zero rows is a not-found envelope, any driver failure is wrapped with
/// its message. Nothing is retried.
pub async fn read<E>(executor: &E, statement: Statement) -> Envelope
where
    E: SqlExecutor + ?Sized,
{
    match executor.fetch_rows(statement).await {
        Ok(rows) => Envelope::recovered(rows),
        Err(e) => {
            tracing::warn!(error = %e, "read failed");
            Envelope::from_query_error(&e)
        }
    }
}
