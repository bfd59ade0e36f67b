//! Mutation accessor - write, verify the effect, then read back.
//!
//! Each call walks `ISSUED → EXECUTED | EXECUTION_FAILED`,
//! `EXECUTED → ZERO_AFFECTED | EFFECTIVE`,
//! `EFFECTIVE → READBACK_OK | READBACK_FAILED`, and every terminal state
//! maps to exactly one envelope shape.
//!
//! The read-back runs on the same executor as the write. When that executor
//! is a transaction the caller gets exactly what was written; on a plain
//! connection a concurrent writer may slip in between the two steps.

use sea_orm::Statement;

use super::query_builder::{build_select, record_id};
use super::read::read;
use crate::config::{MSG_RECORD_DELETED, MSG_RECORD_RECOVERED};
use crate::domain::{MutationSpec, Record, ASSIGNMENT_STATUS_UPDATE, USERS_INSERT};
use crate::infra::executor::{ExecSummary, SqlExecutor};
use crate::types::{Envelope, Outcome};

/// Insert a user and return the row as the store computed it.
pub async fn create_user<E>(executor: &E, statement: Statement) -> Envelope
where
    E: SqlExecutor + ?Sized,
{
    insert_and_read_back(executor, statement, &USERS_INSERT).await
}

/// Change an assignment's status and return the updated row.
///
/// Zero affected rows is reported as "Assignment not found". Under an engine
/// that reports no-op updates as zero-affected, that includes setting the
/// status an assignment already has. The MySQL driver counts matched rows,
/// so there a same-value update is read back as usual.
pub async fn update_assignment_status<E>(executor: &E, statement: Statement, record: &Record) -> Envelope
where
    E: SqlExecutor + ?Sized,
{
    update_and_read_back(executor, statement, record, &ASSIGNMENT_STATUS_UPDATE).await
}

/// Delete the row targeted by `statement`.
pub async fn delete<E>(executor: &E, statement: Statement, spec: &MutationSpec) -> Envelope
where
    E: SqlExecutor + ?Sized,
{
    let summary = match execute(executor, statement, spec).await {
        Ok(summary) => summary,
        Err(envelope) => return envelope,
    };

    if summary.rows_affected == 0 {
        return Envelope::not_found(spec.not_found_message);
    }

    tracing::info!(table = spec.entity.descriptor().table, "record deleted");
    Envelope::mutated(Outcome::Deleted, None, MSG_RECORD_DELETED)
}

async fn insert_and_read_back<E>(executor: &E, statement: Statement, spec: &MutationSpec) -> Envelope
where
    E: SqlExecutor + ?Sized,
{
    let summary = match execute(executor, statement, spec).await {
        Ok(summary) => summary,
        Err(envelope) => return envelope,
    };

    let Ok(id) = i64::try_from(summary.last_insert_id) else {
        return Envelope::readback_failure("inserted", "generated id is out of range");
    };
    tracing::info!(table = spec.entity.descriptor().table, id, "record inserted");

    let readback = read(executor, build_select(spec.entity, Some(id), None)).await;
    settle(readback, Outcome::Created, "inserted")
}

async fn update_and_read_back<E>(
    executor: &E,
    statement: Statement,
    record: &Record,
    spec: &MutationSpec,
) -> Envelope
where
    E: SqlExecutor + ?Sized,
{
    let summary = match execute(executor, statement, spec).await {
        Ok(summary) => summary,
        Err(envelope) => return envelope,
    };

    if summary.rows_affected == 0 {
        return Envelope::not_found(spec.not_found_message);
    }

    let id = match record_id(record, spec.key) {
        Ok(id) => id,
        Err(e) => return Envelope::readback_failure("updated", &e.to_string()),
    };
    tracing::info!(table = spec.entity.descriptor().table, id, "record updated");

    let readback = read(executor, build_select(spec.entity, Some(id), None)).await;
    settle(readback, Outcome::Updated, "updated")
}

/// Run the write, folding a failure into its envelope.
async fn execute<E>(
    executor: &E,
    statement: Statement,
    spec: &MutationSpec,
) -> Result<ExecSummary, Envelope>
where
    E: SqlExecutor + ?Sized,
{
    executor.execute(statement).await.map_err(|e| {
        tracing::warn!(error = %e, table = spec.entity.descriptor().table, "write failed");
        Envelope::from_query_error_with(spec.failure_prefix, &e)
    })
}

fn settle(readback: Envelope, outcome: Outcome, action: &str) -> Envelope {
    if readback.is_success {
        Envelope::mutated(outcome, readback.result, MSG_RECORD_RECOVERED)
    } else {
        tracing::error!(message = %readback.message, "write applied but read-back failed");
        Envelope::readback_failure(action, &readback.message)
    }
}
