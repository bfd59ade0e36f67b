//! Clinic service - the use cases behind every endpoint.
//!
//! Validates payloads, builds statements from the entity descriptors and
//! hands them to the accessors. Writes and their read-back share one
//! transaction.

use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::domain::{
    Entity, MutationSpec, NewUser, StatusChange, ASSIGNMENTS_DELETE, ASSIGNMENT_STATUS_UPDATE,
    USERS_DELETE, USERS_INSERT,
};
use crate::errors::AppResult;
use crate::infra::accessors::{self, build_delete, build_insert, build_select, build_update};
use crate::infra::{db, QueryError, SqlSession};
use crate::types::Envelope;

/// Clinic service trait for dependency injection.
///
/// Every method answers with an [`Envelope`]; storage failures never
/// escape as errors.
#[async_trait]
pub trait ClinicService: Send + Sync {
    /// Read `entity`, optionally narrowed to `id` (matched on the variant's
    /// column when `variant` is recognized).
    async fn fetch(&self, entity: Entity, id: Option<i64>, variant: Option<&str>) -> Envelope;

    /// Validate and insert a user, returning the stored row.
    async fn create_user(&self, user: NewUser) -> Envelope;

    /// Validate and apply a status change, returning the updated row.
    async fn update_assignment_status(&self, assignment_id: i64, change: StatusChange) -> Envelope;

    /// Hard delete one row of `entity` (users and assignments only).
    async fn delete(&self, entity: Entity, id: i64) -> Envelope;

    /// Database connectivity check
    async fn ping(&self) -> AppResult<()>;
}

/// Concrete implementation of ClinicService over a sea-orm connection.
pub struct ClinicManager {
    db: DatabaseConnection,
    query_timeout: Duration,
}

impl ClinicManager {
    /// Create new service instance
    pub fn new(db: DatabaseConnection, query_timeout: Duration) -> Self {
        Self { db, query_timeout }
    }

    async fn begin(&self) -> Result<DatabaseTransaction, Envelope> {
        self.db.begin().await.map_err(|e| {
            tracing::warn!(error = %e, "could not open transaction");
            Envelope::from_query_error(&QueryError::from(e))
        })
    }

    /// Commit writes that reached the store, roll back everything else.
    async fn finish(&self, txn: DatabaseTransaction, envelope: Envelope) -> Envelope {
        if envelope.outcome.write_applied() {
            if let Err(e) = txn.commit().await {
                tracing::error!(error = %e, "commit failed");
                return Envelope::from_query_error(&QueryError::from(e));
            }
        } else if let Err(e) = txn.rollback().await {
            tracing::error!("Transaction rollback failed: {}", e);
        }
        envelope
    }
}

#[async_trait]
impl ClinicService for ClinicManager {
    async fn fetch(&self, entity: Entity, id: Option<i64>, variant: Option<&str>) -> Envelope {
        let session = SqlSession::new(&self.db, self.query_timeout);
        accessors::read(&session, build_select(entity, id, variant)).await
    }

    async fn create_user(&self, user: NewUser) -> Envelope {
        if let Err(errors) = user.check() {
            tracing::debug!(?errors, "user rejected");
            return Envelope::validation_failure(errors);
        }

        let statement = build_insert(&USERS_INSERT, &user.into_record());

        let txn = match self.begin().await {
            Ok(txn) => txn,
            Err(envelope) => return envelope,
        };
        let envelope = accessors::create_user(&SqlSession::new(&txn, self.query_timeout), statement).await;
        self.finish(txn, envelope).await
    }

    async fn update_assignment_status(&self, assignment_id: i64, change: StatusChange) -> Envelope {
        if let Err(errors) = change.check() {
            tracing::debug!(?errors, "status change rejected");
            return Envelope::validation_failure(errors);
        }

        let record = change.into_record(assignment_id);
        let statement = match build_update(&ASSIGNMENT_STATUS_UPDATE, &record) {
            Ok(statement) => statement,
            Err(e) => return Envelope::validation_failure(vec![e.to_string()]),
        };

        let txn = match self.begin().await {
            Ok(txn) => txn,
            Err(envelope) => return envelope,
        };
        let envelope = accessors::update_assignment_status(
            &SqlSession::new(&txn, self.query_timeout),
            statement,
            &record,
        )
        .await;
        self.finish(txn, envelope).await
    }

    async fn delete(&self, entity: Entity, id: i64) -> Envelope {
        let spec: &MutationSpec = match entity {
            Entity::Users => &USERS_DELETE,
            Entity::Assignments => &ASSIGNMENTS_DELETE,
            Entity::UserTypes | Entity::Status => {
                return Envelope::validation_failure(vec![format!(
                    "{} records cannot be deleted",
                    entity.descriptor().table
                )]);
            }
        };

        let session = SqlSession::new(&self.db, self.query_timeout);
        accessors::delete(&session, build_delete(spec, id), spec).await
    }

    async fn ping(&self) -> AppResult<()> {
        db::ping(&self.db).await?;
        Ok(())
    }
}
