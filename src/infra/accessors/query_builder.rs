//! Query builder - turns entity metadata into parameterized statements.
//!
//! Identifiers and record values are always bound as parameters; the SQL
//! text only ever contains descriptor constants.

use sea_orm::{DbBackend, Statement, Value};
use thiserror::Error;

use crate::domain::{Entity, MutationSpec, Record};

/// Dialect of the backing store
pub const BACKEND: DbBackend = DbBackend::MySql;

/// Statement could not be built from the given record
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("record is missing integer key `{0}`")]
    MissingKey(&'static str),
}

/// SELECT for `entity`, optionally filtered by `id`.
///
/// With a recognized `variant` the filter targets the variant's column
/// (e.g. assignments by therapist); otherwise the identifier column.
pub fn build_select(entity: Entity, id: Option<i64>, variant: Option<&str>) -> Statement {
    let descriptor = entity.descriptor();
    let sql = format!(
        "SELECT {} FROM {}",
        descriptor.projection.join(", "),
        descriptor.from
    );

    match id {
        None => Statement::from_string(BACKEND, sql),
        Some(id) => Statement::from_sql_and_values(
            BACKEND,
            format!("{} WHERE {} = ?", sql, descriptor.filter_column(variant)),
            [Value::from(id)],
        ),
    }
}

/// INSERT writing exactly the mutable columns of `spec`.
///
/// Columns missing from `record` are bound as NULL; extra record fields are
/// ignored.
pub fn build_insert(spec: &MutationSpec, record: &Record) -> Statement {
    let (set, values) = set_clause(spec, record);
    Statement::from_sql_and_values(
        BACKEND,
        format!("INSERT INTO {} {}", spec.entity.descriptor().table, set),
        values,
    )
}

/// UPDATE of the mutable columns of `spec` on the row named by `record[spec.key]`.
pub fn build_update(spec: &MutationSpec, record: &Record) -> Result<Statement, BuildError> {
    let id = record_id(record, spec.key)?;
    let (set, mut values) = set_clause(spec, record);
    values.push(Value::from(id));

    Ok(Statement::from_sql_and_values(
        BACKEND,
        format!(
            "UPDATE {} {} WHERE {} = ?",
            spec.entity.descriptor().table,
            set,
            spec.key
        ),
        values,
    ))
}

/// DELETE of the single row whose key equals `id`.
pub fn build_delete(spec: &MutationSpec, id: i64) -> Statement {
    Statement::from_sql_and_values(
        BACKEND,
        format!(
            "DELETE FROM {} WHERE {} = ?",
            spec.entity.descriptor().table,
            spec.key
        ),
        [Value::from(id)],
    )
}

/// Integer value stored under `key`.
pub fn record_id(record: &Record, key: &'static str) -> Result<i64, BuildError> {
    let id = match record.get(key) {
        Some(Value::BigInt(Some(n))) => Some(*n),
        Some(Value::Int(Some(n))) => Some(i64::from(*n)),
        Some(Value::Unsigned(Some(n))) => Some(i64::from(*n)),
        Some(Value::BigUnsigned(Some(n))) => i64::try_from(*n).ok(),
        _ => None,
    };
    id.ok_or(BuildError::MissingKey(key))
}

/// `SET col = ?, …` plus the values in column order.
fn set_clause(spec: &MutationSpec, record: &Record) -> (String, Vec<Value>) {
    let assignments = spec
        .mutable_columns
        .iter()
        .map(|column| format!("{} = ?", column))
        .collect::<Vec<_>>()
        .join(", ");

    let values = spec
        .mutable_columns
        .iter()
        .map(|column| {
            record
                .get(*column)
                .cloned()
                .unwrap_or(Value::String(None))
        })
        .collect();

    (format!("SET {}", assignments), values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ASSIGNMENTS_DELETE, ASSIGNMENT_STATUS_UPDATE, USERS_INSERT};

    fn bound(statement: &Statement) -> Vec<Value> {
        statement
            .values
            .as_ref()
            .map(|v| v.0.clone())
            .unwrap_or_default()
    }

    #[test]
    fn test_select_all_has_no_filter() {
        let stmt = build_select(Entity::Status, None, None);
        assert_eq!(stmt.sql, "SELECT statusID, statusName FROM Status");
        assert!(stmt.values.is_none());
    }

    #[test]
    fn test_select_by_id_binds_identifier() {
        let stmt = build_select(Entity::UserTypes, Some(3), None);
        assert_eq!(
            stmt.sql,
            "SELECT userTypeID, userTypeName FROM UserTypes WHERE userTypeID = ?"
        );
        assert_eq!(bound(&stmt), vec![Value::from(3i64)]);
    }

    #[test]
    fn test_therapist_variant_filters_on_therapist_column() {
        let stmt = build_select(Entity::Assignments, Some(7), Some("therapist"));
        assert!(stmt
            .sql
            .ends_with(" WHERE Assignments.assignmentTherapistID = ?"));
        assert_eq!(bound(&stmt), vec![Value::from(7i64)]);
    }

    #[test]
    fn test_no_variant_filters_on_assignment_id() {
        let stmt = build_select(Entity::Assignments, Some(7), None);
        assert!(stmt.sql.ends_with(" WHERE Assignments.assignmentID = ?"));
        assert_eq!(bound(&stmt), vec![Value::from(7i64)]);
    }

    #[test]
    fn test_unknown_variant_is_treated_as_default() {
        let stmt = build_select(Entity::Assignments, Some(7), Some("nurse"));
        assert!(stmt.sql.ends_with(" WHERE Assignments.assignmentID = ?"));
    }

    #[test]
    fn test_variant_without_id_selects_everything() {
        let stmt = build_select(Entity::Assignments, None, Some("patient"));
        assert!(!stmt.sql.contains("WHERE"));
    }

    #[test]
    fn test_identifier_never_appears_in_sql_text() {
        let stmt = build_select(Entity::Users, Some(987_654_321), None);
        assert!(!stmt.sql.contains("987654321"));
    }

    #[test]
    fn test_assignment_select_keeps_joins_for_every_variant() {
        for variant in [None, Some("therapist"), Some("patient"), Some("status")] {
            let stmt = build_select(Entity::Assignments, Some(1), variant);
            assert!(stmt.sql.contains("LEFT JOIN Users AS Therapist"));
            assert!(stmt.sql.contains("LEFT JOIN Users AS Patient"));
            assert!(stmt.sql.contains("AS therapistName"));
        }
    }

    #[test]
    fn test_insert_writes_only_mutable_columns() {
        let mut record = Record::new();
        record.insert("userFirstName".to_string(), "Ann".into());
        record.insert("userID".to_string(), 99i64.into());
        record.insert("isAdmin".to_string(), true.into());

        let stmt = build_insert(&USERS_INSERT, &record);

        assert_eq!(
            stmt.sql,
            "INSERT INTO Users SET userFirstName = ?, userLastName = ?, userPhone = ?, \
             userEmail = ?, userAddressLineOne = ?, userAddressLineTwo = ?, \
             userPostcode = ?, userUserTypeID = ?"
        );
        let values = bound(&stmt);
        assert_eq!(values.len(), USERS_INSERT.mutable_columns.len());
        assert_eq!(values[0], Value::from("Ann"));
        assert_eq!(values[1], Value::String(None));
        assert!(!values.contains(&Value::from(99i64)));
    }

    #[test]
    fn test_update_binds_status_then_key() {
        let mut record = Record::new();
        record.insert("assignmentID".to_string(), 5i64.into());
        record.insert("assignmentStatusID".to_string(), 3i64.into());
        record.insert("assignmentTherapistID".to_string(), 1i64.into());

        let stmt = build_update(&ASSIGNMENT_STATUS_UPDATE, &record).unwrap();

        assert_eq!(
            stmt.sql,
            "UPDATE Assignments SET assignmentStatusID = ? WHERE assignmentID = ?"
        );
        assert_eq!(bound(&stmt), vec![Value::from(3i64), Value::from(5i64)]);
    }

    #[test]
    fn test_update_requires_key() {
        let mut record = Record::new();
        record.insert("assignmentStatusID".to_string(), 3i64.into());

        assert_eq!(
            build_update(&ASSIGNMENT_STATUS_UPDATE, &record).unwrap_err(),
            BuildError::MissingKey("assignmentID")
        );
    }

    #[test]
    fn test_delete_targets_base_table() {
        let stmt = build_delete(&ASSIGNMENTS_DELETE, 12);
        assert_eq!(stmt.sql, "DELETE FROM Assignments WHERE assignmentID = ?");
        assert_eq!(bound(&stmt), vec![Value::from(12i64)]);
    }

    #[test]
    fn test_record_id_accepts_integer_widths() {
        let mut record = Record::new();
        record.insert("userID".to_string(), Value::Unsigned(Some(4)));
        assert_eq!(record_id(&record, "userID"), Ok(4));

        record.insert("userID".to_string(), Value::from("4"));
        assert!(record_id(&record, "userID").is_err());
    }
}
