//! Entity descriptors - static query metadata for each logical entity.
//!
//! One table drives every read and write; adding an entity means adding a
//! descriptor here, not another hand-written controller.

use std::collections::BTreeMap;

use sea_orm::Value;

use crate::config::{
    MSG_ASSIGNMENT_DELETE_FAILED, MSG_ASSIGNMENT_NOT_FOUND, MSG_QUERY_FAILED,
    MSG_USER_DELETE_FAILED, MSG_USER_NOT_FOUND,
};

/// Column name → value to bind. Keys are store column names.
pub type Record = BTreeMap<String, Value>;

/// Logical entities exposed by the accessor layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Users,
    UserTypes,
    Status,
    Assignments,
}

impl Entity {
    /// Static query metadata for this entity.
    pub fn descriptor(self) -> &'static EntityDescriptor {
        match self {
            Entity::Users => &USERS,
            Entity::UserTypes => &USER_TYPES,
            Entity::Status => &STATUS,
            Entity::Assignments => &ASSIGNMENTS,
        }
    }
}

/// How to query one entity.
#[derive(Debug)]
pub struct EntityDescriptor {
    /// Base table, the target of writes
    pub table: &'static str,
    /// FROM-clause expression (the table, or the table plus its joins)
    pub from: &'static str,
    /// Ordered SELECT list, aliases included
    pub projection: &'static [&'static str],
    /// Column matched for single-record lookup
    pub id_column: &'static str,
    /// Variant name → alternate filter column
    pub variants: &'static [(&'static str, &'static str)],
}

impl EntityDescriptor {
    /// Filter column for `variant`, if the entity knows it.
    pub fn variant_column(&self, variant: &str) -> Option<&'static str> {
        self.variants
            .iter()
            .find(|(name, _)| *name == variant)
            .map(|(_, column)| *column)
    }

    /// Column used to filter by `id`: the variant's column when recognized,
    /// the identifier column otherwise.
    pub fn filter_column(&self, variant: Option<&str>) -> &'static str {
        variant
            .and_then(|v| self.variant_column(v))
            .unwrap_or(self.id_column)
    }
}

pub static USERS: EntityDescriptor = EntityDescriptor {
    table: "Users",
    from: "(Users LEFT JOIN UserTypes ON Users.userUserTypeID = UserTypes.userTypeID)",
    projection: &[
        "Users.userID",
        "Users.userFirstName",
        "Users.userLastName",
        "Users.userPhone",
        "Users.userEmail",
        "Users.userAddressLineOne",
        "Users.userAddressLineTwo",
        "Users.userPostcode",
        "Users.userUserTypeID",
        "UserTypes.userTypeName AS userTypeName",
    ],
    id_column: "Users.userID",
    variants: &[],
};

pub static USER_TYPES: EntityDescriptor = EntityDescriptor {
    table: "UserTypes",
    from: "UserTypes",
    projection: &["userTypeID", "userTypeName"],
    id_column: "userTypeID",
    variants: &[],
};

pub static STATUS: EntityDescriptor = EntityDescriptor {
    table: "Status",
    from: "Status",
    projection: &["statusID", "statusName"],
    id_column: "statusID",
    variants: &[],
};

pub static ASSIGNMENTS: EntityDescriptor = EntityDescriptor {
    table: "Assignments",
    from: "(Assignments \
           LEFT JOIN Users AS Therapist ON Assignments.assignmentTherapistID = Therapist.userID \
           LEFT JOIN Users AS Patient ON Assignments.assignmentPatientID = Patient.userID \
           LEFT JOIN Status ON Assignments.assignmentStatusID = Status.statusID)",
    projection: &[
        "Assignments.assignmentID",
        "Assignments.assignmentTherapistID",
        "CONCAT(Therapist.userFirstName, ' ', Therapist.userLastName) AS therapistName",
        "Assignments.assignmentPatientID",
        "CONCAT(Patient.userFirstName, ' ', Patient.userLastName) AS patientName",
        "Assignments.assignmentStatusID",
        "Status.statusName AS statusName",
        "Assignments.assignmentAssignedAt",
    ],
    id_column: "Assignments.assignmentID",
    variants: &[
        ("therapist", "Assignments.assignmentTherapistID"),
        ("patient", "Assignments.assignmentPatientID"),
        ("status", "Assignments.assignmentStatusID"),
    ],
};

/// Writable column set for one INSERT or UPDATE shape.
#[derive(Debug)]
pub struct MutationSpec {
    pub entity: Entity,
    /// Only these columns are ever written
    pub mutable_columns: &'static [&'static str],
    /// Record key holding the row identifier (WHERE clause of updates,
    /// read-back filter)
    pub key: &'static str,
    /// Message for a targeted write that hit no row
    pub not_found_message: &'static str,
    /// Prefix put before the driver message when the write fails
    pub failure_prefix: &'static str,
}

/// New user row
pub static USERS_INSERT: MutationSpec = MutationSpec {
    entity: Entity::Users,
    mutable_columns: &[
        "userFirstName",
        "userLastName",
        "userPhone",
        "userEmail",
        "userAddressLineOne",
        "userAddressLineTwo",
        "userPostcode",
        "userUserTypeID",
    ],
    key: "userID",
    not_found_message: MSG_USER_NOT_FOUND,
    failure_prefix: MSG_QUERY_FAILED,
};

/// Assignment lifecycle change
pub static ASSIGNMENT_STATUS_UPDATE: MutationSpec = MutationSpec {
    entity: Entity::Assignments,
    mutable_columns: &["assignmentStatusID"],
    key: "assignmentID",
    not_found_message: MSG_ASSIGNMENT_NOT_FOUND,
    failure_prefix: MSG_QUERY_FAILED,
};

/// Hard delete of one user
pub static USERS_DELETE: MutationSpec = MutationSpec {
    entity: Entity::Users,
    mutable_columns: &[],
    key: "userID",
    not_found_message: MSG_USER_NOT_FOUND,
    failure_prefix: MSG_USER_DELETE_FAILED,
};

/// Hard delete of one assignment
pub static ASSIGNMENTS_DELETE: MutationSpec = MutationSpec {
    entity: Entity::Assignments,
    mutable_columns: &[],
    key: "assignmentID",
    not_found_message: MSG_ASSIGNMENT_NOT_FOUND,
    failure_prefix: MSG_ASSIGNMENT_DELETE_FAILED,
};
