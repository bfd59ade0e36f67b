//! Accessor layer - generic relational data access.
//!
//! One query builder and one pair of read/mutation accessors serve every
//! entity; the per-entity differences live in
//! [`EntityDescriptor`](crate::domain::EntityDescriptor) data.

mod mutation;
mod query_builder;
mod read;

pub use mutation::{create_user, delete, update_assignment_status};
pub use query_builder::{
    build_delete, build_insert, build_select, build_update, record_id, BuildError, BACKEND,
};
pub use read::read;
