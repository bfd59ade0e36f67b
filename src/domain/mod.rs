//! Domain layer - Core business entities and logic
//!
//! Entity descriptors (what to query and how) and the write payloads
//! accepted from clients.

pub mod clinic;
pub mod entity;

pub use clinic::{NewUser, StatusChange};
pub use entity::{
    Entity, EntityDescriptor, MutationSpec, Record, ASSIGNMENTS_DELETE, ASSIGNMENT_STATUS_UPDATE,
    USERS_DELETE, USERS_INSERT,
};
