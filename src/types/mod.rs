//! Response types: the result envelope and the failure body.

mod envelope;
mod response;

pub use envelope::{Envelope, Outcome};
pub use response::ErrorResponse;
