//! CLI module - Command-line interface for the application.
//!
//! - `serve` - Start the HTTP server
//! - `ping` - Database connectivity check

pub mod args;

pub use args::{Cli, Commands, ServeArgs};
