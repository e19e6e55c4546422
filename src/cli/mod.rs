//! This module defines the command-line interface structure and handlers.

pub mod commands;
pub mod formatters;

// Module declarations for command handlers
pub mod import;
pub mod query;
pub mod run;
pub mod schema;

// Re-export the main handler and the command enum
pub use commands::{handle_command, Commands};

// Re-export the Args structs for use in the main binary
pub use commands::CliArgs;
pub use import::ImportArgs;
pub use query::QueryArgs;
pub use run::RunArgs;
pub use schema::SchemaArgs;
