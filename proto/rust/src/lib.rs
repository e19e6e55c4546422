//! This crate contains the generated Protocol Buffer code for the WarrenDB gRPC services.
//!
//! The code is generated from the `warren.proto` file with `tonic-build` and
//! committed under `src/generated/`, so building the workspace does not require
//! a protoc installation. Regenerate the file whenever `warren.proto` changes.

// Include the generated code
pub mod warren {
    include!("generated/warren.rs");
}

// Re-export the services
pub use warren::ddl_server;
pub use warren::ddl_client;
pub use warren::dml_server;
pub use warren::dml_client;
pub use warren::dql_server;
pub use warren::dql_client;
pub use warren::txn_server;
pub use warren::txn_client;
