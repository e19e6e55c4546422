//! # warren-client
//!
//! Client library for interacting with a WarrenDB vector database. WarrenDB
//! exposes four gRPC services (DDL, DML, DQL and TXN); this crate bundles
//! typed stubs for all of them behind a single [`WarrenClient`] and provides
//! a small fluent layer for building requests.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use warren_client::WarrenClient;
//! use std::error::Error;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn Error>> {
//!     // Create a client with default configuration (localhost:50051)
//!     let mut client = WarrenClient::default().await?;
//!
//!     // Check connectivity
//!     client.ping().await?;
//!
//!     // List schemas
//!     let schemas = client.list_schemas().await?;
//!     println!("Available schemas:");
//!     for schema in schemas.schemas {
//!         println!("  - {}", schema.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod config;
pub mod client;
pub mod language;

pub use client::grpc::WarrenClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};

// Re-export messages from the proto crate for convenience
pub use warren_proto::warren::{
    literal, vector, ColumnDefinition, ColumnInfo, ComparisonOperator, Distance, Empty,
    EntityDefinition, EntityDetails, EntityList, EntityName, InsertElement, InsertMessage,
    InsertStatus, Knn, Literal, Metadata, Predicate, Projection, QueryMessage,
    QueryResponseMessage, SchemaList, SchemaName, SuccessStatus, TransactionId, Tuple,
    Type, Vector,
};
