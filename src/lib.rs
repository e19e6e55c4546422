#![warn(missing_docs)] // Enforce documentation for all public items

//! `warren-examples` is a collection of example programs for the WarrenDB
//! vector database.
//!
//! It provides the building blocks for:
//! - Creating the example schema and entities (`cli::schema`)
//! - Importing feature vectors, transactionally or streamed (`cli::import`)
//! - Running select, filtered-select and kNN queries (`cli::query`)
//! - Loading the tab-separated sample files (`dataset`)
//! - Generating random query vectors (`vector`)
//!
//! ## Overview
//!
//! Each subcommand of the `warren-examples` binary exercises one part of the
//! WarrenDB gRPC interface through the `warren-client` crate: the DDL service
//! for schema management, the DML service for inserts, the DQL service for
//! queries and the TXN service for transaction control. The `run` subcommand
//! chains them all into one end-to-end walk through the database.
//!
//! ## Usage
//!
//! The programs assume a running WarrenDB instance; by default they connect
//! to `http://localhost:50051`. Point them elsewhere with `--address` or the
//! `WARREN_ADDRESS` environment variable.

// Public modules
pub mod cli;
pub mod constants;
pub mod dataset;
pub mod vector;

pub use dataset::{read_tsv, DatasetError, FeatureRecord};
pub use vector::random_float_vector;
