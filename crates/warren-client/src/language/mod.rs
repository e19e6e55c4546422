//! A small fluent layer for building WarrenDB protocol messages.
//!
//! The builders in this module convert into the raw protocol messages via
//! `From`, so every [`crate::WarrenClient`] method that takes `impl Into<...>`
//! accepts them directly.

pub mod basics;
pub mod ddl;
pub mod dml;
pub mod dql;

pub use ddl::CreateEntity;
pub use dml::Insert;
pub use dql::Query;
