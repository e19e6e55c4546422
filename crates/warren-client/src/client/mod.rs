//! Client module for the WarrenDB services.
//!
//! This module provides client functionality for connecting to a WarrenDB server.

pub mod grpc;
