//! Data model and schema helpers for social-graph-mcp.
//!
//! This crate defines the node and relationship records loaded into the graph
//! store, the row shapes returned by the read queries, and the schema
//! statements that declare the four tables.

pub mod models;
pub mod schema;

pub use models::*;
