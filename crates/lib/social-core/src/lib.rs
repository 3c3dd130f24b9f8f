//! Core services for social-graph-mcp.
//!
//! This crate owns the `SurrealDB` graph store, the seed-file parser used to
//! bootstrap it, and the control plane that answers the read queries.

pub mod control;
pub mod parsers;
pub mod store;
