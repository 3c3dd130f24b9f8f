//! Store interfaces and `SurrealDB` implementation.
//!
//! The store layer owns the schema declarations, seed loads, and the three
//! read queries. Every caller-supplied value is passed as a bound parameter.

pub mod surreal;

pub use surreal::{StoreError, StoreResult, SurrealGraphStore};
