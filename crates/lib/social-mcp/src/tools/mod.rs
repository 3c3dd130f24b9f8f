//! MCP tool modules.
//!
//! Tools are grouped by domain: graph queries and contextual help.

pub mod graph;
mod context;
