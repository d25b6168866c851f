//! HTTP surface over the path engines.
//!
//! Matrices are stored as sessions, engines run against a session, and the
//! longest path response carries a [`WebGraph`](models::WebGraph) with the
//! winning path marked for highlighting.

pub mod api;
pub mod models;
pub mod server;
