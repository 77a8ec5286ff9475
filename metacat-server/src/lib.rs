//! HTTP transport for the metacat application metadata catalog.
//!
//! Exposes two operations over HTTP:
//!
//! - `POST /v1/metadata/` - upload a YAML metadata document; decoded,
//!   validated and stored keyed by its identity fields
//! - `GET /v1/metadata/search?<path>=<value>&...` - search stored documents
//!   by comma-joined field paths with AND composition
//!
//! The core semantics live in the `metacat` crate; this crate only wires
//! them to axum routes, maps error kinds to status codes, and reads the
//! listen address from the environment.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
