//! hidlink-host library entry point.
//!
//! Exposes the report-assembly use case and the capture/serial/storage
//! infrastructure as a library so that the integration tests in `tests/`
//! and the binary in `main.rs` share one module tree.

pub mod application;
pub mod infrastructure;
