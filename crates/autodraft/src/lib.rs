// Library root: re-exports all modules so integration tests and the binary
// share the crate's public API.

pub mod app;
pub mod config;
pub mod projection;
pub mod stats;
