//! REST API server for random motivational quotes
//!
//! Loads a fixed quote list from a JSON file at startup and serves it over
//! two endpoints: a welcome message on `/` and a uniformly random quote on
//! `/frase`. The list is immutable for the lifetime of the process.

pub mod config;
pub mod quotes;
pub mod routes;
pub mod server;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
