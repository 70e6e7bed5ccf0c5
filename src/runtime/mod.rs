//! Runtime environment for the catalog client.
//!
//! - [`ClientConfig`] - Where the catalog service lives, read from the environment
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod tracing;

pub use config::*;
pub use tracing::*;
