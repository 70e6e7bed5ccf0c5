//! Transport to the remote catalog service.
//!
//! - [`ProductApi`]: the seam the store is written against.
//! - [`HttpProductClient`]: the REST/JSON implementation.
//! - [`mock`]: doubles for testing the store without a server.

pub mod envelope;
pub mod error;
pub mod http_client;
pub mod mock;
pub mod product_api;

pub use error::*;
pub use http_client::*;
pub use product_api::*;
