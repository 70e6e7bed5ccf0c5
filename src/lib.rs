//! # Product Catalog
//!
//! > **The state machine behind a product list/edit screen.**
//!
//! This crate reconciles a remote collection of products, served over REST/JSON,
//! with a local edit form. A front end renders [`StoreState`](store::StoreState)
//! and forwards user intents (typing, submit, edit, delete, refresh) to
//! [`ProductStore`](store::ProductStore); everything else lives here.
//!
//! ## 🏗️ Design
//!
//! ### The server is authoritative
//! There is no optimistic UI and no local cache. Every successful create, update
//! or delete is followed by a full re-fetch of the list, so what is displayed is
//! always what the server last said.
//!
//! ### Text in, numbers out
//! The form keeps raw text ([`FormDraft`](model::FormDraft)) so half-typed input
//! survives. [`validate`](validation::validate) is the only place text becomes a
//! [`ProductPayload`](model::ProductPayload), and it stops at the first problem.
//!
//! ### Errors become messages
//! Each layer has its own `thiserror` enum: [`ValidationError`](validation::ValidationError),
//! [`RequestError`](clients::RequestError), [`StoreError`](store::StoreError).
//! Store operations return them *and* record their text in the state, so nothing
//! is fatal and every failure can be retried by invoking the operation again.
//!
//! ### Concurrency
//! Operations are `async` and may overlap. The store never holds its lock across
//! a network call; the loading/submitting flags are indicators, not gates.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: `Product`, `ProductId`, `FormDraft`, `EditSession`.
//! - [`validation`]: form text to payload.
//! - [`clients`]: the [`ProductApi`](clients::ProductApi) seam, its HTTP
//!   implementation and the test doubles in [`clients::mock`].
//! - [`store`]: the state machine.
//! - [`runtime`]: configuration and tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # List the products of a local catalog service
//! PRODUCT_API_BASE_URL=http://localhost:8080 RUST_LOG=info cargo run
//! ```
//!
//! ```ignore
//! let api = HttpProductClient::new(&ClientConfig::from_env())?;
//! let store = ProductStore::new(api);
//! store.load().await?;
//!
//! store.set_field(DraftField::Name, "Pen").await;
//! store.set_field(DraftField::Price, "1.50").await;
//! store.set_field(DraftField::Stock, "10").await;
//! store.submit().await?;
//! ```

pub mod clients;
pub mod model;
pub mod runtime;
pub mod store;
pub mod validation;
