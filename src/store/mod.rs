//! # Product Store
//!
//! The single state machine behind the catalog screen. It owns the
//! authoritative product list and the form, and combines
//! [`validate`](crate::validation::validate) with a [`ProductApi`] to implement
//! the user's intents:
//!
//! | Operation | Network | On success | On failure |
//! |---|---|---|---|
//! | [`load`](ProductStore::load) | `list` | list replaced | error set, list kept |
//! | [`begin_edit`](ProductStore::begin_edit) | none | form filled, `Editing(id)` | error set |
//! | [`cancel`](ProductStore::cancel) | none | form emptied, `Creating` | - |
//! | [`submit`](ProductStore::submit) | `create`/`update`, `list` | form reset | form kept |
//! | [`delete`](ProductStore::delete) | `delete`, then `list` | list refreshed | error set |
//!
//! ## Concurrency
//!
//! The store is a cheap handle; clones share state. Operations may overlap and
//! nothing gates them: `is_loading`/`is_submitting` are indicators only. The
//! state lock is never held across a network call, so the last response to
//! settle is the one that sticks.
//!
//! ## Messages
//!
//! Every operation clears both messages when it starts and sets exactly one
//! when it settles. The refresh after a successful mutation keeps the
//! mutation's success message unless the refresh itself fails.

pub mod confirm;
pub mod error;
pub mod state;

pub use confirm::*;
pub use error::*;
pub use state::*;

use crate::clients::ProductApi;
use crate::model::{DraftField, EditSession, FormDraft, Product};
use crate::validation::validate;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

pub const CREATED_MESSAGE: &str = "product created";
pub const UPDATED_MESSAGE: &str = "product updated";
pub const DELETED_MESSAGE: &str = "product deleted";

/// Client-side state machine for managing products.
pub struct ProductStore<A> {
    api: Arc<A>,
    state: Arc<Mutex<StoreState>>,
}

impl<A> Clone for ProductStore<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
        }
    }
}

impl<A: ProductApi> ProductStore<A> {
    /// Creates a store with an empty list, an empty form and no messages.
    pub fn new(api: A) -> Self {
        Self::with_shared_api(Arc::new(api))
    }

    pub fn with_shared_api(api: Arc<A>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(StoreState::default())),
        }
    }

    /// Returns a copy of the current state for rendering.
    pub async fn snapshot(&self) -> StoreState {
        self.state.lock().await.clone()
    }

    /// Forwards a keystroke into the form. Touches nothing else.
    pub async fn set_field(&self, field: DraftField, value: impl Into<String>) {
        self.state.lock().await.draft.set(field, value);
    }

    /// Re-fetches the whole product list from the server.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<(), StoreError> {
        self.state.lock().await.clear_messages();
        self.refresh().await
    }

    /// Fills the form from `product` and targets it for update.
    #[instrument(skip(self, product), fields(id = ?product.id))]
    pub async fn begin_edit(&self, product: &Product) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state.clear_messages();

        let Some(id) = product.usable_id() else {
            let error = StoreError::MissingIdentifier { operation: "edit" };
            warn!(error = %error, "Edit refused");
            state.fail(&error);
            return Err(error);
        };

        state.draft = FormDraft::from_product(product);
        state.session = EditSession::Editing(id.clone());
        debug!(%id, "Editing");
        Ok(())
    }

    /// Drops the form contents and returns to creating.
    #[instrument(skip(self))]
    pub async fn cancel(&self) {
        let mut state = self.state.lock().await;
        state.clear_messages();
        state.reset_form();
        debug!("Edit cancelled");
    }

    /// Validates the form and creates or updates the product.
    ///
    /// On success the form is reset, the list is re-fetched and the saved
    /// product is returned. On failure the form is left as it was so the user
    /// can retry.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<Product, StoreError> {
        let (payload, target) = {
            let mut state = self.state.lock().await;
            state.clear_messages();

            let payload = match validate(&state.draft) {
                Ok(payload) => payload,
                Err(e) => {
                    let error = StoreError::from(e);
                    debug!(error = %error, "Validation failed");
                    state.fail(&error);
                    return Err(error);
                }
            };
            state.begin_submit();
            (payload, state.session.editing_id().cloned())
        };

        debug!(?payload, ?target, "Submitting");
        let result = match &target {
            Some(id) => self.api.update(id.clone(), payload).await,
            None => self.api.create(payload).await,
        };

        let saved = match result {
            Ok(saved) => saved,
            Err(e) => {
                let error = StoreError::from(e);
                warn!(error = %error, "Submit failed");
                let mut state = self.state.lock().await;
                state.fail(&error);
                state.end_submit();
                return Err(error);
            }
        };

        {
            let mut state = self.state.lock().await;
            state.succeed(if target.is_some() {
                UPDATED_MESSAGE
            } else {
                CREATED_MESSAGE
            });
            state.reset_form();
        }
        info!(id = ?saved.id, updated = target.is_some(), "Saved");

        // A failed refresh is recorded in state; the save itself succeeded.
        let _ = self.refresh().await;
        self.state.lock().await.end_submit();
        Ok(saved)
    }

    /// Deletes `product` on the server.
    ///
    /// Confirmation is the caller's job; see [`confirm_and_delete`](Self::confirm_and_delete).
    #[instrument(skip(self, product), fields(id = ?product.id))]
    pub async fn delete(&self, product: &Product) -> Result<(), StoreError> {
        let id = {
            let mut state = self.state.lock().await;
            state.clear_messages();
            match product.usable_id() {
                Some(id) => id.clone(),
                None => {
                    let error = StoreError::MissingIdentifier { operation: "delete" };
                    warn!(error = %error, "Delete refused");
                    state.fail(&error);
                    return Err(error);
                }
            }
        };

        if let Err(e) = self.api.delete(id.clone()).await {
            let error = StoreError::from(e);
            warn!(%id, error = %error, "Delete failed");
            self.state.lock().await.fail(&error);
            return Err(error);
        }

        {
            let mut state = self.state.lock().await;
            state.succeed(DELETED_MESSAGE);
            if state.session.editing_id() == Some(&id) {
                state.reset_form();
            }
        }
        info!(%id, "Deleted");

        let _ = self.refresh().await;
        Ok(())
    }

    /// Asks `confirm` first and deletes only if the user agreed.
    ///
    /// Returns `Ok(false)` without touching any state when declined.
    pub async fn confirm_and_delete(
        &self,
        product: &Product,
        confirm: &impl Confirm,
    ) -> Result<bool, StoreError> {
        let message = format!("Delete product \"{}\"?", product.name);
        if !confirm.confirm(&message) {
            debug!(id = ?product.id, "Delete declined");
            return Ok(false);
        }
        self.delete(product).await.map(|()| true)
    }

    /// Fetches the list and records the outcome without clearing a success message.
    async fn refresh(&self) -> Result<(), StoreError> {
        self.state.lock().await.begin_load();

        let result = self.api.list().await;

        let mut state = self.state.lock().await;
        state.end_load();
        match result {
            Ok(products) => {
                debug!(count = products.len(), "Loaded");
                state.products = products;
                state.error = None;
                Ok(())
            }
            Err(e) => {
                let error = StoreError::from(e);
                warn!(error = %error, "Load failed");
                state.fail(&error);
                Err(error)
            }
        }
    }
}
