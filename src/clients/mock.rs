//! # Mock Transport
//!
//! Utilities for testing the store without a catalog server.
//!
//! Two styles are available:
//!
//! - [`create_mock_api`] returns a [`ChannelProductApi`] plus the receiver its
//!   requests arrive on. Helpers like [`expect_list`] hand the test the request
//!   and its responder, so the test decides *when* each call completes. Use this
//!   to interleave overlapping operations.
//! - [`MockProductApi`] answers from a queue of expectations set up front with
//!   `expect_*().return_ok(..)` / `return_err(..)`, records every call, and
//!   checks everything was consumed in [`MockProductApi::verify`].

use crate::clients::{ProductApi, RequestError};
use crate::model::{Product, ProductId, ProductPayload};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// Type alias for the one-shot response channel of a mocked call.
pub type Responder<T> = oneshot::Sender<Result<T, RequestError>>;

/// A transport call captured by [`ChannelProductApi`].
#[derive(Debug)]
pub enum ApiRequest {
    List {
        respond_to: Responder<Vec<Product>>,
    },
    Get {
        id: ProductId,
        respond_to: Responder<Product>,
    },
    Create {
        payload: ProductPayload,
        respond_to: Responder<Product>,
    },
    Update {
        id: ProductId,
        payload: ProductPayload,
        respond_to: Responder<Product>,
    },
    Delete {
        id: ProductId,
        respond_to: Responder<()>,
    },
}

/// A call as recorded by [`MockProductApi`], without its responder.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Get(ProductId),
    Create(ProductPayload),
    Update(ProductId, ProductPayload),
    Delete(ProductId),
}

impl From<&ApiRequest> for ApiCall {
    fn from(request: &ApiRequest) -> Self {
        match request {
            ApiRequest::List { .. } => ApiCall::List,
            ApiRequest::Get { id, .. } => ApiCall::Get(id.clone()),
            ApiRequest::Create { payload, .. } => ApiCall::Create(payload.clone()),
            ApiRequest::Update { id, payload, .. } => ApiCall::Update(id.clone(), payload.clone()),
            ApiRequest::Delete { id, .. } => ApiCall::Delete(id.clone()),
        }
    }
}

// =============================================================================
// CHANNEL-BACKED API
// =============================================================================

/// A [`ProductApi`] that forwards every call to a channel the test controls.
#[derive(Clone)]
pub struct ChannelProductApi {
    sender: mpsc::Sender<ApiRequest>,
}

impl ChannelProductApi {
    async fn call<T>(
        &self,
        build: impl FnOnce(Responder<T>) -> ApiRequest,
    ) -> Result<T, RequestError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| RequestError::Network("mock transport closed".to_string()))?;
        response
            .await
            .map_err(|_| RequestError::Network("mock transport dropped the response".to_string()))?
    }
}

#[async_trait]
impl ProductApi for ChannelProductApi {
    async fn list(&self) -> Result<Vec<Product>, RequestError> {
        self.call(|respond_to| ApiRequest::List { respond_to }).await
    }

    async fn get(&self, id: ProductId) -> Result<Product, RequestError> {
        self.call(|respond_to| ApiRequest::Get { id, respond_to }).await
    }

    async fn create(&self, payload: ProductPayload) -> Result<Product, RequestError> {
        self.call(|respond_to| ApiRequest::Create { payload, respond_to })
            .await
    }

    async fn update(
        &self,
        id: ProductId,
        payload: ProductPayload,
    ) -> Result<Product, RequestError> {
        self.call(|respond_to| ApiRequest::Update {
            id,
            payload,
            respond_to,
        })
        .await
    }

    async fn delete(&self, id: ProductId) -> Result<(), RequestError> {
        self.call(|respond_to| ApiRequest::Delete { id, respond_to })
            .await
    }
}

/// Creates a channel-backed API and the receiver its requests arrive on.
pub fn create_mock_api(buffer_size: usize) -> (ChannelProductApi, mpsc::Receiver<ApiRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ChannelProductApi { sender }, receiver)
}

/// Helper to verify that the next request is a List request
pub async fn expect_list(
    receiver: &mut mpsc::Receiver<ApiRequest>,
) -> Option<Responder<Vec<Product>>> {
    match receiver.recv().await {
        Some(ApiRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next request is a Create request
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<ApiRequest>,
) -> Option<(ProductPayload, Responder<Product>)> {
    match receiver.recv().await {
        Some(ApiRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is an Update request
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<ApiRequest>,
) -> Option<(ProductId, ProductPayload, Responder<Product>)> {
    match receiver.recv().await {
        Some(ApiRequest::Update {
            id,
            payload,
            respond_to,
        }) => Some((id, payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is a Delete request
pub async fn expect_delete(
    receiver: &mut mpsc::Receiver<ApiRequest>,
) -> Option<(ProductId, Responder<()>)> {
    match receiver.recv().await {
        Some(ApiRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A queued answer for the next call of a given kind.
enum Expectation {
    List(Result<Vec<Product>, RequestError>),
    Get(Result<Product, RequestError>),
    Create(Result<Product, RequestError>),
    Update(Result<Product, RequestError>),
    Delete(Result<(), RequestError>),
}

#[derive(Default)]
struct MockLedger {
    expectations: VecDeque<Expectation>,
    calls: Vec<ApiCall>,
    mismatches: Vec<ApiCall>,
}

/// A mock API with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A call that does not match the next
/// expectation is answered with an error and reported by [`verify`](Self::verify).
///
/// # Example
/// ```ignore
/// let mut mock = MockProductApi::new();
/// mock.expect_create().return_ok(Product::new(1, "Pen", 1.5, 10));
/// mock.expect_list().return_ok(vec![Product::new(1, "Pen", 1.5, 10)]);
///
/// let store = ProductStore::new(mock.api());
/// // Use the store in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockProductApi {
    api: ChannelProductApi,
    ledger: Arc<Mutex<MockLedger>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockProductApi {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (api, mut receiver) = create_mock_api(100);
        let ledger = Arc::new(Mutex::new(MockLedger::default()));
        let ledger_clone = ledger.clone();

        // Spawn background task to answer requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let call = ApiCall::from(&request);
                let mut ledger = ledger_clone.lock().unwrap();
                ledger.calls.push(call.clone());
                let expectation = ledger.expectations.pop_front();

                match (request, expectation) {
                    (ApiRequest::List { respond_to }, Some(Expectation::List(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ApiRequest::Get { respond_to, .. }, Some(Expectation::Get(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ApiRequest::Create { respond_to, .. },
                        Some(Expectation::Create(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ApiRequest::Update { respond_to, .. },
                        Some(Expectation::Update(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ApiRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (_, expectation) => {
                        // Put an unmatched expectation back so verify() sees it
                        if let Some(expectation) = expectation {
                            ledger.expectations.push_front(expectation);
                        }
                        ledger.mismatches.push(call);
                        // Dropping the request drops its responder and the caller gets an error
                    }
                }
            }
        });

        Self {
            api,
            ledger,
            _handle: handle,
        }
    }

    /// Returns the API for use in tests.
    pub fn api(&self) -> ChannelProductApi {
        self.api.clone()
    }

    /// Expects a `list` call.
    pub fn expect_list(&mut self) -> ExpectationBuilder<Vec<Product>> {
        ExpectationBuilder::new(self.ledger.clone(), Expectation::List)
    }

    /// Expects a `get` call.
    pub fn expect_get(&mut self) -> ExpectationBuilder<Product> {
        ExpectationBuilder::new(self.ledger.clone(), Expectation::Get)
    }

    /// Expects a `create` call.
    pub fn expect_create(&mut self) -> ExpectationBuilder<Product> {
        ExpectationBuilder::new(self.ledger.clone(), Expectation::Create)
    }

    /// Expects an `update` call.
    pub fn expect_update(&mut self) -> ExpectationBuilder<Product> {
        ExpectationBuilder::new(self.ledger.clone(), Expectation::Update)
    }

    /// Expects a `delete` call.
    pub fn expect_delete(&mut self) -> ExpectationBuilder<()> {
        ExpectationBuilder::new(self.ledger.clone(), Expectation::Delete)
    }

    /// Every call received so far, in arrival order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.ledger.lock().unwrap().calls.clone()
    }

    /// Verifies that all expectations were met and no unexpected call arrived.
    pub fn verify(&self) {
        let ledger = self.ledger.lock().unwrap();
        if !ledger.mismatches.is_empty() {
            panic!("Unexpected calls: {:?}", ledger.mismatches);
        }
        if !ledger.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                ledger.expectations.len()
            );
        }
    }
}

impl Default for MockProductApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder<T> {
    ledger: Arc<Mutex<MockLedger>>,
    wrap: fn(Result<T, RequestError>) -> Expectation,
}

impl<T> ExpectationBuilder<T> {
    fn new(
        ledger: Arc<Mutex<MockLedger>>,
        wrap: fn(Result<T, RequestError>) -> Expectation,
    ) -> Self {
        Self { ledger, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RequestError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, RequestError>) {
        let mut ledger = self.ledger.lock().unwrap();
        ledger.expectations.push_back((self.wrap)(response));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_api_hands_requests_to_the_test() {
        let (api, mut receiver) = create_mock_api(10);

        let create_task = tokio::spawn(async move {
            let payload = ProductPayload {
                name: "Pen".to_string(),
                price: 1.5,
                stock: 10,
                description: String::new(),
            };
            api.create(payload).await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Pen");
        responder.send(Ok(Product::new(1, "Pen", 1.5, 10))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created.id, Some(ProductId::Number(1)));
    }

    #[tokio::test]
    async fn test_mock_api_with_expectations() {
        let mut mock = MockProductApi::new();
        mock.expect_list().return_ok(vec![Product::new(1, "Pen", 1.5, 10)]);
        mock.expect_delete()
            .return_err(RequestError::Network("connection refused".to_string()));

        let api = mock.api();
        assert_eq!(api.list().await.unwrap().len(), 1);
        assert!(api.delete(ProductId::Number(1)).await.is_err());

        assert_eq!(mock.calls(), vec![ApiCall::List, ApiCall::Delete(ProductId::Number(1))]);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected calls")]
    async fn test_mock_api_reports_unexpected_calls() {
        let mut mock = MockProductApi::new();
        mock.expect_list().return_ok(Vec::new());

        let result = mock.api().delete(ProductId::Number(1)).await;
        assert!(result.is_err());
        mock.verify();
    }
}
