//! # HTTP Client
//!
//! [`ProductApi`] over REST/JSON using `reqwest`.
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | list | GET | `/api/products` |
//! | get | GET | `/api/products/{id}` |
//! | create | POST | `/api/products` |
//! | update | PUT | `/api/products/{id}` |
//! | delete | DELETE | `/api/products/{id}` |
//!
//! Every request is sent with `Content-Type: application/json`. A `204 No Content`
//! response is never read as JSON; any other body that fails to parse is treated
//! as absent.
use crate::clients::envelope::{decode_list, decode_product, status_error};
use crate::clients::{ProductApi, RequestError};
use crate::model::{Product, ProductId, ProductPayload};
use crate::runtime::ClientConfig;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

const PRODUCTS_PATH: &str = "/api/products";

/// Stateless client for the catalog service. Cloning shares the connection pool.
#[derive(Clone, Debug)]
pub struct HttpProductClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpProductClient {
    pub fn new(config: &ClientConfig) -> Result<Self, RequestError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, PRODUCTS_PATH)
    }

    fn item_url(&self, id: &ProductId) -> String {
        format!("{}{}/{}", self.base_url, PRODUCTS_PATH, id)
    }

    /// Sends one request and returns the parsed body, if there was one.
    async fn send(
        &self,
        method: Method,
        url: String,
        body: Option<&ProductPayload>,
    ) -> Result<Option<Value>, RequestError> {
        debug!(%method, %url, "Sending request");
        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%method, %url, error = %e, "Request failed");
            RequestError::from(e)
        })?;

        let status = response.status();
        let payload = if status == StatusCode::NO_CONTENT {
            None
        } else {
            match response.bytes().await {
                Ok(bytes) => serde_json::from_slice::<Value>(&bytes).ok(),
                // An unreadable error body still gets the status fallback
                Err(_) if !status.is_success() => None,
                Err(e) => return Err(e.into()),
            }
        };

        if !status.is_success() {
            let error = status_error(status.as_u16(), payload.as_ref());
            warn!(%method, %url, status = status.as_u16(), error = %error, "Request rejected");
            return Err(error);
        }

        debug!(%method, %url, status = status.as_u16(), "Response received");
        Ok(payload)
    }
}

#[async_trait]
impl ProductApi for HttpProductClient {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Product>, RequestError> {
        let payload = self.send(Method::GET, self.collection_url(), None).await?;
        let products = decode_list(payload)?;
        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: ProductId) -> Result<Product, RequestError> {
        let payload = self.send(Method::GET, self.item_url(&id), None).await?;
        decode_product(payload)
    }

    #[instrument(skip(self, payload))]
    async fn create(&self, payload: ProductPayload) -> Result<Product, RequestError> {
        debug!(?payload, "create called");
        let body = self
            .send(Method::POST, self.collection_url(), Some(&payload))
            .await?;
        let product = decode_product(body)?;
        info!(id = ?product.id, "Created");
        Ok(product)
    }

    #[instrument(skip(self, payload))]
    async fn update(
        &self,
        id: ProductId,
        payload: ProductPayload,
    ) -> Result<Product, RequestError> {
        debug!(?payload, "update called");
        let body = self
            .send(Method::PUT, self.item_url(&id), Some(&payload))
            .await?;
        let product = decode_product(body)?;
        info!(%id, "Updated");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ProductId) -> Result<(), RequestError> {
        self.send(Method::DELETE, self.item_url(&id), None).await?;
        info!(%id, "Deleted");
        Ok(())
    }
}
