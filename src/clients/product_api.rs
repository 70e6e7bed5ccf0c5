use crate::clients::RequestError;
use crate::model::{Product, ProductId, ProductPayload};
use async_trait::async_trait;

/// Operations the catalog service offers on its product collection.
///
/// [`ProductStore`](crate::store::ProductStore) is generic over this trait, so it
/// can run against the real [`HttpProductClient`](crate::clients::HttpProductClient)
/// or against the doubles in [`mock`](crate::clients::mock).
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Fetch the whole collection, whatever envelope the server wraps it in.
    async fn list(&self) -> Result<Vec<Product>, RequestError>;

    /// Fetch a single product by ID.
    async fn get(&self, id: ProductId) -> Result<Product, RequestError>;

    /// Create a product; the server assigns its ID.
    async fn create(&self, payload: ProductPayload) -> Result<Product, RequestError>;

    /// Replace the editable fields of an existing product.
    async fn update(&self, id: ProductId, payload: ProductPayload) -> Result<Product, RequestError>;

    /// Delete a product by ID.
    async fn delete(&self, id: ProductId) -> Result<(), RequestError>;
}
