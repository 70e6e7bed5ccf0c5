//! The server-owned `Product` record and the payload sent when saving one.
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Server-assigned identifier for Products.
///
/// The remote service is free to hand out either integers or strings, so both
/// are accepted on the wire and echoed back verbatim in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl ProductId {
    /// Returns `false` for a blank text id, which the server never assigns.
    pub fn is_usable(&self) -> bool {
        match self {
            ProductId::Number(_) => true,
            ProductId::Text(text) => !text.trim().is_empty(),
        }
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId::Number(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Text(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId::Text(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductId::Number(id) => write!(f, "{}", id),
            ProductId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// A product as returned by the remote catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<ProductId>,
    pub name: String,
    pub price: f64,
    pub stock: u64,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the server
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `stock` - Units in stock
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64, stock: u64) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            price,
            stock,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The id, if the product carries one that can address it on the server.
    pub fn usable_id(&self) -> Option<&ProductId> {
        self.id.as_ref().filter(|id| id.is_usable())
    }
}

/// Body of create and update requests, produced by [`crate::validation::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
    pub stock: u64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_accepts_numbers_and_strings() {
        let numeric: Product =
            serde_json::from_str(r#"{"id": 7, "name": "Pen", "price": 1.5, "stock": 3}"#).unwrap();
        assert_eq!(numeric.id, Some(ProductId::Number(7)));
        assert_eq!(numeric.description, "");

        let text: Product = serde_json::from_str(
            r#"{"id": "sku-9", "name": "Ink", "price": 4, "stock": 0, "description": "blue"}"#,
        )
        .unwrap();
        assert_eq!(text.id, Some(ProductId::from("sku-9")));
        assert_eq!(text.id.unwrap().to_string(), "sku-9");
    }

    #[test]
    fn test_blank_id_is_not_usable() {
        let product = Product::new("  ", "Pen", 1.0, 1);
        assert!(product.usable_id().is_none());

        let missing: Product =
            serde_json::from_str(r#"{"name": "Pen", "price": 1, "stock": 1}"#).unwrap();
        assert!(missing.usable_id().is_none());

        assert!(Product::new(0, "Pen", 1.0, 1).usable_id().is_some());
    }
}
