//! Decoding of loosely-shaped response bodies.
//!
//! The list endpoint has been seen returning a bare array, `{"data": [...]}`
//! and `{"items": [...]}`. Error bodies carry their text under `message` or
//! `error`. Both quirks are resolved here so nothing above the transport has
//! to look at raw JSON.

use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;

use super::error::RequestError;
use crate::model::Product;

/// The accepted shapes of a list response. Variant order is match priority.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListEnvelope {
    Bare(Vec<Value>),
    Data { data: Vec<Value> },
    Items { items: Vec<Value> },
    Unrecognized(IgnoredAny),
}

/// Normalizes a list body into products.
///
/// An unrecognized shape (including a missing or unparsable body) yields an
/// empty list. Elements that are not valid products are a decode error.
pub fn decode_list(payload: Option<Value>) -> Result<Vec<Product>, RequestError> {
    let Some(payload) = payload else {
        return Ok(Vec::new());
    };

    let items = match ListEnvelope::deserialize(payload)? {
        ListEnvelope::Bare(items)
        | ListEnvelope::Data { data: items }
        | ListEnvelope::Items { items } => items,
        ListEnvelope::Unrecognized(_) => return Ok(Vec::new()),
    };

    Ok(serde_json::from_value(Value::Array(items))?)
}

/// Decodes a single product body, as returned by get/create/update.
pub fn decode_product(payload: Option<Value>) -> Result<Product, RequestError> {
    let payload = payload.ok_or_else(|| RequestError::Decode("empty response body".to_string()))?;
    Ok(serde_json::from_value(payload)?)
}

/// Builds the error for a non-2xx response.
pub fn status_error(status: u16, payload: Option<&Value>) -> RequestError {
    let message = payload
        .and_then(|body| text_field(body, "message").or_else(|| text_field(body, "error")))
        .unwrap_or_else(|| format!("request failed with status {}", status));
    RequestError::Status { status, message }
}

fn text_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pen() -> Value {
        json!({"id": 1, "name": "Pen", "price": 1.5, "stock": 10, "description": ""})
    }

    #[test]
    fn test_list_shapes_normalize_to_products() {
        for body in [json!([pen()]), json!({"data": [pen()]}), json!({"items": [pen()]})] {
            let products = decode_list(Some(body)).unwrap();
            assert_eq!(products.len(), 1);
            assert_eq!(products[0].name, "Pen");
        }
    }

    #[test]
    fn test_unrecognized_list_shapes_are_empty() {
        for body in [json!({}), json!({"data": "nope"}), json!(null), json!("text"), json!(42)] {
            assert_eq!(decode_list(Some(body)).unwrap(), Vec::new());
        }
        assert!(decode_list(None).unwrap().is_empty());
    }

    #[test]
    fn test_items_used_when_data_is_not_an_array() {
        let products = decode_list(Some(json!({"data": {}, "items": [pen()]}))).unwrap();
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn test_malformed_elements_are_decode_errors() {
        let result = decode_list(Some(json!([{"name": "Pen"}])));
        assert!(matches!(result, Err(RequestError::Decode(_))));
    }

    #[test]
    fn test_status_error_prefers_message_then_error() {
        let both = json!({"message": "name taken", "error": "conflict"});
        assert_eq!(status_error(409, Some(&both)).to_string(), "name taken");

        let error_only = json!({"error": "product not found"});
        assert_eq!(status_error(404, Some(&error_only)).to_string(), "product not found");
    }

    #[test]
    fn test_status_error_falls_back_to_status_text() {
        let empty = json!({"message": ""});
        assert_eq!(
            status_error(500, Some(&empty)).to_string(),
            "request failed with status 500"
        );
        let err = status_error(502, None);
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.to_string(), "request failed with status 502");
    }
}
