//! Turns raw form text into a [`ProductPayload`].
//!
//! Rules run in a fixed order and the first failure wins:
//!
//! 1. `name` must not be blank
//! 2. `price` must be a finite number, then not negative
//! 3. `stock` must be a finite number, then integral, then not negative,
//!    then no larger than [`MAX_STOCK`]
//!
//! Integral means "no fractional part", so `"10.0"` is an accepted stock.

pub mod error;

pub use error::*;

use crate::model::{FormDraft, ProductPayload};

/// Largest accepted stock (2^53); every integer up to it is exact in an `f64`.
pub const MAX_STOCK: u64 = 1 << 53;

/// Validates `draft` and produces the exact body sent to the server.
pub fn validate(draft: &FormDraft) -> Result<ProductPayload, ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }

    let price = parse_number(&draft.price).ok_or(ValidationError::PriceNotNumeric)?;
    if price < 0.0 {
        return Err(ValidationError::PriceNegative);
    }
    // Folds "-0" into 0
    let price = price + 0.0;

    let stock = parse_number(&draft.stock).ok_or(ValidationError::StockNotNumeric)?;
    if stock.fract() != 0.0 {
        return Err(ValidationError::StockNotInteger);
    }
    if stock < 0.0 {
        return Err(ValidationError::StockNegative);
    }
    if stock > MAX_STOCK as f64 {
        return Err(ValidationError::StockTooLarge);
    }

    Ok(ProductPayload {
        name: name.to_string(),
        price,
        stock: stock as u64,
        description: draft.description.trim().to_string(),
    })
}

// Blank text, NaN and infinities are not numbers a user can mean.
fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: &str, stock: &str, description: &str) -> FormDraft {
        FormDraft {
            name: name.to_string(),
            price: price.to_string(),
            stock: stock.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_valid_draft_is_normalized() {
        let payload = validate(&draft("  Pen ", "1.50", "10", "  blue ink  ")).unwrap();
        assert_eq!(
            payload,
            ProductPayload {
                name: "Pen".to_string(),
                price: 1.5,
                stock: 10,
                description: "blue ink".to_string(),
            }
        );
    }

    #[test]
    fn test_blank_name_fails_first() {
        for name in ["", "   ", "\t\n"] {
            assert_eq!(
                validate(&draft(name, "abc", "-1.5", "")),
                Err(ValidationError::NameRequired)
            );
        }
    }

    #[test]
    fn test_price_rules_run_before_stock_rules() {
        assert_eq!(
            validate(&draft("Pen", "abc", "xyz", "")),
            Err(ValidationError::PriceNotNumeric)
        );
        assert_eq!(
            validate(&draft("Pen", "-0.01", "xyz", "")),
            Err(ValidationError::PriceNegative)
        );
    }

    #[test]
    fn test_non_numbers_are_rejected() {
        for price in ["", "  ", "12a", "NaN", "inf", "1,5"] {
            assert_eq!(
                validate(&draft("Pen", price, "1", "")),
                Err(ValidationError::PriceNotNumeric),
                "price {:?}",
                price
            );
        }
        assert_eq!(
            validate(&draft("Pen", "1", "", "")),
            Err(ValidationError::StockNotNumeric)
        );
    }

    #[test]
    fn test_stock_integer_check_precedes_sign_check() {
        assert_eq!(
            validate(&draft("Pen", "1", "2.5", "")),
            Err(ValidationError::StockNotInteger)
        );
        assert_eq!(
            validate(&draft("Pen", "1", "-1.5", "")),
            Err(ValidationError::StockNotInteger)
        );
        assert_eq!(
            validate(&draft("Pen", "1", "-3", "")),
            Err(ValidationError::StockNegative)
        );
    }

    #[test]
    fn test_integral_decimal_stock_is_accepted() {
        let payload = validate(&draft("Pen", "0", "10.0", "")).unwrap();
        assert_eq!(payload.stock, 10);
        assert_eq!(payload.price, 0.0);
    }

    #[test]
    fn test_out_of_range_stock_is_rejected_not_clamped() {
        for stock in ["1e20", "1e30", "18446744073709551616", "9007199254740994"] {
            assert_eq!(
                validate(&draft("Pen", "1", stock, "")),
                Err(ValidationError::StockTooLarge),
                "stock {:?}",
                stock
            );
        }
        let payload = validate(&draft("Pen", "1", "9007199254740992", "")).unwrap();
        assert_eq!(payload.stock, MAX_STOCK);
    }

    #[test]
    fn test_negative_zero_price_is_sent_as_zero() {
        let payload = validate(&draft("Pen", "-0", "1", "")).unwrap();
        assert!(payload.price.is_sign_positive());
        let body = serde_json::to_string(&payload).unwrap();
        assert!(body.contains(r#""price":0.0"#), "body {}", body);
    }

    #[test]
    fn test_intermediate_decimal_input_parses() {
        let payload = validate(&draft("Pen", "12.", "1", "")).unwrap();
        assert_eq!(payload.price, 12.0);
    }

    #[test]
    fn test_messages_match_user_facing_text() {
        assert_eq!(ValidationError::NameRequired.to_string(), "name required");
        assert_eq!(ValidationError::PriceNotNumeric.to_string(), "price must be numeric");
        assert_eq!(ValidationError::StockNegative.to_string(), "stock must not be negative");
    }
}
