//! Error types for form validation.

use thiserror::Error;

/// Reasons a [`FormDraft`](crate::model::FormDraft) is rejected before it reaches the network.
///
/// The display strings are shown to the user verbatim.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name required")]
    NameRequired,

    #[error("price must be numeric")]
    PriceNotNumeric,

    #[error("price must not be negative")]
    PriceNegative,

    #[error("stock must be numeric")]
    StockNotNumeric,

    #[error("stock must be an integer")]
    StockNotInteger,

    #[error("stock must not be negative")]
    StockNegative,

    #[error("stock is too large")]
    StockTooLarge,
}
