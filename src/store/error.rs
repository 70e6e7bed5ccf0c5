//! Error types for store operations.

use crate::clients::RequestError;
use crate::validation::ValidationError;
use thiserror::Error;

/// Errors that can occur during store operations.
///
/// The display string of each variant is the message the store records for
/// the Presentation Layer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The form did not pass validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The catalog service rejected the request or could not be reached.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The product has no usable id, so it cannot be addressed on the server.
    #[error("cannot {operation}: product missing id")]
    MissingIdentifier { operation: &'static str },
}
