//! Cart error types.

use thiserror::Error;

/// Errors that can occur in cart operations.
///
/// The summary engine itself never fails; these come from the strict
/// summary path and from parsing cart payloads.
#[derive(Error, Debug)]
pub enum CartError {
    /// Items sharing a product id disagree on unit price.
    #[error("Inconsistent price for product {id}: expected {expected}, found {found}")]
    InconsistentPrice {
        id: String,
        expected: f64,
        found: f64,
    },

    /// Price is not a finite, non-negative number.
    #[error("Invalid price for product {id}: {price}")]
    InvalidPrice { id: String, price: f64 },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CartError {
    fn from(e: serde_json::Error) -> Self {
        CartError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inconsistent_price_message() {
        let err = CartError::InconsistentPrice {
            id: "7".to_string(),
            expected: 3.0,
            found: 4.5,
        };
        assert_eq!(
            err.to_string(),
            "Inconsistent price for product 7: expected 3, found 4.5"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let err: CartError = serde_json::from_str::<Vec<u8>>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, CartError::SerializationError(_)));
    }
}
