//! Cart error types.

use thiserror::Error;

/// Errors that can occur while ingesting the catalog or computing totals.
///
/// Referencing an item that is not in the cart is not an error: the
/// transitions treat it as a no-op and report `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// A catalog cost string could not be parsed to a non-negative amount.
    #[error("Malformed price {cost:?}: {reason}")]
    MalformedPrice { cost: String, reason: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// The same product name appears twice in a catalog.
    #[error("Duplicate product in catalog: {0}")]
    DuplicateProduct(String),

    /// Catalog file could not be decoded.
    #[error("Catalog format error: {0}")]
    CatalogFormat(String),
}

impl CartError {
    pub(crate) fn malformed_price(cost: &str, reason: impl Into<String>) -> Self {
        CartError::MalformedPrice {
            cost: cost.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CartError {
    fn from(e: serde_json::Error) -> Self {
        CartError::CatalogFormat(e.to_string())
    }
}

impl From<toml::de::Error> for CartError {
    fn from(e: toml::de::Error) -> Self {
        CartError::CatalogFormat(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_price_message() {
        let err = CartError::malformed_price("15", "missing currency marker");
        assert_eq!(
            err.to_string(),
            "Malformed price \"15\": missing currency marker"
        );
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CartError = json_err.into();
        assert!(matches!(err, CartError::CatalogFormat(_)));
    }
}
