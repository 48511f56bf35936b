//! Error types for shipping quotes, rate cards and order persistence

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Reasons a shipment request is refused by the strict quoting path
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("weight must not be negative, got {0}")]
    NegativeWeight(f64),

    #[error("weight must be a finite number")]
    NonFiniteWeight,

    #[error("unknown shipping method '{0}'")]
    UnknownMethod(String),
}

/// Crate-wide errors
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Rate card error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_converts_into_quote_error() {
        let err: QuoteError = ValidationError::UnknownMethod("overnight".into()).into();
        assert!(matches!(err, QuoteError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation error: unknown shipping method 'overnight'"
        );
    }
}
