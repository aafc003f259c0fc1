//! Error types for the Ronda framework.
//!
//! Nearly everything in the scoring pipeline is recoverable locally: a short
//! series or a failed fetch degrades one component to its neutral fallback
//! rather than aborting the run. The variants below keep those causes
//! distinguishable so the fallback mapping can live at the call site instead
//! of inside a broad catch-all.

use thiserror::Error;

/// The main error type for Ronda operations.
#[derive(Debug, Error)]
pub enum RondaError {
    /// A series is shorter than the window a calculator requires.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// The data provider failed to deliver price or fundamental data.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Input data is malformed (non-finite values, inconsistent shapes).
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A weight configuration failed validation. This is a defect in the
    /// caller's configuration, not a runtime condition to degrade from.
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// The provider has no data at all for a symbol.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for RondaError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for RondaError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Ronda operations.
///
/// This is a convenience type that uses [`RondaError`] as the error type.
pub type Result<T> = std::result::Result<T, RondaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RondaError::InsufficientData("need 249 bars, got 40".to_string());
        assert_eq!(err.to_string(), "Insufficient data: need 249 bars, got 40");

        let err = RondaError::SymbolNotFound("XYZ".to_string());
        assert_eq!(err.to_string(), "Symbol not found: XYZ");
    }

    #[test]
    fn test_error_from_string() {
        let err: RondaError = "fetch timed out".into();
        assert!(matches!(err, RondaError::Other(_)));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<f64> = Ok(42.0);
        assert!(ok_result.is_ok());

        let err_result: Result<f64> = Err(RondaError::Provider("503".to_string()));
        assert!(err_result.is_err());
    }
}
