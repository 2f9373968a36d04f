//! Error types for diamond pricing.

use thiserror::Error;

/// A specialized Result type for pricing operations.
pub type DiamondResult<T> = Result<T, DiamondError>;

/// The error type for pricing operations.
///
/// Grade errors are caused by the caller and map to HTTP 400 at the API
/// boundary; everything else maps to HTTP 500.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiamondError {
    /// Cut grade not present in the cut multiplier table.
    #[error("Invalid cut grade: {value}")]
    InvalidCut {
        /// The rejected cut grade, as submitted.
        value: String,
    },

    /// Color grade not present in the color multiplier table.
    #[error("Invalid color grade: {value}")]
    InvalidColor {
        /// The rejected color grade, as submitted.
        value: String,
    },

    /// Clarity grade not present in the clarity multiplier table.
    #[error("Invalid clarity grade: {value}")]
    InvalidClarity {
        /// The rejected clarity grade, as submitted.
        value: String,
    },

    /// Certification not present in the certification multiplier table.
    #[error("Invalid certification: {value}")]
    InvalidCertification {
        /// The rejected certification, as submitted.
        value: String,
    },

    /// Unexpected failure during computation.
    #[error("{reason}")]
    Internal {
        /// Description of what went wrong.
        reason: String,
    },
}

impl DiamondError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal {
            reason: reason.into(),
        }
    }

    /// Whether this error was caused by invalid client input.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DiamondError::InvalidCut {
            value: "superb".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid cut grade: superb");

        let err = DiamondError::InvalidCertification {
            value: "EGL".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid certification: EGL");
    }

    #[test]
    fn test_error_classification() {
        assert!(DiamondError::InvalidColor {
            value: "d".to_string()
        }
        .is_client_error());
        assert!(!DiamondError::internal("division by zero").is_client_error());
    }
}
