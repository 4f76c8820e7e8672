//! # Error Types
//!
//! Validation error types for onticket-core.
//!
//! The cart engine itself is deliberately permissive: its operations are
//! total functions and malformed input becomes a silent no-op (the hosted
//! backend re-validates everything at sale time). These typed errors exist
//! for callers that want to upgrade those silent no-ops to explicit
//! failures by pre-checking input through [`crate::validation`].
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// Produced only by the helpers in [`crate::validation`]; the cart engine
/// never raises them on its own.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// A record's fields contradict each other.
    #[error("{field} is inconsistent: {reason}")]
    Inconsistent { field: String, reason: String },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "employee".to_string(),
        };
        assert_eq!(err.to_string(), "employee is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 999,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 999");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }
}
