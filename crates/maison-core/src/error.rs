//! # Error Types
//!
//! Domain-specific error types for maison-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  maison-core errors (this file)                                        │
//! │  ├── CoreError        - Domain rule violations                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  maison-storage errors (separate crate)                                │
//! │  └── StorageError     - Key-value store failures                       │
//! │                                                                         │
//! │  maison-state errors (separate crate)                                  │
//! │  └── StateError       - What the UI shell sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StateError → UI                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (ids, amounts)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// These represent rule violations in checkout and order handling. They
/// should be caught and translated to user-friendly messages by the shell.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout was attempted against an empty cart.
    #[error("Cannot build an order from an empty cart")]
    EmptyCart,

    /// An order's recorded total does not match the sum of its line totals
    /// plus shipping.
    #[error("Order total mismatch: expected {expected_cents} cents, found {actual_cents} cents")]
    TotalMismatch {
        expected_cents: i64,
        actual_cents: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation before domain logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::TotalMismatch {
            expected_cents: 7599,
            actual_cents: 7000,
        };
        assert_eq!(
            err.to_string(),
            "Order total mismatch: expected 7599 cents, found 7000 cents"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "email" };
        assert_eq!(err.to_string(), "email is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required { field: "password" };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
