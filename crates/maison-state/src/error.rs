//! # State Error Type
//!
//! Unified error type for state manager operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  CoreError (checkout rules)  ──┐                                        │
//! │                                ├──► StateError ──► UI shell message     │
//! │  StorageError (persistence) ───┘                                        │
//! │                                                                         │
//! │  login/register do NOT error on bad credentials - they return           │
//! │  Ok(false), matching the storefront's boolean contract. StateError      │
//! │  is reserved for the store itself failing (disk, corrupt data,          │
//! │  empty-cart checkout).                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use maison_core::CoreError;
use maison_storage::StorageError;

/// State manager operation errors.
#[derive(Debug, Error)]
pub enum StateError {
    /// A persistence write or read failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A domain rule was violated (e.g. checkout on an empty cart).
    #[error("Domain error: {0}")]
    Core(#[from] CoreError),
}

/// Result type for state manager operations.
pub type StateResult<T> = Result<T, StateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_converts() {
        let err: StateError = CoreError::EmptyCart.into();
        assert!(matches!(err, StateError::Core(CoreError::EmptyCart)));
        assert_eq!(
            err.to_string(),
            "Domain error: Cannot build an order from an empty cart"
        );
    }
}
