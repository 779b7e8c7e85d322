//! # Storage Error Types
//!
//! Error types for key-value store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← Adds the storage-layer taxonomy          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StateError (maison-state) ← What the UI shell handles                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing key is NOT an error: `get` returns `Ok(None)` and the typed
//! loaders substitute empty defaults. Errors here mean the store itself
//! misbehaved (I/O failure, corrupt JSON, malformed key).

use thiserror::Error;

/// Key-value store operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key contains characters the file backend cannot map to a path.
    ///
    /// ## When This Occurs
    /// - Keys with path separators or other non `[A-Za-z0-9_-]` characters
    #[error("Invalid storage key: '{key}'")]
    InvalidKey { key: String },

    /// The underlying file operation failed.
    ///
    /// ## When This Occurs
    /// - Data directory is not writable
    /// - Disk full
    /// - File removed between metadata check and read
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A stored entry could not be (de)serialized.
    ///
    /// ## When This Occurs
    /// - Entry was written by an incompatible version
    /// - File was edited or truncated by hand
    #[error("Storage serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StorageError::InvalidKey {
            key: "../escape".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid storage key: '../escape'");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StorageError = io.into();
        assert!(matches!(err, StorageError::Io(_)));
    }
}
