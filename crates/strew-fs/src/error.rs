use thiserror::Error;

/// Errors from target-store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The operation was aborted by its cancellation token.
    #[error("operation cancelled")]
    Cancelled,

    /// The backend does not handle this locator scheme.
    #[error("unsupported locator scheme '{scheme}'")]
    UnsupportedScheme { scheme: String },

    /// Non-recursive directory creation under a missing parent.
    #[error("parent directory missing for '{path}'")]
    ParentMissing { path: String },

    /// The target already exists and cannot be created as a directory.
    #[error("entry already exists at '{path}'")]
    AlreadyExists { path: String },
}

/// Result alias for target-store operations.
pub type StorageResult<T> = Result<T, StorageError>;
