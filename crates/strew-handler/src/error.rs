use strew_fs::StorageError;
use strew_locator::LocatorError;
use strew_types::NodeKind;
use thiserror::Error;

/// Errors surfaced by `store` calls.
///
/// Nothing here is retried and nothing is swallowed: the only condition
/// whose handling is policy-controlled is the unmatched-property case,
/// which becomes [`StoreError::NoHandlerMatched`] under strict mode and
/// a silent skip otherwise.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A handler was asked to store a value structurally incompatible
    /// with its contract.
    #[error("type mismatch at '{path}': expected {expected}, got {actual}")]
    TypeMismatch {
        /// Diagnostic source path of the offending value.
        path: String,
        /// What the handler's contract accepts.
        expected: String,
        /// The actual kind of the value.
        actual: NodeKind,
    },

    /// No candidate handler accepted a property. Raised only under
    /// strict mode; otherwise the property is skipped.
    #[error("no handler matched property at '{path}'")]
    NoHandlerMatched { path: String },

    /// Locator parsing or child-location derivation failed; this
    /// includes the directory escape check.
    #[error(transparent)]
    Locator(#[from] LocatorError),

    /// The target store reported a failure. Passed through unchanged,
    /// not reinterpreted.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The call was aborted by its cancellation token.
    #[error("operation cancelled")]
    Cancelled,

    /// A value could not be serialized into its leaf format.
    #[error("serialization error at '{path}': {reason}")]
    Serialization { path: String, reason: String },
}

impl StoreError {
    /// Convenience constructor for [`StoreError::TypeMismatch`].
    pub fn type_mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: NodeKind,
    ) -> Self {
        Self::TypeMismatch {
            path: path.into(),
            expected: expected.into(),
            actual,
        }
    }

    /// Returns `true` for a cancellation, whether raised by the engine
    /// or reported by the target store.
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Self::Cancelled | Self::Storage(StorageError::Cancelled)
        )
    }
}

/// Result alias for `store` operations.
pub type StoreResult<T> = Result<T, StoreError>;
