use async_trait::async_trait;
use strew_locator::Locator;
use strew_types::CancelToken;

use crate::error::{StorageError, StorageResult};

/// Options for a single directory-creation call.
#[derive(Clone, Debug, Default)]
pub struct CreateDirOptions {
    /// Create missing parent directories as needed. When set, creation
    /// succeeds even if the directory already exists.
    pub recursive: bool,
    /// Permission bits for newly created directories.
    pub mode: Option<u32>,
    /// Cooperative cancellation, checked before I/O starts.
    pub cancel: Option<CancelToken>,
}

/// Options for a single leaf-write call.
#[derive(Clone, Debug, Default)]
pub struct WriteOptions {
    /// Permission bits for the written file.
    pub mode: Option<u32>,
    /// Cooperative cancellation, checked before I/O starts.
    pub cancel: Option<CancelToken>,
}

/// Directory creation in the target store.
///
/// Implementations must succeed if the directory already exists when
/// `recursive` is requested, and may fail with
/// [`StorageError::ParentMissing`] when the immediate parent does not
/// exist and `recursive` is false. All I/O failures are propagated,
/// never silently ignored.
#[async_trait]
pub trait DirectoryCreator: Send + Sync {
    /// Create the directory at `locator`.
    async fn create_dir(
        &self,
        locator: &Locator,
        options: &CreateDirOptions,
    ) -> StorageResult<()>;
}

/// Leaf persistence primitives in the target store.
///
/// Format handlers serialize a value and hand the result to one of these
/// two calls; the writer itself applies no logic beyond persisting bytes.
#[async_trait]
pub trait LeafWriter: Send + Sync {
    /// Persist UTF-8 text at `locator`, replacing any existing content.
    async fn write_text(
        &self,
        locator: &Locator,
        content: &str,
        options: &WriteOptions,
    ) -> StorageResult<()>;

    /// Persist raw bytes at `locator`, replacing any existing content.
    async fn write_bytes(
        &self,
        locator: &Locator,
        content: &[u8],
        options: &WriteOptions,
    ) -> StorageResult<()>;
}

/// Fail with [`StorageError::Cancelled`] once the token is cancelled.
pub(crate) fn check_cancel(cancel: &Option<CancelToken>) -> StorageResult<()> {
    if cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
        return Err(StorageError::Cancelled);
    }
    Ok(())
}
