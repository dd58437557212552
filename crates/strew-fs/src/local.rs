use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use strew_locator::Locator;
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::traits::{check_cancel, CreateDirOptions, DirectoryCreator, LeafWriter, WriteOptions};

/// Local-disk backend over `tokio::fs`.
///
/// Handles `file` locators only; the locator path is used verbatim as the
/// file-system path. Permission bits are applied after creation on unix
/// and ignored elsewhere.
#[derive(Clone, Debug, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    fn fs_path(&self, locator: &Locator) -> StorageResult<PathBuf> {
        if locator.scheme() != "file" {
            return Err(StorageError::UnsupportedScheme {
                scheme: locator.scheme().to_string(),
            });
        }
        Ok(PathBuf::from(locator.path()))
    }
}

#[cfg(unix)]
async fn apply_mode(path: &Path, mode: u32) -> StorageResult<()> {
    use std::os::unix::fs::PermissionsExt;
    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).await?;
    Ok(())
}

#[cfg(not(unix))]
async fn apply_mode(_path: &Path, _mode: u32) -> StorageResult<()> {
    Ok(())
}

#[async_trait]
impl DirectoryCreator for LocalFs {
    async fn create_dir(
        &self,
        locator: &Locator,
        options: &CreateDirOptions,
    ) -> StorageResult<()> {
        check_cancel(&options.cancel)?;
        let path = self.fs_path(locator)?;
        if options.recursive {
            tokio::fs::create_dir_all(&path).await?;
        } else {
            match tokio::fs::create_dir(&path).await {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Err(StorageError::ParentMissing {
                        path: locator.to_string(),
                    });
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    return Err(StorageError::AlreadyExists {
                        path: locator.to_string(),
                    });
                }
                Err(e) => return Err(e.into()),
            }
        }
        if let Some(mode) = options.mode {
            apply_mode(&path, mode).await?;
        }
        debug!(path = %path.display(), recursive = options.recursive, "created directory");
        Ok(())
    }
}

#[async_trait]
impl LeafWriter for LocalFs {
    async fn write_text(
        &self,
        locator: &Locator,
        content: &str,
        options: &WriteOptions,
    ) -> StorageResult<()> {
        self.write_bytes(locator, content.as_bytes(), options).await
    }

    async fn write_bytes(
        &self,
        locator: &Locator,
        content: &[u8],
        options: &WriteOptions,
    ) -> StorageResult<()> {
        check_cancel(&options.cancel)?;
        let path = self.fs_path(locator)?;
        tokio::fs::write(&path, content).await?;
        if let Some(mode) = options.mode {
            apply_mode(&path, mode).await?;
        }
        debug!(path = %path.display(), bytes = content.len(), "wrote leaf");
        Ok(())
    }
}
