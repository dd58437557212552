use std::sync::Arc;

use async_trait::async_trait;
use strew_fs::{CreateDirOptions, DirectoryCreator};
use strew_handler::{Handler, StoreError, StoreResult};
use strew_locator::{DirResolver, Locator};
use strew_path::codec;
use strew_types::{Node, StoreOptions};
use tracing::debug;

/// The recursive directory-producing handler at the core of the engine.
///
/// Applicable to plain-object values. On invocation it creates the
/// destination directory, then walks the object's properties in
/// insertion order: each property goes to the first candidate handler
/// whose `can_store` accepts it, unhandled object-shaped properties are
/// materialized recursively by the materializer itself, and anything
/// still unmatched is either skipped (default) or fails the call when
/// the merged `strict` option is set.
///
/// The candidate list is copied at construction; later mutation of the
/// caller's list is never observed. The materializer holds no other
/// state: value trees and locators are transient per invocation.
pub struct DirectoryMaterializer {
    name: String,
    handlers: Vec<Arc<dyn Handler>>,
    creator: Arc<dyn DirectoryCreator>,
    defaults: StoreOptions,
}

impl DirectoryMaterializer {
    /// Build a materializer over an ordered candidate handler list.
    pub fn new(
        name: impl Into<String>,
        handlers: &[Arc<dyn Handler>],
        creator: Arc<dyn DirectoryCreator>,
    ) -> Self {
        Self::with_defaults(name, handlers, creator, StoreOptions::new())
    }

    /// Build a materializer with instance-level default options, merged
    /// underneath every call's options.
    pub fn with_defaults(
        name: impl Into<String>,
        handlers: &[Arc<dyn Handler>],
        creator: Arc<dyn DirectoryCreator>,
        defaults: StoreOptions,
    ) -> Self {
        Self {
            name: name.into(),
            handlers: handlers.to_vec(),
            creator,
            defaults,
        }
    }

    /// Number of candidate handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

#[async_trait]
impl Handler for DirectoryMaterializer {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_store(&self, _path: &str, _destination: &Locator, value: &Node) -> bool {
        value.is_object()
    }

    /// Materialize `value` as the directory at `destination`.
    ///
    /// Sibling properties are processed sequentially, in the object's
    /// own iteration order; the first error aborts the remaining
    /// siblings. Directory-creation and delegated-store failures
    /// propagate unchanged.
    async fn store(
        &self,
        path: &str,
        destination: &Locator,
        value: &Node,
        options: &StoreOptions,
    ) -> StoreResult<()> {
        let Some(entries) = value.as_object() else {
            return Err(StoreError::type_mismatch(path, "plain object", value.kind()));
        };

        let merged = self.defaults.layered(options);
        if merged.is_cancelled() {
            return Err(StoreError::Cancelled);
        }

        let resolver = DirResolver::new(destination);
        self.creator
            .create_dir(
                resolver.dir(),
                &CreateDirOptions {
                    recursive: true,
                    mode: merged.mode,
                    cancel: merged.cancel.clone(),
                },
            )
            .await?;
        debug!(
            directory = %resolver.dir(),
            properties = entries.len(),
            "materializing directory"
        );

        for (key, child) in entries {
            if merged.is_cancelled() {
                return Err(StoreError::Cancelled);
            }

            let child_path = format!("{path}/{}", codec::encode(key));
            let segment = match &merged.key_encoder {
                Some(encode) => encode(key),
                None => codec::encode(key),
            };
            let child_location = resolver.child_location(&segment)?;

            let chosen = self
                .handlers
                .iter()
                .find(|h| h.can_store(&child_path, &child_location, child));
            if let Some(handler) = chosen {
                debug!(handler = handler.name(), path = %child_path, "delegating property");
                handler
                    .store(&child_path, &child_location, child, &merged)
                    .await?;
                continue;
            }

            // Unclaimed nested objects become nested directories, even
            // with no handler registered for them.
            if self.can_store(&child_path, &child_location, child) {
                self.store(&child_path, &child_location, child, &merged)
                    .await?;
                continue;
            }

            if merged.is_strict() {
                return Err(StoreError::NoHandlerMatched { path: child_path });
            }
            debug!(path = %child_path, kind = %child.kind(), "no handler matched; skipping");
        }

        Ok(())
    }
}

/// Store `root` as the directory at `destination` in one call.
///
/// Equivalent to building a [`DirectoryMaterializer`] over `handlers`
/// with no name or default-option overrides and invoking
/// `store("", destination, root, options)`.
pub async fn store_node_to_directory(
    creator: Arc<dyn DirectoryCreator>,
    destination: &Locator,
    root: &Node,
    handlers: &[Arc<dyn Handler>],
    options: Option<StoreOptions>,
) -> StoreResult<()> {
    let materializer = DirectoryMaterializer::new("directory", handlers, creator);
    materializer
        .store("", destination, root, &options.unwrap_or_default())
        .await
}
