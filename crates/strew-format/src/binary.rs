use std::sync::Arc;

use async_trait::async_trait;
use strew_fs::{LeafWriter, WriteOptions};
use strew_handler::{Handler, StoreError, StoreResult};
use strew_locator::Locator;
use strew_types::{Node, StoreOptions};

/// Persists binary buffers as raw files.
///
/// String nodes are coercible: they are written as their UTF-8 bytes.
/// Anything else is a type mismatch.
pub struct BinaryHandler {
    writer: Arc<dyn LeafWriter>,
    defaults: StoreOptions,
}

impl BinaryHandler {
    pub fn new(writer: Arc<dyn LeafWriter>) -> Self {
        Self {
            writer,
            defaults: StoreOptions::new(),
        }
    }

    /// With construction-time default options, the lowest layering tier.
    pub fn with_defaults(writer: Arc<dyn LeafWriter>, defaults: StoreOptions) -> Self {
        Self { writer, defaults }
    }

    fn coerce<'a>(value: &'a Node) -> Option<&'a [u8]> {
        match value {
            Node::Binary(bytes) => Some(bytes),
            Node::String(s) => Some(s.as_bytes()),
            _ => None,
        }
    }
}

#[async_trait]
impl Handler for BinaryHandler {
    fn name(&self) -> &str {
        "binary"
    }

    fn can_store(&self, _path: &str, _destination: &Locator, value: &Node) -> bool {
        Self::coerce(value).is_some()
    }

    async fn store(
        &self,
        path: &str,
        destination: &Locator,
        value: &Node,
        options: &StoreOptions,
    ) -> StoreResult<()> {
        let effective = self.defaults.layered(options);
        let Some(content) = Self::coerce(value) else {
            return Err(StoreError::type_mismatch(
                path,
                "binary buffer or string",
                value.kind(),
            ));
        };
        let write_options = WriteOptions {
            mode: effective.mode,
            cancel: effective.cancel.clone(),
        };
        self.writer
            .write_bytes(destination, content, &write_options)
            .await?;
        Ok(())
    }
}
