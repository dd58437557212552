use std::sync::Arc;

use async_trait::async_trait;
use strew_fs::{LeafWriter, WriteOptions};
use strew_handler::{Handler, StoreError, StoreResult};
use strew_locator::Locator;
use strew_types::{Node, StoreOptions};

/// Persists string nodes as verbatim text files.
pub struct TextHandler {
    writer: Arc<dyn LeafWriter>,
    defaults: StoreOptions,
}

impl TextHandler {
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
}

#[async_trait]
impl Handler for TextHandler {
    fn name(&self) -> &str {
        "text"
    }

    fn can_store(&self, _path: &str, _destination: &Locator, value: &Node) -> bool {
        value.as_str().is_some()
    }

    async fn store(
        &self,
        path: &str,
        destination: &Locator,
        value: &Node,
        options: &StoreOptions,
    ) -> StoreResult<()> {
        let effective = self.defaults.layered(options);
        let Some(content) = value.as_str() else {
            return Err(StoreError::type_mismatch(path, "string", value.kind()));
        };
        let write_options = WriteOptions {
            mode: effective.mode,
            cancel: effective.cancel.clone(),
        };
        self.writer
            .write_text(destination, content, &write_options)
            .await?;
        Ok(())
    }
}
