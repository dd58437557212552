use std::sync::Arc;

use async_trait::async_trait;
use strew_fs::{LeafWriter, WriteOptions};
use strew_handler::{Handler, StoreError, StoreResult};
use strew_locator::Locator;
use strew_types::{Node, StoreOptions};

/// Persists any node as a pretty-printed JSON file.
///
/// Applicable to every value, so in an ordered handler list it acts as a
/// catch-all: place it last, or narrow it with a
/// [`HandlerFilter`](strew_handler::HandlerFilter).
pub struct JsonHandler {
    writer: Arc<dyn LeafWriter>,
    defaults: StoreOptions,
}

impl JsonHandler {
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
impl Handler for JsonHandler {
    fn name(&self) -> &str {
        "json"
    }

    fn can_store(&self, _path: &str, _destination: &Locator, _value: &Node) -> bool {
        true
    }

    async fn store(
        &self,
        path: &str,
        destination: &Locator,
        value: &Node,
        options: &StoreOptions,
    ) -> StoreResult<()> {
        let effective = self.defaults.layered(options);
        let mut content =
            serde_json::to_string_pretty(value).map_err(|e| StoreError::Serialization {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        content.push('\n');
        let write_options = WriteOptions {
            mode: effective.mode,
            cancel: effective.cancel.clone(),
        };
        self.writer
            .write_text(destination, &content, &write_options)
            .await?;
        Ok(())
    }
}
