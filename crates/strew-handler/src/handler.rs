use async_trait::async_trait;
use strew_locator::Locator;
use strew_types::{Node, StoreOptions};

use crate::error::StoreResult;

/// A unit of applicability-check-plus-persist logic for one category of
/// value.
///
/// Handlers are stateless or close over their own state; the engine
/// holds them behind shared references and never mutates them. A handler
/// list is consulted in order and the first match wins, so two handlers
/// never both fire for the same property.
///
/// `store` is only ever invoked after a matching `can_store` on the same
/// `(path, destination, value)` triple -- implementations are not
/// required to re-check applicability, and composed handlers rely on
/// this to delegate storage unconditionally.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Display name, used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Whether this handler can persist `value`.
    ///
    /// `path` is the diagnostic source path (for pattern predicates);
    /// `destination` is where the value would be stored. The check must
    /// be side-effect free.
    fn can_store(&self, path: &str, destination: &Locator, value: &Node) -> bool;

    /// Persist `value` at `destination`.
    ///
    /// `options` is the merged option record for this call; handlers
    /// layer their own construction-time defaults underneath it.
    async fn store(
        &self,
        path: &str,
        destination: &Locator,
        value: &Node,
        options: &StoreOptions,
    ) -> StoreResult<()>;
}
