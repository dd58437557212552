use std::sync::Arc;

use async_trait::async_trait;
use strew_locator::Locator;
use strew_path::Glob;
use strew_types::{Node, NodeKind, StoreOptions};

use crate::error::StoreResult;
use crate::handler::Handler;

type Predicate = Arc<dyn Fn(&str, &Locator, &Node) -> bool + Send + Sync>;

/// A handler derived from another by composing applicability predicates.
///
/// The filter holds the wrapped handler, an optional display-name
/// override, and a composed predicate seeded with the inner handler's
/// own `can_store`. Every builder method returns a *new* filter with one
/// more constraint ANDed in; the original filter and the inner handler
/// are never modified.
///
/// `can_store` evaluates the composed predicate. `store` delegates
/// unconditionally to the inner handler -- applicability was already
/// settled by the dispatch loop, per the [`Handler`] contract.
#[derive(Clone)]
pub struct HandlerFilter {
    inner: Arc<dyn Handler>,
    name: Option<String>,
    predicate: Predicate,
}

impl HandlerFilter {
    /// Wrap a handler. The initial predicate is the handler's own
    /// `can_store`; the display name stays the handler's until
    /// overridden with [`named`](Self::named).
    pub fn new(inner: Arc<dyn Handler>) -> Self {
        let seed = Arc::clone(&inner);
        Self {
            inner,
            name: None,
            predicate: Arc::new(move |path, destination, value| {
                seed.can_store(path, destination, value)
            }),
        }
    }

    /// A copy with a different display name; predicate unchanged.
    pub fn named(&self, name: impl Into<String>) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            name: Some(name.into()),
            predicate: Arc::clone(&self.predicate),
        }
    }

    /// Additionally require the source path to match a glob pattern.
    pub fn for_path(&self, pattern: &str) -> Self {
        let glob = Glob::new(pattern);
        self.and(move |path, _, _| glob.is_match(path))
    }

    /// Additionally require the source path to match every pattern.
    pub fn for_all_paths(&self, patterns: &[&str]) -> Self {
        let globs: Vec<Glob> = patterns.iter().map(|p| Glob::new(p)).collect();
        self.and(move |path, _, _| globs.iter().all(|g| g.is_match(path)))
    }

    /// Additionally require the source path to match at least one
    /// pattern.
    pub fn for_any_path(&self, patterns: &[&str]) -> Self {
        let globs: Vec<Glob> = patterns.iter().map(|p| Glob::new(p)).collect();
        self.and(move |path, _, _| globs.iter().any(|g| g.is_match(path)))
    }

    /// Additionally require the value to be an array.
    pub fn for_arrays(&self) -> Self {
        self.and(|_, _, value| value.is_array())
    }

    /// Additionally require the value to be a plain object.
    pub fn for_objects(&self) -> Self {
        self.and(|_, _, value| value.is_object())
    }

    /// Additionally require the value's type tag to equal `kind`.
    pub fn for_kind(&self, kind: NodeKind) -> Self {
        self.and(move |_, _, value| value.kind() == kind)
    }

    /// Additionally require an arbitrary predicate.
    pub fn when(
        &self,
        predicate: impl Fn(&str, &Locator, &Node) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.and(predicate)
    }

    fn and(
        &self,
        extra: impl Fn(&str, &Locator, &Node) -> bool + Send + Sync + 'static,
    ) -> Self {
        let previous = Arc::clone(&self.predicate);
        Self {
            inner: Arc::clone(&self.inner),
            name: self.name.clone(),
            predicate: Arc::new(move |path, destination, value| {
                extra(path, destination, value) && previous(path, destination, value)
            }),
        }
    }
}

#[async_trait]
impl Handler for HandlerFilter {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.inner.name())
    }

    fn can_store(&self, path: &str, destination: &Locator, value: &Node) -> bool {
        (self.predicate)(path, destination, value)
    }

    async fn store(
        &self,
        path: &str,
        destination: &Locator,
        value: &Node,
        options: &StoreOptions,
    ) -> StoreResult<()> {
        self.inner.store(path, destination, value, options).await
    }
}
