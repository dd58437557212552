use std::sync::Arc;

use crate::cancel::CancelToken;

/// Maps a property name to the path segment used for its physical location.
///
/// The engine applies the effective encoder to every property name before
/// joining it onto the parent directory location. When no encoder is set
/// the default is the path codec's escaping.
pub type KeyEncoder = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Open, mergeable option record threaded through every `store` call.
///
/// Options are layered in three tiers, each merged key-by-key with the
/// override winning and unset keys inheriting:
///
/// 1. handler-construction-time defaults,
/// 2. materializer-construction-time defaults,
/// 3. call-site overrides.
#[derive(Clone, Default)]
pub struct StoreOptions {
    /// Numeric permission bits for created directories and files.
    pub mode: Option<u32>,
    /// When `true`, an unmatched property is a fatal loss-of-data
    /// condition instead of being silently skipped.
    pub strict: Option<bool>,
    /// Cooperative cancellation token.
    pub cancel: Option<CancelToken>,
    /// Property-name-to-path-segment encoder.
    pub key_encoder: Option<KeyEncoder>,
}

impl StoreOptions {
    /// An empty option record; every key inherits from lower tiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set permission bits.
    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the strict policy flag.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    /// Attach a cancellation token.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Set the property-name encoder.
    pub fn with_key_encoder(mut self, encoder: KeyEncoder) -> Self {
        self.key_encoder = Some(encoder);
        self
    }

    /// Shallow-merge `overrides` over `self`, key by key.
    ///
    /// A key set in `overrides` wins; an unset key inherits the value
    /// from `self`. Neither input is modified.
    pub fn layered(&self, overrides: &StoreOptions) -> StoreOptions {
        StoreOptions {
            mode: overrides.mode.or(self.mode),
            strict: overrides.strict.or(self.strict),
            cancel: overrides.cancel.clone().or_else(|| self.cancel.clone()),
            key_encoder: overrides
                .key_encoder
                .clone()
                .or_else(|| self.key_encoder.clone()),
        }
    }

    /// Effective strict policy; unset means best-effort (lossy) mode.
    pub fn is_strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }

    /// Returns `true` if a cancellation token is present and cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

impl std::fmt::Debug for StoreOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreOptions")
            .field("mode", &self.mode.map(|m| format!("{m:#o}")))
            .field("strict", &self.strict)
            .field("cancel", &self.cancel)
            .field("key_encoder", &self.key_encoder.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
