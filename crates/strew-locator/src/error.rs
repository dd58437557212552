use thiserror::Error;

/// Errors from locator parsing and child-location derivation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocatorError {
    /// The input string is not a well-formed absolute locator.
    #[error("invalid locator '{input}': {reason}")]
    InvalidLocator { input: String, reason: String },

    /// A derived child location resolved outside its directory's subtree.
    ///
    /// This indicates a malformed property name or an unsafe name
    /// encoder; it is never silently corrected.
    #[error("entry '{name}' escapes directory '{enclosing}' (resolves to '{resolved}')")]
    Escape {
        /// The offending entry name as supplied.
        name: String,
        /// The normalized location the name resolved to.
        resolved: String,
        /// The enclosing canonical directory location.
        enclosing: String,
    },
}

/// Result alias for locator operations.
pub type LocatorResult<T> = Result<T, LocatorError>;
