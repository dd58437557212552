//! Destination locators and safe child-location derivation.
//!
//! A [`Locator`] is an absolute hierarchical address in the target store:
//! a scheme/authority/path triple comparable to a URL. Its canonical form
//! carries a normalized path with no trailing separator.
//!
//! The [`DirResolver`] represents a directory's canonical location and is
//! the only way to derive a child entry's location. Every derived location
//! is re-normalized and checked for containment: a child that would
//! resolve outside the directory's own subtree raises
//! [`LocatorError::Escape`]. The check is normalization-based, not a
//! segment blacklist, so traversal that nets back inside the directory is
//! accepted.
//!
//! This guards against malformed or adversarial property names reaching
//! the target store unexpectedly. It is not a sandbox against a
//! cooperating caller.

pub mod error;
pub mod locator;
pub mod normalize;
pub mod resolver;

pub use error::{LocatorError, LocatorResult};
pub use locator::Locator;
pub use normalize::normalize_path;
pub use resolver::DirResolver;
