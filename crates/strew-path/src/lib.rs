//! Path-segment escaping and glob matching for source paths.
//!
//! A *source path* is the diagnostic, slash-separated trail mirroring a
//! traversal position in the original value tree (`"/users/0/name"`). It
//! is used for error messages and predicate matching only, never for
//! physical addressing.
//!
//! - [`codec`] -- reversible escaping of a single segment so it can never
//!   introduce separator ambiguity when embedded in a source path.
//! - [`glob`] -- anchored single-level wildcard matching over full source
//!   paths, used by handler applicability predicates.

pub mod codec;
pub mod glob;

pub use codec::{decode, encode};
pub use glob::Glob;
