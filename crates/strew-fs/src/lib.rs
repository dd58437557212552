//! Target-store capabilities for the strew engine.
//!
//! The engine itself never touches a file system. It consumes two
//! injected capabilities and nothing else:
//!
//! - [`DirectoryCreator`] -- create a directory at a locator, optionally
//!   with parents.
//! - [`LeafWriter`] -- persist text or binary content at a locator. Leaf
//!   handlers call this; the engine never does.
//!
//! Both are pure collaborators: no engine-held state, no caching, no
//! pooling, no long-lived handles. Every call is independent.
//!
//! # Backends
//!
//! - [`LocalFs`] -- `tokio::fs`-backed implementation for `file` locators.
//! - [`MemoryFs`] -- in-memory tree for tests and embedding, with an
//!   ordered operation log that assertions can replay.

pub mod error;
pub mod local;
pub mod memory;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use local::LocalFs;
pub use memory::{Entry, MemoryFs, Op};
pub use traits::{CreateDirOptions, DirectoryCreator, LeafWriter, WriteOptions};
