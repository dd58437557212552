//! Recursive directory materialization for keyed value trees.
//!
//! The engine decomposes an in-memory value tree into a directory
//! hierarchy on a file-system-like target. Object-shaped nodes become
//! directories; every property is persisted by the first applicable
//! handler from an ordered candidate list, or materialized recursively
//! when it is itself an object no handler claims.
//!
//! # Key Types
//!
//! - [`DirectoryMaterializer`] -- the core recursive
//!   [`Handler`](strew_handler::Handler): creates the destination
//!   directory, dispatches each property, recurses into unhandled
//!   nested objects, and applies the strict/best-effort policy to
//!   whatever remains.
//! - [`store_node_to_directory`] -- one-call convenience over a fresh
//!   materializer.
//!
//! # Design Rules
//!
//! 1. The materializer never persists a value itself: it only creates
//!    directories and delegates.
//! 2. Sibling properties are processed sequentially, in the object's
//!    own iteration order; the first error aborts the remainder.
//! 3. Every derived child location is containment-checked; a write can
//!    never escape the designated output root.
//! 4. No error is swallowed except the unmatched-property skip in
//!    non-strict mode, which is an explicit lossy-by-default policy.

pub mod materializer;

pub use materializer::{store_node_to_directory, DirectoryMaterializer};
