//! Core types for the strew directory materialization engine.
//!
//! This crate defines the value tree that the engine walks and the option
//! record that is layered through every `store` call.
//!
//! # Key Types
//!
//! - [`Node`] -- An immutable keyed value tree: objects, arrays, scalars,
//!   and binary buffers. Object properties keep their insertion order.
//! - [`NodeKind`] -- Coarse type tag for a node, used by handler predicates.
//! - [`StoreOptions`] -- Open, mergeable option record (permission bits,
//!   strict policy, cancellation, property-name encoder). Options layer:
//!   handler-construction defaults < materializer defaults < call-site
//!   overrides, merged key-by-key with the override winning.
//! - [`CancelToken`] -- Clonable cooperative cancellation flag threaded
//!   through the options.
//!
//! # Design Rules
//!
//! 1. The engine never mutates caller data: all traversal takes `&Node`.
//! 2. Option merging is shallow and per-key; unset keys inherit.
//! 3. Cancellation is cooperative; already-issued writes are not rolled back.

pub mod cancel;
pub mod node;
pub mod options;

pub use cancel::CancelToken;
pub use node::{Map, Node, NodeKind};
pub use options::{KeyEncoder, StoreOptions};
