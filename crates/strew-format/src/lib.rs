//! Concrete leaf-format handlers.
//!
//! Each handler persists one category of value through an injected
//! [`LeafWriter`](strew_fs::LeafWriter) and carries optional
//! construction-time default options -- the lowest tier of the option
//! layering, underneath materializer defaults and call-site overrides.
//!
//! - [`TextHandler`] -- string nodes, written verbatim.
//! - [`BinaryHandler`] -- binary buffers, plus strings coerced to their
//!   UTF-8 bytes.
//! - [`JsonHandler`] -- any node, serialized as pretty-printed JSON.
//!
//! Narrow any of these further with
//! [`HandlerFilter`](strew_handler::HandlerFilter).

pub mod binary;
pub mod json;
pub mod text;

pub use binary::BinaryHandler;
pub use json::JsonHandler;
pub use text::TextHandler;
