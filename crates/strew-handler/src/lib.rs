//! The handler capability contract and its composition layer.
//!
//! A [`Handler`] is a named unit of applicability-check-plus-persist
//! logic for one category of value. Handlers are held in ordered lists;
//! the materializer consults them front to back and the first whose
//! [`Handler::can_store`] answers `true` persists the value. Ordering is
//! caller-controlled and significant.
//!
//! [`HandlerFilter`] derives new handlers from existing ones by ANDing
//! in additional applicability constraints (path globs, structural type
//! checks) without mutating or re-implementing the wrapped handler.
//!
//! [`StoreError`] is the error taxonomy shared by every handler and the
//! engine itself. There is no partial-success reporting: a `store` call
//! either completes or surfaces its first error.

pub mod error;
pub mod filter;
pub mod handler;

pub use error::{StoreError, StoreResult};
pub use filter::HandlerFilter;
pub use handler::Handler;
