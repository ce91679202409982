//! tally core: the counter model, wire bodies, and the shared error surface.
//!
//! This crate defines the data contracts shared by the service and its
//! tests. It intentionally carries no transport or runtime dependencies so
//! it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TallyError`/`Result` so production
//! processes do not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;
pub mod wire;

/// Shared result type.
pub use error::{Result, TallyError};

pub use counter::Counter;
