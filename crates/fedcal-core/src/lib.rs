//! # fedcal-core
//!
//! Error definitions shared by every crate in the workspace.
//!
//! The calendar engine is a set of pure functions, so the only thing the
//! crates need to agree on is how failures are reported: a single error
//! enum, a `Result` alias, and the `ensure!` / `ensure_post!` macros used to
//! state contracts at function boundaries.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_post!` macros.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
