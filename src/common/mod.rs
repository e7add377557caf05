//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Logging setup (`fern` dispatcher with colored levels)
//!
//! # Data Structures
//!
//! - `CustomError` - Generic error carrying a message, used during bootstrap

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
