//! Common data structures.

/// Generic error carrying a plain message.
pub mod custom_error;
