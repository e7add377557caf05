//! Import enumeration types.

/// Fatal import errors.
pub mod import_error;

/// Scanner states of the statement splitter.
pub mod split_state;
