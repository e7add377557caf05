//! Implementation blocks for import types.

pub mod diagnostics;
pub mod dump_source;
pub mod import_target;
pub mod split_options;
pub mod split_state;
pub mod sql_importer;
pub mod statement_batch;
pub mod statement_diagnostic;
