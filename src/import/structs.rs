//! Import data structures.

/// Raw and prefix-substituted dump text.
pub mod dump_source;

/// Connection descriptor for the database receiving the dump.
pub mod import_target;

/// Ordered, non-empty statements produced by the splitter.
pub mod statement_batch;

/// Counters returned by a successful import.
pub mod import_summary;

/// A recovered per-statement execution failure.
pub mod statement_diagnostic;

/// Dialect switches for the splitter.
pub mod split_options;

/// Entry point dispatching a dump to its backend.
pub mod sql_importer;

/// Diagnostics sink forwarding to the process logger.
pub mod log_diagnostics;

/// Diagnostics sink keeping entries in memory.
pub mod memory_diagnostics;
