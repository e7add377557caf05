//! SQL import engine.
//!
//! Turns a SQL dump on disk into statements applied to a target database.
//!
//! # Pipeline
//!
//! 1. `DumpSource::read` loads the dump file once.
//! 2. `DumpSource::substitute` replaces every `__PREFIX__` placeholder with the
//!    table prefix, producing a `PreparedDump`. Substitution happens exactly
//!    once, before any parsing.
//! 3. The `SqlImporter` dispatches on the target's engine:
//!    - `sqlite3`: the dump is split into a `StatementBatch` and executed in a
//!      single transaction. Failing statements are recorded through the
//!      `DiagnosticLog` and skipped; the transaction is always committed.
//!    - `mysql`: the dump is staged to `<temp_dir>/<dump>.process` and handed
//!      to a `NetworkedImporter`. The staged file is removed on success and
//!      kept on failure.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::path::Path;
//! use acg_import::import::structs::sql_importer::SqlImporter;
//!
//! let importer = SqlImporter::default();
//! let summary = importer.import(Path::new("install.sql"), &target).await?;
//! println!("{} statements applied", summary.applied);
//! ```

/// Import error and splitter state enumerations.
pub mod enums;

/// Implementation blocks for import types.
pub mod impls;

/// Placeholder constants and prefix substitution.
#[allow(clippy::module_inception)]
pub mod import;

/// Quote-aware statement splitter.
pub mod splitter;

/// Import data structures.
pub mod structs;

/// Collaborator traits (diagnostics sink, networked importer).
pub mod traits;
