//! Collaborator traits for the import engine.

/// Sink for recovered statement failures.
pub mod diagnostic_log;

/// Adapter executing a staged dump against a networked server.
pub mod networked_importer;
