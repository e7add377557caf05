//! Database enumeration types.

/// Supported database driver types (sqlite3, mysql).
pub mod database_drivers;
