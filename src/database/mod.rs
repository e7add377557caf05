//! Database backend module.
//!
//! Holds the two executors the import engine can target:
//!
//! - **SQLite** (`sqlite3`): a local database file, updated in place inside a
//!   single transaction with best-effort statement execution.
//! - **MySQL/MariaDB** (`mysql`): a networked server, reached through the
//!   default networked importer.

#[allow(clippy::module_inception)]
pub mod database;
pub mod enums;
pub mod impls;
pub mod structs;
