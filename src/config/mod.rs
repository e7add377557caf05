//! Configuration management module.
//!
//! Loads, saves and validates the importer configuration (`config.toml`).
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **database**: engine, SQLite file path or MySQL host/port, database
//!   name, credentials, table prefix and staging directory
//! - **database.pragma**: SQLite pragmas applied to every connection
//!
//! # Example
//!
//! ```rust,ignore
//! use acg_import::config::structs::configuration::Configuration;
//!
//! // Load configuration, creating a default file when missing
//! let config = Configuration::load_from_file("config.toml", true)?;
//! let target = config.database.import_target();
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
