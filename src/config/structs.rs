//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Import target connection settings.
pub mod database_config;

/// SQLite pragma settings.
pub mod pragma_config;
