//! # acg-import
//!
//! SQL dump importer used by the shop installer to bring a database schema
//! and its seed data up to date.
//!
//! ## Overview
//!
//! A dump file is read once, its `__PREFIX__` placeholders are replaced with
//! the configured table prefix, and the resulting statements are applied to
//! one of two backends:
//!
//! - **SQLite**: the dump is split into statements and executed inside one
//!   transaction. Statements that fail are logged and skipped, and the
//!   transaction is committed regardless.
//! - **MySQL/MariaDB**: the dump is staged to a working file and handed to a
//!   pluggable networked importer, which streams it to the server.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use acg_import::config::structs::configuration::Configuration;
//! use acg_import::import::structs::sql_importer::SqlImporter;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let target = config.database.import_target();
//! let summary = SqlImporter::default().import(Path::new("install.sql"), &target).await?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and shared error types
//! - [`config`] - Configuration management and TOML parsing
//! - [`database`] - SQLite and MySQL connectors
//! - [`import`] - Dump sources, statement splitting and the import engine
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
///
/// Contains the logging setup and the generic error type used while
/// bootstrapping the binary.
pub mod common;

/// Configuration management module.
///
/// Handles loading, saving and validating the TOML configuration that
/// describes the import target.
pub mod config;

/// Database backend module.
///
/// Provides the SQLite executor used for file databases and the MySQL
/// connector backing the default networked importer.
pub mod database;

/// SQL import engine.
///
/// Reads dump files, applies prefix substitution, splits statements and
/// dispatches the batch to the selected backend.
pub mod import;

/// CLI argument parsing.
pub mod structs;
