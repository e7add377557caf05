//! Database connector structures.

/// SQLite connector used for the file-engine import path.
pub mod database_connector_sqlite;

/// MySQL/MariaDB connector used by the default networked importer.
pub mod database_connector_mysql;

/// Default networked importer streaming a staged dump to MySQL.
pub mod mysql_dump_importer;

/// Pragma and table overview of a SQLite database.
pub mod schema_report;
