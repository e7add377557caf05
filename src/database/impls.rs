//! Implementation blocks for database connectors.

pub mod database_connector_sqlite;
pub mod database_connector_mysql;
pub mod mysql_dump_importer;
