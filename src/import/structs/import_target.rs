use std::path::PathBuf;
use crate::config::structs::pragma_config::PragmaConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

#[derive(Clone, PartialEq)]
pub struct ImportTarget {
    pub engine: DatabaseDrivers,
    pub path: PathBuf,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: String,
    pub password: String,
    pub prefix: String,
    pub temp_dir: PathBuf,
    pub pragma: PragmaConfig,
}
