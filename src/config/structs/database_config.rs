use serde::{Deserialize, Serialize};
use crate::config::structs::pragma_config::PragmaConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub engine: DatabaseDrivers,
    pub path: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: String,
    pub password: String,
    pub prefix: String,
    pub temp_dir: String,
    #[serde(default)]
    pub pragma: PragmaConfig
}
