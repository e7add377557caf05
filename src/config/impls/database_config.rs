use std::path::PathBuf;
use crate::config::structs::database_config::DatabaseConfig;
use crate::import::structs::import_target::ImportTarget;

impl DatabaseConfig {
    pub fn import_target(&self) -> ImportTarget {
        ImportTarget {
            engine: self.engine,
            path: PathBuf::from(&self.path),
            host: self.host.clone(),
            port: self.port,
            name: self.name.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            prefix: self.prefix.clone(),
            temp_dir: PathBuf::from(&self.temp_dir),
            pragma: self.pragma.clone(),
        }
    }
}
