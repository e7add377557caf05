use std::fs::File;
use std::io::Write;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::pragma_config::PragmaConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

static PREFIX_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9_]{0,30}$").unwrap());
static PRAGMA_KEYWORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]{1,16}$").unwrap());

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            database: DatabaseConfig {
                engine: DatabaseDrivers::sqlite3,
                path: String::from("database/database.sqlite"),
                host: String::from("127.0.0.1"),
                port: 3306,
                name: String::from("faka"),
                username: String::from("root"),
                password: String::new(),
                prefix: String::from("acg_"),
                temp_dir: String::from("runtime/tmp"),
                pragma: PragmaConfig {
                    temp_store: Some(String::from("MEMORY")),
                    mmap_size: Some(268435456),
                    ..PragmaConfig::default()
                },
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        match toml::to_string(config) {
            Ok(data) => Self::save_file(path, data),
            Err(e) => Err(ConfigurationError::SerializeError(e))
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new("will not create automatically config.toml file"));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {} and run again, exiting now...", path);
                        Err(CustomError::new("create config.toml file"))
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config.toml file"))
                    }
                };
            }
        };

        eprintln!("[VALIDATE] Validating configuration...");
        if let Err(e) = config.validate() {
            eprintln!("[VALIDATE] {}", e);
            return Err(CustomError::new(&e.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("Unknown log level: '{}'", self.log_level)));
        }
        Self::validate_prefix(&self.database.prefix)?;

        let pragma = &self.database.pragma;
        let keywords = [
            ("journal_mode", Some(pragma.journal_mode.as_str())),
            ("synchronous", Some(pragma.synchronous.as_str())),
            ("temp_store", pragma.temp_store.as_deref()),
        ];
        for (name, value) in keywords {
            if let Some(value) = value {
                if !PRAGMA_KEYWORD_PATTERN.is_match(value) {
                    return Err(ConfigurationError::ValidationError(format!("[DB: pragma] Invalid value for {}: '{}'", name, value)));
                }
            }
        }

        match self.database.engine {
            DatabaseDrivers::sqlite3 => {
                if self.database.path.is_empty() {
                    return Err(ConfigurationError::ValidationError(String::from("[DB: sqlite3] path must not be empty")));
                }
            }
            DatabaseDrivers::mysql => {
                if self.database.host.is_empty() || self.database.name.is_empty() {
                    return Err(ConfigurationError::ValidationError(String::from("[DB: mysql] host and name must not be empty")));
                }
                if self.database.port == 0 {
                    return Err(ConfigurationError::ValidationError(String::from("[DB: mysql] port must not be 0")));
                }
            }
        }
        if self.database.temp_dir.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("[DB] temp_dir must not be empty")));
        }
        Ok(())
    }

    pub fn validate_prefix(prefix: &str) -> Result<(), ConfigurationError> {
        if !PREFIX_PATTERN.is_match(prefix) {
            return Err(ConfigurationError::ValidationError(format!("[DB] Invalid table prefix: '{}'", prefix)));
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::init()
    }
}
