use clap::Parser;
use crate::database::enums::database_drivers::DatabaseDrivers;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// SQL dump to import into the configured database.
    #[arg(long)]
    pub import: Option<String>,
    /// Override the configured database engine.
    #[arg(long, value_enum)]
    pub engine: Option<DatabaseDrivers>,
    /// Override the configured table prefix.
    #[arg(long)]
    pub prefix: Option<String>,
    /// Print pragma settings and prefixed tables of the SQLite database as JSON.
    #[arg(long)]
    pub inspect: bool
}
