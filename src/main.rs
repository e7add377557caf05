use std::path::Path;
use std::process::exit;
use clap::Parser;
use log::{error, info, warn};
use tokio::runtime::Builder;
use acg_import::common::common::setup_logging;
use acg_import::config::structs::configuration::Configuration;
use acg_import::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use acg_import::import::structs::sql_importer::SqlImporter;
use acg_import::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let mut target = config.database.import_target();
    if let Some(engine) = args.engine {
        target.engine = engine;
    }
    if let Some(prefix) = &args.prefix {
        if let Err(e) = Configuration::validate_prefix(prefix) {
            error!("[BOOT] {}", e);
            exit(101);
        }
        target.prefix = prefix.clone();
    }

    if args.import.is_none() && !args.inspect {
        warn!("[BOOT] Nothing to do, start this app using '--import <dump>' or '--inspect' as parameter.");
        return Ok(());
    }

    Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            if let Some(dump) = &args.import {
                let importer = SqlImporter::default();
                match importer.import(Path::new(dump), &target).await {
                    Ok(summary) => {
                        info!(
                            "[IMPORT] Finished {}: {} statements, {} applied, {} failed",
                            dump, summary.attempted, summary.applied, summary.failed
                        );
                    }
                    Err(e) => {
                        error!("[IMPORT] {}", e);
                        exit(1);
                    }
                }
            }

            if args.inspect {
                if !target.is_file_engine() {
                    error!("[INSPECT] Only sqlite3 databases can be inspected");
                    exit(1);
                }
                match DatabaseConnectorSQLite::inspect_target(&target).await {
                    Ok(report) => match serde_json::to_string_pretty(&report) {
                        Ok(json) => println!("{}", json),
                        Err(e) => {
                            error!("[INSPECT] {}", e);
                            exit(1);
                        }
                    },
                    Err(e) => {
                        error!("[INSPECT] {}", e);
                        exit(1);
                    }
                }
            }
        });

    Ok(())
}
