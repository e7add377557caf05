use std::path::Path;
use async_trait::async_trait;
use log::error;
use crate::database::database::driver_message;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::mysql_dump_importer::MySqlDumpImporter;
use crate::import::enums::import_error::ImportError;
use crate::import::splitter::split_with;
use crate::import::structs::import_target::ImportTarget;
use crate::import::structs::split_options::SplitOptions;
use crate::import::traits::networked_importer::NetworkedImporter;

#[async_trait]
impl NetworkedImporter for MySqlDumpImporter {
    async fn run(&self, source: &Path, target: &ImportTarget) -> Result<u64, ImportError> {
        let text = match tokio::fs::read_to_string(source).await {
            Ok(text) => text,
            Err(e) => {
                return Err(ImportError::SourceUnreadable { path: source.to_path_buf(), source: e });
            }
        };
        let batch = split_with(&text, SplitOptions::mysql());
        let connector = match DatabaseConnectorMySQL::create(target).await {
            Ok(connector) => connector,
            Err(e) => {
                error!("[MySQL] Unable to connect to MySQL on {}:{}", target.host, target.port);
                return Err(ImportError::Connection(driver_message(&e)));
            }
        };
        let result = connector.execute_batch(&batch).await;
        connector.close().await;
        result.map_err(|e| ImportError::Delegate(driver_message(&e)))
    }
}
