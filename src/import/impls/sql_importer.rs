use std::path::{Path, PathBuf};
use std::sync::Arc;
use log::{error, info, warn};
use tokio::fs::DirBuilder;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::structs::mysql_dump_importer::MySqlDumpImporter;
use crate::import::enums::import_error::ImportError;
use crate::import::structs::dump_source::{DumpSource, PreparedDump};
use crate::import::structs::import_summary::ImportSummary;
use crate::import::structs::import_target::ImportTarget;
use crate::import::structs::log_diagnostics::LogDiagnostics;
use crate::import::structs::sql_importer::SqlImporter;
use crate::import::traits::diagnostic_log::DiagnosticLog;
use crate::import::traits::networked_importer::NetworkedImporter;

const LOG_PREFIX: &str = "[IMPORT]";

impl Default for SqlImporter {
    fn default() -> Self {
        SqlImporter::new(Arc::new(LogDiagnostics), Arc::new(MySqlDumpImporter))
    }
}

impl SqlImporter {
    pub fn new(diagnostics: Arc<dyn DiagnosticLog>, networked: Arc<dyn NetworkedImporter>) -> SqlImporter {
        SqlImporter { diagnostics, networked }
    }

    /// Reads the dump at `dump_path`, substitutes the target's prefix and
    /// applies it to the backend selected by `target.engine`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn import(&self, dump_path: &Path, target: &ImportTarget) -> Result<ImportSummary, ImportError> {
        info!("{} Importing {} into {:?}", LOG_PREFIX, dump_path.display(), target.engine);
        let dump = DumpSource::read(dump_path)?.substitute(&target.prefix);
        self.import_prepared(&dump, target).await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(engine = ?target.engine))]
    pub async fn import_prepared(&self, dump: &PreparedDump, target: &ImportTarget) -> Result<ImportSummary, ImportError> {
        if dump.is_empty() {
            info!("{} Dump {} is empty, nothing to import", LOG_PREFIX, dump.path().display());
            return Ok(ImportSummary::default());
        }
        match target.engine {
            DatabaseDrivers::sqlite3 => self.import_file(dump, target).await,
            DatabaseDrivers::mysql => self.import_networked(dump, target).await,
        }
    }

    pub async fn import_file(&self, dump: &PreparedDump, target: &ImportTarget) -> Result<ImportSummary, ImportError> {
        DatabaseConnectorSQLite::import_dump(dump, target, self.diagnostics.as_ref()).await
    }

    pub async fn import_networked(&self, dump: &PreparedDump, target: &ImportTarget) -> Result<ImportSummary, ImportError> {
        let staged = SqlImporter::stage(dump, &target.temp_dir).await?;
        info!("{} Staged dump at {}", LOG_PREFIX, staged.display());
        match self.networked.run(&staged, target).await {
            Ok(executed) => {
                if let Err(e) = tokio::fs::remove_file(&staged).await {
                    warn!("{} Unable to remove staged dump {}: {}", LOG_PREFIX, staged.display(), e);
                }
                info!("{} Executed {} statements on {}:{}", LOG_PREFIX, executed, target.host, target.port);
                Ok(ImportSummary { attempted: executed, applied: executed, ..ImportSummary::default() })
            }
            Err(error) => {
                let message = match error {
                    ImportError::Delegate(message) | ImportError::Connection(message) => message,
                    other => other.to_string(),
                };
                error!("{} Networked import failed: {}", LOG_PREFIX, message);
                error!("{} Staged dump kept at {}", LOG_PREFIX, staged.display());
                Err(ImportError::Delegate(message))
            }
        }
    }

    /// Writes the prepared dump to `<temp_dir>/<dump file name>.process`,
    /// creating `temp_dir` (mode 0777 on unix) when it does not exist.
    pub async fn stage(dump: &PreparedDump, temp_dir: &Path) -> Result<PathBuf, ImportError> {
        if !temp_dir.is_dir() {
            let mut builder = DirBuilder::new();
            builder.recursive(true);
            #[cfg(unix)]
            builder.mode(0o777);
            if let Err(source) = builder.create(temp_dir).await {
                return Err(ImportError::Permission { path: temp_dir.to_path_buf(), source });
            }
        }
        let staged = temp_dir.join(dump.staged_file_name());
        match tokio::fs::write(&staged, dump.text()).await {
            Ok(_) => Ok(staged),
            Err(source) => Err(ImportError::Permission { path: staged, source }),
        }
    }
}
