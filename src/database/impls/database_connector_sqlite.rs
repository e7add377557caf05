use std::time::Duration;
use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePoolOptions};
use sqlx::{ConnectOptions, Error};
use crate::database::database::driver_message;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::structs::schema_report::SchemaReport;
use crate::import::enums::import_error::ImportError;
use crate::import::import::is_transaction_control;
use crate::import::structs::dump_source::PreparedDump;
use crate::import::structs::import_summary::ImportSummary;
use crate::import::structs::import_target::ImportTarget;
use crate::import::structs::split_options::SplitOptions;
use crate::import::structs::statement_batch::StatementBatch;
use crate::import::structs::statement_diagnostic::StatementDiagnostic;
use crate::import::traits::diagnostic_log::DiagnosticLog;

const LOG_PREFIX: &str = "[SQLite]";
const TRANSACTION_CONTROL_SKIPPED: &str = "transaction control statement skipped, the import runs in its own transaction";

impl DatabaseConnectorSQLite {
    /// Connection options for an existing database file, with the target's
    /// pragmas applied on every connection.
    pub fn connect_options(target: &ImportTarget) -> SqliteConnectOptions {
        let mut options = SqliteConnectOptions::new()
            .filename(&target.path)
            .create_if_missing(false)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        for (pragma, value) in target.pragma.pragmas() {
            options = options.pragma(pragma, value);
        }
        options
    }

    #[tracing::instrument(level = "debug")]
    pub async fn create(target: &ImportTarget) -> Result<DatabaseConnectorSQLite, Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(DatabaseConnectorSQLite::connect_options(target))
            .await?;
        Ok(DatabaseConnectorSQLite { pool })
    }

    /// Opens the target file and connects, refusing to create a database
    /// that does not exist yet.
    pub async fn open(target: &ImportTarget) -> Result<DatabaseConnectorSQLite, ImportError> {
        if !target.path.is_file() {
            error!("{} Database file {} does not exist", LOG_PREFIX, target.path.display());
            return Err(ImportError::MissingTarget(target.path.clone()));
        }
        match DatabaseConnectorSQLite::create(target).await {
            Ok(connector) => Ok(connector),
            Err(e) => {
                let message = driver_message(&e);
                error!("{} Unable to connect to SQLite on {}", LOG_PREFIX, target.path.display());
                error!("{} Message: {}", LOG_PREFIX, message);
                Err(ImportError::Connection(message))
            }
        }
    }

    /// Applies a prepared dump to the SQLite file of `target`.
    ///
    /// Statement failures are recorded through `diagnostics` and skipped; the
    /// transaction is committed once every statement has been attempted.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %target.path.display()))]
    pub async fn import_dump(
        dump: &PreparedDump,
        target: &ImportTarget,
        diagnostics: &dyn DiagnosticLog,
    ) -> Result<ImportSummary, ImportError> {
        let connector = DatabaseConnectorSQLite::open(target).await?;
        let batch = dump.split(SplitOptions::sqlite());
        info!("{} Executing {} statements from {}", LOG_PREFIX, batch.len(), dump.path().display());
        let result = connector.execute_batch(&batch, diagnostics).await;
        connector.close().await;
        result
    }

    /// Runs the batch inside one transaction on a single connection.
    ///
    /// Transaction control statements of the dump are skipped and recorded.
    /// When a failing statement makes SQLite roll the transaction back, a new
    /// one is started for the remaining statements.
    pub async fn execute_batch(
        &self,
        batch: &StatementBatch,
        diagnostics: &dyn DiagnosticLog,
    ) -> Result<ImportSummary, ImportError> {
        let mut connection = match self.pool.acquire().await {
            Ok(connection) => connection,
            Err(e) => {
                error!("{} Unable to acquire connection: {}", LOG_PREFIX, e);
                return Err(ImportError::Connection(driver_message(&e)));
            }
        };
        DatabaseConnectorSQLite::begin(&mut connection).await?;
        let mut summary = ImportSummary::default();
        let mut pending = 0u64;
        for (index, statement) in batch.iter().enumerate() {
            let position = index + 1;
            summary.attempted += 1;
            if is_transaction_control(statement) {
                summary.skipped += 1;
                diagnostics.record(&StatementDiagnostic::new(position, statement, TRANSACTION_CONTROL_SKIPPED));
                continue;
            }
            match sqlx::raw_sql(statement).execute(&mut *connection).await {
                Ok(_) => pending += 1,
                Err(e) => {
                    summary.failed += 1;
                    diagnostics.record(&StatementDiagnostic::from_sqlx(position, statement, &e));
                    // BEGIN only succeeds when the failure ended the transaction.
                    if sqlx::raw_sql("BEGIN").execute(&mut *connection).await.is_ok() {
                        warn!(
                            "{} Statement #{} rolled back the transaction, {} earlier statements were undone",
                            LOG_PREFIX, position, pending
                        );
                        summary.rolled_back += pending;
                        pending = 0;
                    }
                }
            }
            if summary.attempted % 1000 == 0 {
                info!("{} Handled {} statements", LOG_PREFIX, summary.attempted);
            }
        }
        DatabaseConnectorSQLite::commit(&mut connection).await?;
        summary.applied = pending;
        info!(
            "{} Handled {} statements, {} applied, {} failed, {} skipped, {} rolled back",
            LOG_PREFIX, summary.attempted, summary.applied, summary.failed, summary.skipped, summary.rolled_back
        );
        Ok(summary)
    }

    pub async fn begin(connection: &mut SqliteConnection) -> Result<(), ImportError> {
        match sqlx::raw_sql("BEGIN").execute(&mut *connection).await {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("{} Unable to begin transaction: {}", LOG_PREFIX, e);
                Err(ImportError::Connection(driver_message(&e)))
            }
        }
    }

    pub async fn commit(connection: &mut SqliteConnection) -> Result<(), ImportError> {
        match sqlx::raw_sql("COMMIT").execute(&mut *connection).await {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("{} Error: {}", LOG_PREFIX, e);
                Err(ImportError::Connection(driver_message(&e)))
            }
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn inspect(&self, prefix: &str) -> Result<SchemaReport, Error> {
        let journal_mode: String = sqlx::query_scalar("PRAGMA journal_mode")
            .fetch_one(&self.pool)
            .await?;
        let foreign_keys: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(&self.pool)
            .await?;
        let cache_size: i64 = sqlx::query_scalar("PRAGMA cache_size")
            .fetch_one(&self.pool)
            .await?;
        let synchronous: i64 = sqlx::query_scalar("PRAGMA synchronous")
            .fetch_one(&self.pool)
            .await?;
        let tables: Vec<String> =
            sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
                .fetch_all(&self.pool)
                .await?;
        Ok(SchemaReport {
            path: String::new(),
            journal_mode,
            foreign_keys: foreign_keys == 1,
            cache_size,
            synchronous,
            tables: tables.into_iter().filter(|name| name.starts_with(prefix)).collect(),
        })
    }

    /// Connects to the target file and reports its pragmas and the tables
    /// carrying the target's prefix.
    pub async fn inspect_target(target: &ImportTarget) -> Result<SchemaReport, ImportError> {
        let connector = DatabaseConnectorSQLite::open(target).await?;
        let result = connector.inspect(&target.prefix).await;
        connector.close().await;
        match result {
            Ok(mut report) => {
                report.path = target.path.display().to_string();
                Ok(report)
            }
            Err(e) => {
                error!("{} Error: {}", LOG_PREFIX, e);
                Err(ImportError::Connection(driver_message(&e)))
            }
        }
    }
}
