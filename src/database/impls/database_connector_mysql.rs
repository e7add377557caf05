use std::time::Duration;
use log::{error, info};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{ConnectOptions, Error, Executor};
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::import::structs::import_target::ImportTarget;
use crate::import::structs::statement_batch::StatementBatch;

const LOG_PREFIX: &str = "[MySQL]";

impl DatabaseConnectorMySQL {
    pub fn connect_options(target: &ImportTarget) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&target.host)
            .port(target.port)
            .database(&target.name)
            .username(&target.username)
            .password(&target.password)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1))
    }

    #[tracing::instrument(level = "debug")]
    pub async fn create(target: &ImportTarget) -> Result<DatabaseConnectorMySQL, Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect_with(DatabaseConnectorMySQL::connect_options(target))
            .await?;
        Ok(DatabaseConnectorMySQL { pool })
    }

    /// Executes the batch in order on a single connection, stopping at the
    /// first failing statement.
    pub async fn execute_batch(&self, batch: &StatementBatch) -> Result<u64, Error> {
        let mut connection = self.pool.acquire().await?;
        let mut handled = 0u64;
        for statement in batch.iter() {
            if let Err(e) = Executor::execute(&mut *connection, statement.as_str()).await {
                error!("{} Error: {}", LOG_PREFIX, e);
                error!("{} Statement #{}: {}", LOG_PREFIX, handled + 1, statement);
                return Err(e);
            }
            handled += 1;
            if handled % 1000 == 0 {
                info!("{} Handled {} statements", LOG_PREFIX, handled);
            }
        }
        info!("{} Handled {} statements", LOG_PREFIX, handled);
        Ok(handled)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
