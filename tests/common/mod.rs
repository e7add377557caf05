#![allow(dead_code)]
use std::fs;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use parking_lot::Mutex;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;
use tokio::net::TcpListener;
use acg_import::config::structs::configuration::Configuration;
use acg_import::database::enums::database_drivers::DatabaseDrivers;
use acg_import::import::enums::import_error::ImportError;
use acg_import::import::structs::import_target::ImportTarget;
use acg_import::import::traits::networked_importer::NetworkedImporter;

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// SQLite target pointing at an empty, existing database file inside `dir`.
pub fn create_sqlite_target(dir: &Path) -> ImportTarget {
    let path = dir.join("database.sqlite");
    fs::File::create(&path).expect("Failed to create database file");
    let mut target = Configuration::init().database.import_target();
    target.engine = DatabaseDrivers::sqlite3;
    target.path = path;
    target.temp_dir = dir.join("runtime").join("tmp");
    target
}

pub fn create_mysql_target(dir: &Path) -> ImportTarget {
    let mut target = Configuration::init().database.import_target();
    target.engine = DatabaseDrivers::mysql;
    target.temp_dir = dir.join("runtime").join("tmp");
    target
}

pub fn write_dump(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write dump file");
    path
}

pub async fn query_scalar_i64(database: &Path, sql: &str) -> i64 {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().filename(database))
        .await
        .expect("Failed to open database");
    let value: i64 = sqlx::query_scalar(sql)
        .fetch_one(&pool)
        .await
        .expect("Failed to run query");
    pool.close().await;
    value
}

pub async fn query_strings(database: &Path, sql: &str) -> Vec<String> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().filename(database))
        .await
        .expect("Failed to open database");
    let values: Vec<String> = sqlx::query_scalar(sql)
        .fetch_all(&pool)
        .await
        .expect("Failed to run query");
    pool.close().await;
    values
}

/// Listens on a free local port and closes every connection right away, so a
/// client fails during its handshake instead of waiting for a server.
pub async fn spawn_closing_server() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind listener");
    let port = listener.local_addr().expect("Failed to read local address").port();
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            drop(socket);
        }
    });
    port
}

#[derive(Debug, Clone)]
pub struct StagedRun {
    pub source: PathBuf,
    pub existed: bool,
    pub contents: String,
    pub prefix: String,
}

/// Networked importer double that records what it was handed instead of
/// talking to a server.
#[derive(Debug, Default)]
pub struct FakeNetworkedImporter {
    pub runs: Mutex<Vec<StagedRun>>,
    pub failure: Option<FakeFailure>,
}

#[derive(Debug, Clone)]
pub enum FakeFailure {
    Delegate(String),
    Connection(String),
}

impl FakeNetworkedImporter {
    pub fn new() -> FakeNetworkedImporter {
        FakeNetworkedImporter::default()
    }

    pub fn failing(failure: FakeFailure) -> FakeNetworkedImporter {
        FakeNetworkedImporter { runs: Mutex::new(Vec::new()), failure: Some(failure) }
    }

    pub fn runs(&self) -> Vec<StagedRun> {
        self.runs.lock().clone()
    }
}

#[async_trait]
impl NetworkedImporter for FakeNetworkedImporter {
    async fn run(&self, source: &Path, target: &ImportTarget) -> Result<u64, ImportError> {
        let existed = source.exists();
        let contents = fs::read_to_string(source).unwrap_or_default();
        let statements = contents.matches(';').count() as u64;
        self.runs.lock().push(StagedRun {
            source: source.to_path_buf(),
            existed,
            contents,
            prefix: target.prefix.clone(),
        });
        match &self.failure {
            None => Ok(statements),
            Some(FakeFailure::Delegate(message)) => Err(ImportError::Delegate(message.clone())),
            Some(FakeFailure::Connection(message)) => Err(ImportError::Connection(message.clone())),
        }
    }
}
