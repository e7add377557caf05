mod common;

use std::fs;
use std::sync::Arc;
use acg_import::database::enums::database_drivers::DatabaseDrivers;
use acg_import::database::structs::mysql_dump_importer::MySqlDumpImporter;
use acg_import::import::enums::import_error::ImportError;
use acg_import::import::structs::dump_source::DumpSource;
use acg_import::import::structs::import_summary::ImportSummary;
use acg_import::import::structs::memory_diagnostics::MemoryDiagnostics;
use acg_import::import::structs::sql_importer::SqlImporter;
use common::{FakeFailure, FakeNetworkedImporter};

fn importer_with(networked: Arc<FakeNetworkedImporter>) -> SqlImporter {
    SqlImporter::new(Arc::new(MemoryDiagnostics::new()), networked)
}

#[tokio::test]
async fn test_networked_import_stages_and_removes_dump() {
    let temp_dir = common::create_temp_dir();
    let target = common::create_mysql_target(temp_dir.path());
    let dump = common::write_dump(
        temp_dir.path(),
        "install.sql",
        "CREATE TABLE `__PREFIX__user` (`id` INT);\nINSERT INTO `__PREFIX__user` VALUES (1);\n",
    );
    let networked = Arc::new(FakeNetworkedImporter::new());
    let importer = importer_with(networked.clone());

    let summary = importer.import(&dump, &target).await.expect("networked import should succeed");

    let runs = networked.runs();
    assert_eq!(runs.len(), 1);
    let staged = &runs[0].source;
    assert_eq!(staged, &target.temp_dir.join("install.sql.process"));
    assert!(runs[0].existed);
    assert_eq!(
        runs[0].contents,
        "CREATE TABLE `acg_user` (`id` INT);\nINSERT INTO `acg_user` VALUES (1);\n"
    );
    assert_eq!(runs[0].prefix, "acg_");
    assert!(!staged.exists());
    assert_eq!(summary, ImportSummary { attempted: 2, applied: 2, failed: 0, ..ImportSummary::default() });
}

#[tokio::test]
async fn test_networked_failure_keeps_staged_dump() {
    let temp_dir = common::create_temp_dir();
    let target = common::create_mysql_target(temp_dir.path());
    let dump = common::write_dump(temp_dir.path(), "install.sql", "CREATE TABLE __PREFIX__a (id INT);");
    let networked = Arc::new(FakeNetworkedImporter::failing(FakeFailure::Delegate(
        String::from("Table 'acg_a' already exists"),
    )));
    let importer = importer_with(networked.clone());

    let result = importer.import(&dump, &target).await;

    match result {
        Err(ImportError::Delegate(message)) => assert_eq!(message, "Table 'acg_a' already exists"),
        other => panic!("expected Delegate, got {:?}", other),
    }
    let staged = target.temp_dir.join("install.sql.process");
    assert!(staged.is_file());
    assert_eq!(fs::read_to_string(&staged).unwrap(), "CREATE TABLE acg_a (id INT);");
}

#[tokio::test]
async fn test_networked_other_errors_are_wrapped_as_delegate() {
    let temp_dir = common::create_temp_dir();
    let target = common::create_mysql_target(temp_dir.path());
    let dump = common::write_dump(temp_dir.path(), "install.sql", "SELECT 1;");
    let networked = Arc::new(FakeNetworkedImporter::failing(FakeFailure::Connection(
        String::from("Access denied for user 'root'"),
    )));
    let importer = importer_with(networked);

    let result = importer.import(&dump, &target).await;

    match result {
        Err(ImportError::Delegate(message)) => assert_eq!(message, "Access denied for user 'root'"),
        other => panic!("expected Delegate, got {:?}", other),
    }
}

#[tokio::test]
async fn test_networked_import_creates_nested_temp_dir() {
    let temp_dir = common::create_temp_dir();
    let mut target = common::create_mysql_target(temp_dir.path());
    target.temp_dir = temp_dir.path().join("runtime").join("tmp").join("nested");
    let dump = common::write_dump(temp_dir.path(), "install.sql", "SELECT 1;");
    let networked = Arc::new(FakeNetworkedImporter::new());
    let importer = importer_with(networked.clone());

    importer.import(&dump, &target).await.expect("networked import should succeed");

    assert!(target.temp_dir.is_dir());
    assert_eq!(networked.runs().len(), 1);
}

#[tokio::test]
async fn test_stage_fails_when_temp_dir_is_a_file() {
    let temp_dir = common::create_temp_dir();
    let mut target = common::create_mysql_target(temp_dir.path());
    target.temp_dir = common::write_dump(temp_dir.path(), "blocker", "not a directory");
    let dump = common::write_dump(temp_dir.path(), "install.sql", "SELECT 1;");
    let networked = Arc::new(FakeNetworkedImporter::new());
    let importer = importer_with(networked.clone());

    let result = importer.import(&dump, &target).await;

    assert!(matches!(result, Err(ImportError::Permission { .. })));
    assert!(networked.runs().is_empty());
}

#[tokio::test]
async fn test_stage_writes_substituted_text() {
    let temp_dir = common::create_temp_dir();
    let prepared = DumpSource::from_text("schema/Install.sql", "DROP TABLE IF EXISTS __PREFIX__x;")
        .substitute("shop_");
    let staging = temp_dir.path().join("staging");

    let staged = SqlImporter::stage(&prepared, &staging).await.expect("stage should succeed");

    assert_eq!(staged, staging.join("Install.sql.process"));
    assert_eq!(fs::read_to_string(&staged).unwrap(), "DROP TABLE IF EXISTS shop_x;");
}

#[tokio::test]
async fn test_default_engine_uses_networked_importer() {
    let temp_dir = common::create_temp_dir();
    let mut target = common::create_mysql_target(temp_dir.path());
    target.engine = DatabaseDrivers::default();
    let dump = common::write_dump(temp_dir.path(), "install.sql", "SELECT 1;");
    let networked = Arc::new(FakeNetworkedImporter::new());
    let importer = importer_with(networked.clone());

    importer.import(&dump, &target).await.expect("networked import should succeed");

    assert_eq!(networked.runs().len(), 1);
}

#[tokio::test]
async fn test_sqlite_engine_skips_networked_importer() {
    let temp_dir = common::create_temp_dir();
    let target = common::create_sqlite_target(temp_dir.path());
    let dump = common::write_dump(temp_dir.path(), "install.sql", "CREATE TABLE __PREFIX__a (id INTEGER);");
    let networked = Arc::new(FakeNetworkedImporter::new());
    let importer = importer_with(networked.clone());

    importer.import(&dump, &target).await.expect("sqlite import should succeed");

    assert!(networked.runs().is_empty());
    assert!(!target.temp_dir.exists());
}

#[tokio::test]
async fn test_empty_dump_is_not_staged() {
    let temp_dir = common::create_temp_dir();
    let target = common::create_mysql_target(temp_dir.path());
    let dump = common::write_dump(temp_dir.path(), "install.sql", "");
    let networked = Arc::new(FakeNetworkedImporter::new());
    let importer = importer_with(networked.clone());

    let summary = importer.import(&dump, &target).await.expect("empty dump should be a no-op");

    assert_eq!(summary, ImportSummary::default());
    assert!(networked.runs().is_empty());
    assert!(!target.temp_dir.exists());
}

#[tokio::test]
async fn test_mysql_importer_failure_keeps_staged_dump() {
    let temp_dir = common::create_temp_dir();
    let mut target = common::create_mysql_target(temp_dir.path());
    target.host = String::from("127.0.0.1");
    target.port = common::spawn_closing_server().await;
    let dump = common::write_dump(temp_dir.path(), "install.sql", "CREATE TABLE `__PREFIX__a` (`id` INT);");
    let importer = SqlImporter::new(Arc::new(MemoryDiagnostics::new()), Arc::new(MySqlDumpImporter));

    let result = importer.import(&dump, &target).await;

    match result {
        Err(ImportError::Delegate(message)) => assert!(!message.is_empty()),
        other => panic!("expected Delegate, got {:?}", other),
    }
    let staged = target.temp_dir.join("install.sql.process");
    assert!(staged.is_file());
    assert_eq!(fs::read_to_string(&staged).unwrap(), "CREATE TABLE `acg_a` (`id` INT);");
}
