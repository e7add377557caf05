use std::path::Path;
use async_trait::async_trait;
use crate::import::enums::import_error::ImportError;
use crate::import::structs::import_target::ImportTarget;

/// Executes a staged, prefix-substituted dump file against a networked server.
///
/// Returns the number of statements executed. Any error is reported back to
/// the caller as `ImportError::Delegate`.
#[async_trait]
pub trait NetworkedImporter: Send + Sync {
    async fn run(&self, source: &Path, target: &ImportTarget) -> Result<u64, ImportError>;
}
