use std::sync::Arc;
use crate::import::traits::diagnostic_log::DiagnosticLog;
use crate::import::traits::networked_importer::NetworkedImporter;

#[derive(Clone)]
pub struct SqlImporter {
    pub(crate) diagnostics: Arc<dyn DiagnosticLog>,
    pub(crate) networked: Arc<dyn NetworkedImporter>,
}
