use parking_lot::Mutex;
use crate::import::structs::statement_diagnostic::StatementDiagnostic;

#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    pub(crate) entries: Mutex<Vec<StatementDiagnostic>>,
}
