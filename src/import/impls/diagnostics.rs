use log::error;
use crate::import::structs::log_diagnostics::LogDiagnostics;
use crate::import::structs::memory_diagnostics::MemoryDiagnostics;
use crate::import::structs::statement_diagnostic::StatementDiagnostic;
use crate::import::traits::diagnostic_log::DiagnosticLog;

impl DiagnosticLog for LogDiagnostics {
    fn record(&self, diagnostic: &StatementDiagnostic) {
        error!("[IMPORT] {}", diagnostic);
    }
}

impl MemoryDiagnostics {
    pub fn new() -> MemoryDiagnostics {
        MemoryDiagnostics::default()
    }

    pub fn entries(&self) -> Vec<StatementDiagnostic> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl DiagnosticLog for MemoryDiagnostics {
    fn record(&self, diagnostic: &StatementDiagnostic) {
        self.entries.lock().push(diagnostic.clone());
    }
}
