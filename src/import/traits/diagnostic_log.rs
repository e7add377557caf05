use crate::import::structs::statement_diagnostic::StatementDiagnostic;

pub trait DiagnosticLog: Send + Sync {
    fn record(&self, diagnostic: &StatementDiagnostic);
}
