#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementDiagnostic {
    /// 1-based position of the statement in its batch.
    pub position: usize,
    pub statement: String,
    pub message: String,
}
