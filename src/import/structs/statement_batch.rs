#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementBatch {
    pub(crate) statements: Vec<String>,
}
