use std::slice::Iter;
use crate::import::structs::statement_batch::StatementBatch;

impl StatementBatch {
    /// Appends `fragment` trimmed, unless nothing but whitespace is left.
    pub fn push(&mut self, fragment: &str) {
        let trimmed = fragment.trim();
        if !trimmed.is_empty() {
            self.statements.push(trimmed.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String> {
        self.statements.iter()
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }
}

impl<'a> IntoIterator for &'a StatementBatch {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
