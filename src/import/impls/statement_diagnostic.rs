use std::fmt;
use std::fmt::Formatter;
use crate::database::database::driver_message;
use crate::import::structs::statement_diagnostic::StatementDiagnostic;

impl StatementDiagnostic {
    pub fn new(position: usize, statement: &str, message: &str) -> StatementDiagnostic {
        StatementDiagnostic {
            position,
            statement: statement.to_string(),
            message: message.to_string(),
        }
    }

    pub fn from_sqlx(position: usize, statement: &str, error: &sqlx::Error) -> StatementDiagnostic {
        StatementDiagnostic::new(position, statement, &driver_message(error))
    }
}

impl fmt::Display for StatementDiagnostic {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "SQL execution error (#{}): {} SQL: {}", self.position, self.message, self.statement)
    }
}
