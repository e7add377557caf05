use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("SQLite database file does not exist: {}", .0.display())]
    MissingTarget(PathBuf),

    #[error("No write permission on {}, check the permissions: {source}", path.display())]
    Permission {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to read dump file {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Database error, reason: {0}")]
    Connection(String),

    #[error("Database import failed, reason: {0}")]
    Delegate(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_missing_target_display() {
        let error = ImportError::MissingTarget(PathBuf::from("database/database.sqlite"));
        assert_eq!(
            format!("{}", error),
            "SQLite database file does not exist: database/database.sqlite"
        );
    }

    #[test]
    fn test_permission_display() {
        let error = ImportError::Permission {
            path: PathBuf::from("runtime/tmp"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            format!("{}", error),
            "No write permission on runtime/tmp, check the permissions: denied"
        );
    }

    #[test]
    fn test_connection_display() {
        let error = ImportError::Connection("unable to open database file".to_string());
        assert_eq!(format!("{}", error), "Database error, reason: unable to open database file");
    }

    #[test]
    fn test_delegate_display() {
        let error = ImportError::Delegate("Access denied for user 'root'".to_string());
        assert_eq!(
            format!("{}", error),
            "Database import failed, reason: Access denied for user 'root'"
        );
    }

    #[test]
    fn test_error_source_is_kept() {
        use std::error::Error as _;
        let error = ImportError::SourceUnreadable {
            path: PathBuf::from("install.sql"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(error.source().is_some());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("SourceUnreadable"));
    }
}
