use std::ffi::OsString;
use std::path::{Path, PathBuf};
use log::warn;
use crate::import::enums::import_error::ImportError;
use crate::import::import::{substitute_prefix, STAGED_SUFFIX};
use crate::import::splitter::split_with;
use crate::import::structs::dump_source::{DumpSource, PreparedDump};
use crate::import::structs::split_options::SplitOptions;
use crate::import::structs::statement_batch::StatementBatch;

impl DumpSource {
    /// Reads the dump at `path`. Bytes that are not valid UTF-8 are replaced
    /// with U+FFFD and a warning is logged.
    pub fn read(path: &Path) -> Result<DumpSource, ImportError> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(source) => return Err(ImportError::SourceUnreadable { path: path.to_path_buf(), source }),
        };
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "[IMPORT] Dump {} is not valid UTF-8 (first invalid byte at {}), invalid bytes are replaced",
                    path.display(),
                    e.utf8_error().valid_up_to()
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        Ok(DumpSource { path: path.to_path_buf(), text })
    }

    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> DumpSource {
        DumpSource { path: path.into(), text: text.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces every placeholder with `prefix`. Consumes the source so the
    /// substitution cannot be applied twice.
    pub fn substitute(self, prefix: &str) -> PreparedDump {
        PreparedDump {
            text: substitute_prefix(&self.text, prefix),
            path: self.path,
        }
    }
}

impl PreparedDump {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn split(&self, options: SplitOptions) -> StatementBatch {
        split_with(&self.text, options)
    }

    /// File name used when the dump is staged, e.g. `install.sql.process`.
    pub fn staged_file_name(&self) -> OsString {
        let mut name = match self.path.file_name() {
            Some(name) => name.to_os_string(),
            None => OsString::from("dump.sql"),
        };
        name.push(STAGED_SUFFIX);
        name
    }
}
