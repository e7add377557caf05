use std::path::PathBuf;

/// Dump text as read from disk, placeholders untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpSource {
    pub(crate) path: PathBuf,
    pub(crate) text: String,
}

/// Dump text after prefix substitution. Only obtainable through
/// `DumpSource::substitute`, which consumes the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedDump {
    pub(crate) path: PathBuf,
    pub(crate) text: String,
}
