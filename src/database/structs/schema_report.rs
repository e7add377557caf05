use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SchemaReport {
    pub path: String,
    pub journal_mode: String,
    pub foreign_keys: bool,
    pub cache_size: i64,
    pub synchronous: i64,
    pub tables: Vec<String>,
}
