use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PragmaConfig {
    pub foreign_keys: bool,
    pub journal_mode: String,
    pub cache_size: i64,
    pub synchronous: String,
    pub temp_store: Option<String>,
    pub mmap_size: Option<u64>
}
