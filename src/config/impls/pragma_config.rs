use crate::config::structs::pragma_config::PragmaConfig;

impl Default for PragmaConfig {
    fn default() -> Self {
        Self {
            foreign_keys: true,
            journal_mode: String::from("WAL"),
            cache_size: 10000,
            synchronous: String::from("NORMAL"),
            temp_store: None,
            mmap_size: None,
        }
    }
}

impl PragmaConfig {
    /// Pragma name/value pairs in the order they are applied.
    pub fn pragmas(&self) -> Vec<(&'static str, String)> {
        let foreign_keys = if self.foreign_keys { "ON" } else { "OFF" };
        let mut pragmas = vec![
            ("foreign_keys", foreign_keys.to_string()),
            ("journal_mode", self.journal_mode.clone()),
            ("cache_size", self.cache_size.to_string()),
            ("synchronous", self.synchronous.clone()),
        ];
        if let Some(temp_store) = &self.temp_store {
            pragmas.push(("temp_store", temp_store.clone()));
        }
        if let Some(mmap_size) = self.mmap_size {
            pragmas.push(("mmap_size", mmap_size.to_string()));
        }
        pragmas
    }
}
