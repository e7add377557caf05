use std::fmt;
use std::fmt::Formatter;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::import::structs::import_target::ImportTarget;

impl ImportTarget {
    pub fn is_file_engine(&self) -> bool {
        self.engine == DatabaseDrivers::sqlite3
    }
}

impl fmt::Debug for ImportTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportTarget")
            .field("engine", &self.engine)
            .field("path", &self.path)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"********")
            .field("prefix", &self.prefix)
            .field("temp_dir", &self.temp_dir)
            .field("pragma", &self.pragma)
            .finish()
    }
}
