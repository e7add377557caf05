use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::import::structs::split_options::SplitOptions;

impl SplitOptions {
    pub fn sqlite() -> SplitOptions {
        SplitOptions { backslash_escapes: false }
    }

    pub fn mysql() -> SplitOptions {
        SplitOptions { backslash_escapes: true }
    }

    pub fn for_driver(engine: DatabaseDrivers) -> SplitOptions {
        match engine {
            DatabaseDrivers::sqlite3 => SplitOptions::sqlite(),
            DatabaseDrivers::mysql => SplitOptions::mysql(),
        }
    }
}
