/// Placeholder replaced with the configured table prefix.
pub const PREFIX_PLACEHOLDER: &str = "__PREFIX__";

/// Suffix appended to the dump file name when it is staged for the networked path.
pub const STAGED_SUFFIX: &str = ".process";

pub fn substitute_prefix(sql: &str, prefix: &str) -> String
{
    sql.replace(PREFIX_PLACEHOLDER, prefix)
}

/// True for `BEGIN`, `COMMIT`, `END` and `ROLLBACK` statements that open or
/// close a transaction. `ROLLBACK TO <savepoint>` is not one of them.
pub fn is_transaction_control(statement: &str) -> bool
{
    let mut words = statement.split_whitespace().map(|word| word.to_ascii_uppercase());
    match words.next().as_deref() {
        Some("BEGIN") | Some("COMMIT") | Some("END") => true,
        Some("ROLLBACK") => !words.any(|word| word == "TO"),
        _ => false,
    }
}
