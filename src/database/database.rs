use sqlx::error::DatabaseError;

/// Message reported by the database engine when there is one, otherwise the
/// driver's own description of the failure.
pub fn driver_message(error: &sqlx::Error) -> String
{
    match error.as_database_error() {
        Some(database_error) => message_of(database_error),
        None => error.to_string(),
    }
}

fn message_of(error: &dyn DatabaseError) -> String
{
    error.message().to_string()
}
