pub mod user;

use crate::domain::repository::PersistenceError;

impl From<sqlx::Error> for PersistenceError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => PersistenceError::new(db_err.message()),
            err => PersistenceError::new(err.to_string()),
        }
    }
}
