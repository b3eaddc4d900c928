use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;

/// A persisted user. `id` is only ever assigned by a [`UserRepository`].
///
/// [`UserRepository`]: crate::domain::repository::UserRepository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    pub fn from_new(id: i64, new_user: NewUser) -> User {
        User {
            id,
            name: new_user.name,
            email: new_user.email,
        }
    }
}

impl TryFrom<PgRow> for User {
    type Error = sqlx::Error;

    fn try_from(row: PgRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
        })
    }
}

/// Validated attributes of a user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: Option<String>) -> NewUser {
        NewUser {
            name: name.into(),
            email,
        }
    }
}
