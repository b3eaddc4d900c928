use crate::domain::models::{NewUser, User};
use crate::domain::repository::{self, PersistenceError};
use async_trait::async_trait;
use sqlx::{Pool, Postgres};

#[derive(Clone)]
pub struct PgUserRepository {
    pub pool: Pool<Postgres>,
}

impl PgUserRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PgUserRepository { pool }
    }
}

#[async_trait]
impl repository::UserRepository for PgUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, PersistenceError> {
        let row = sqlx::query("INSERT INTO users(name, email) VALUES ($1, $2) RETURNING id, name, email")
            .bind(&user.name)
            .bind(&user.email)
            .fetch_one(&self.pool)
            .await?;

        Ok(User::try_from(row)?)
    }
}
