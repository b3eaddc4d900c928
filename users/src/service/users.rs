use crate::domain::models::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::error::AppError;
use std::sync::Arc;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> UserService {
        UserService { user_repo }
    }

    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        match self.user_repo.create(new_user).await {
            Ok(user) => {
                log::info!(user_id = user.id; "User created");
                Ok(user)
            }
            Err(err) => {
                log::error!(error:% = err; "Failed to persist user");
                Err(err.into())
            }
        }
    }
}
