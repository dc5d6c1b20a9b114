use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::{Role, User};

pub struct RegisterUserParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Defaults to `Role::User` when the caller does not ask for more.
    pub role: Option<Role>,
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, params: RegisterUserParams) -> Result<User, UserError>;
}
