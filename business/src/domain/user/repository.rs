use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    async fn insert(&self, user: &NewUser) -> Result<i64, RepositoryError>;
}
