use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::user::model::{NewUser, User};
use business::domain::user::repository::UserRepository;

use super::entity::UserEntity;
use crate::db::map_sqlx_err;

pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(
            "SELECT id, username, email, password_hash, role, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(entity.map(UserEntity::into_domain))
    }

    async fn insert(&self, user: &NewUser) -> Result<i64, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (username, email, password_hash, role) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(id)
    }
}
