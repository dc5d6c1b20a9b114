use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::user::model::{Role, User};

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        User::from_repository(
            self.id,
            self.username,
            self.email,
            self.password_hash,
            self.role.parse::<Role>().unwrap_or(Role::User),
            self.created_at,
        )
    }
}
