use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::user::model::Role;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum RoleDto {
    #[oai(rename = "Admin")]
    Admin,
    #[oai(rename = "User")]
    User,
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => RoleDto::Admin,
            Role::User => RoleDto::User,
        }
    }
}

impl From<RoleDto> for Role {
    fn from(dto: RoleDto) -> Self {
        match dto {
            RoleDto::Admin => Role::Admin,
            RoleDto::User => Role::User,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RegisterRequest {
    /// Unique login name
    #[oai(validator(min_length = 1, max_length = 100))]
    pub username: String,
    /// Contact email address
    pub email: String,
    /// Plaintext password, hashed before it is stored
    pub password: String,
    /// Must repeat `password`
    pub confirm_password: String,
    /// Requested role; defaults to User
    #[oai(skip_serializing_if_is_none)]
    pub role: Option<RoleDto>,
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Issued credential plus the identity it certifies.
#[derive(Debug, Clone, Object)]
pub struct AuthResponse {
    /// Signed bearer token
    pub token: String,
    /// Token expiry timestamp
    pub expires_at: DateTime<Utc>,
    pub username: String,
    pub role: RoleDto,
}
