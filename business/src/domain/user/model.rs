use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::errors::UserError;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Role {
    Admin,
    User,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::User => write!(f, "User"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "User" => Ok(Role::User),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// A registration candidate whose password has already been hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl NewUser {
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
        role: Role,
    ) -> Result<Self, UserError> {
        if username.trim().is_empty() {
            return Err(UserError::UsernameEmpty);
        }
        if !EMAIL_SHAPE.is_match(&email) {
            return Err(UserError::EmailInvalid);
        }

        Ok(Self {
            username,
            email,
            password_hash,
            role,
        })
    }
}

impl User {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        username: String,
        email: String,
        password_hash: String,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            role,
            created_at,
        }
    }
}
