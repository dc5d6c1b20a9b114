use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::{Deserialize, Serialize};

use business::domain::user::model::{Role, User};

use crate::config::jwt_config::JwtConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: i64,
    pub username: String,
    pub role: String,
    pub iat: u64,
    pub exp: u64,
}

impl Claims {
    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}

/// Mints and validates HS256 tokens carrying the user's role claim.
pub struct JwtService {
    secret: String,
    expiry_hours: i64,
}

impl JwtService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            expiry_hours: config.expiry_hours,
        }
    }

    pub fn generate(
        &self,
        user: &User,
    ) -> Result<(String, DateTime<Utc>), jsonwebtoken::errors::Error> {
        let issued_at = Utc::now();
        let expires_at = issued_at + Duration::hours(self.expiry_hours);
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            role: user.role.to_string(),
            iat: issued_at.timestamp() as u64,
            exp: expires_at.timestamp() as u64,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok((token, expires_at))
    }

    pub fn verify(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )?;
        Ok(data.claims)
    }
}

/// Bearer token authentication restricted to the Admin role
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "admin_bearer_checker")]
pub struct AdminBearer(pub Claims);

async fn admin_bearer_checker(
    _req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<Claims> {
    let config = JwtConfig::from_env();
    match JwtService::verify(&config.secret, &bearer.token) {
        Ok(claims) if claims.role() == Some(Role::Admin) => Some(claims),
        Ok(claims) => {
            tracing::warn!(user = %claims.username, "rejected token without the Admin role");
            None
        }
        Err(e) => {
            tracing::warn!("JWT validation failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str, expiry_hours: i64) -> JwtService {
        JwtService {
            secret: secret.to_string(),
            expiry_hours,
        }
    }

    fn admin_user() -> User {
        User::from_repository(
            7,
            "root".to_string(),
            "root@example.com".to_string(),
            "$argon2id$stub".to_string(),
            Role::Admin,
            Utc::now(),
        )
    }

    #[test]
    fn should_round_trip_claims_through_generate_and_verify() {
        let jwt = service("test-secret", 24);

        let (token, expires_at) = jwt.generate(&admin_user()).unwrap();
        let claims = JwtService::verify("test-secret", &token).unwrap();

        assert_eq!(claims.sub, 7);
        assert_eq!(claims.username, "root");
        assert_eq!(claims.role(), Some(Role::Admin));
        assert!(expires_at > Utc::now());
    }

    #[test]
    fn should_reject_token_signed_with_other_secret() {
        let jwt = service("secret-one", 24);

        let (token, _) = jwt.generate(&admin_user()).unwrap();
        assert!(JwtService::verify("secret-two", &token).is_err());
    }

    #[test]
    fn should_reject_expired_token() {
        // Issued already past its expiry (minus two hours, beyond any leeway).
        let jwt = service("test-secret", -2);

        let (token, _) = jwt.generate(&admin_user()).unwrap();
        assert!(JwtService::verify("test-secret", &token).is_err());
    }

    #[test]
    fn should_reject_garbage_token() {
        assert!(JwtService::verify("test-secret", "not-a-jwt").is_err());
    }

    #[test]
    fn should_expose_unknown_role_as_none() {
        let claims = Claims {
            sub: 1,
            username: "x".to_string(),
            role: "Superuser".to_string(),
            iat: 0,
            exp: 0,
        };
        assert_eq!(claims.role(), None);
    }
}
