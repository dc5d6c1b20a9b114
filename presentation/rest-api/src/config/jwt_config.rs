use std::env;

/// Token signing configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_hours: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    ///
    /// Environment variables:
    /// - JWT_SECRET: HMAC signing key; the fallback is only good for
    ///   local development
    /// - JWT_EXPIRY_HOURS: token lifetime (default: 24)
    pub fn from_env() -> Self {
        let secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".to_string());
        let expiry_hours = env::var("JWT_EXPIRY_HOURS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(24);

        Self {
            secret,
            expiry_hours,
        }
    }
}
