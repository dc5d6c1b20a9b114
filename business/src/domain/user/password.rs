use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use super::errors::UserError;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hashes a plaintext password with Argon2id and a fresh random salt.
/// The PHC string embeds the algorithm parameters and the salt.
pub fn hash_password(password: &str) -> Result<String, UserError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| UserError::HashingFailed)?;
    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC hash. A mismatch is
/// `Ok(false)`; only an unparseable hash is an error.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, UserError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|_| UserError::HashingFailed)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(_) => Err(UserError::HashingFailed),
    }
}

pub fn validate_strength(password: &str) -> Result<(), UserError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_verify_password_against_its_own_hash() {
        let hash = hash_password("correct-horse-battery-staple").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct-horse-battery-staple", &hash).unwrap());
    }

    #[test]
    fn should_fail_verification_for_wrong_password() {
        let hash = hash_password("real-password").unwrap();
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn should_produce_distinct_hashes_for_same_password() {
        let first = hash_password("same-password").unwrap();
        let second = hash_password("same-password").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn should_reject_unparseable_stored_hash() {
        let result = verify_password("anything", "not-a-phc-string");
        assert!(matches!(result.unwrap_err(), UserError::HashingFailed));
    }

    #[test]
    fn should_reject_short_password() {
        assert!(matches!(
            validate_strength("short").unwrap_err(),
            UserError::PasswordTooShort
        ));
        assert!(validate_strength("long-enough").is_ok());
    }
}
