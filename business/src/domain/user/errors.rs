#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.username_empty")]
    UsernameEmpty,
    #[error("user.username_taken")]
    UsernameTaken,
    #[error("user.email_invalid")]
    EmailInvalid,
    #[error("user.passwords_do_not_match")]
    PasswordsDoNotMatch,
    #[error("user.password_too_short")]
    PasswordTooShort,
    /// Single answer for both unknown username and wrong password, so the
    /// response does not leak which of the two failed.
    #[error("user.invalid_credentials")]
    InvalidCredentials,
    #[error("user.hashing_failed")]
    HashingFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
