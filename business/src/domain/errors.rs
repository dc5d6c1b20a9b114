/// Repository errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
///
/// `Unavailable` is reserved for an unreachable backend (pool exhausted,
/// connection refused) so callers can surface a retryable failure instead
/// of masking it as a not-found or a generic database error.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.unavailable")]
    Unavailable,
    #[error("repository.database_error")]
    DatabaseError,
}
