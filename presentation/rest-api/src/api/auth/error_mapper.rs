use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            UserError::UsernameEmpty
            | UserError::UsernameTaken
            | UserError::EmailInvalid
            | UserError::PasswordsDoNotMatch
            | UserError::PasswordTooShort => (StatusCode::BAD_REQUEST, "ValidationError"),
            UserError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            UserError::HashingFailed => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
            UserError::Repository(RepositoryError::Unavailable) => {
                (StatusCode::SERVICE_UNAVAILABLE, "ServiceUnavailable")
            }
            UserError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        let message = self.to_string();
        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_invalid_credentials_to_401() {
        let (status, json) = UserError::InvalidCredentials.into_error_response();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json.0.message, "user.invalid_credentials");
    }

    #[test]
    fn should_map_registration_validation_failures_to_400() {
        for err in [
            UserError::UsernameEmpty,
            UserError::UsernameTaken,
            UserError::EmailInvalid,
            UserError::PasswordsDoNotMatch,
            UserError::PasswordTooShort,
        ] {
            let (status, _) = err.into_error_response();
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }
}
