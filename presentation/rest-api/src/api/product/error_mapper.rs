use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::NameEmpty
            | ProductError::NameTooLong
            | ProductError::PriceNegative
            | ProductError::QuantityNegative => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::NoImagesAccepted => (StatusCode::BAD_REQUEST, "UploadError"),
            ProductError::NotFound | ProductError::ImageNotFound => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            ProductError::IntegrityFault => {
                (StatusCode::INTERNAL_SERVER_ERROR, "IntegrityFault")
            }
            ProductError::Repository(RepositoryError::Unavailable) => {
                (StatusCode::SERVICE_UNAVAILABLE, "ServiceUnavailable")
            }
            ProductError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
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
    fn should_map_not_found_to_404() {
        let (status, json) = ProductError::NotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "product.not_found");
    }

    #[test]
    fn should_map_integrity_fault_to_500() {
        let (status, _) = ProductError::IntegrityFault.into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn should_map_unavailable_backend_to_503() {
        let (status, json) =
            ProductError::Repository(RepositoryError::Unavailable).into_error_response();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json.0.name, "ServiceUnavailable");
    }

    #[test]
    fn should_map_validation_failures_to_400() {
        for err in [
            ProductError::NameEmpty,
            ProductError::NameTooLong,
            ProductError::PriceNegative,
            ProductError::QuantityNegative,
            ProductError::NoImagesAccepted,
        ] {
            let (status, _) = err.into_error_response();
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }
}
