use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error envelope shared by every endpoint. `message` carries the
/// code-style identifier from the domain error, `name` the coarse class.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

/// Maps a domain error onto an HTTP status and the wire envelope.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
