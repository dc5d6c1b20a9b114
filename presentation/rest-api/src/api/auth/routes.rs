use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::model::User;
use business::domain::user::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::auth::dto::{AuthResponse, LoginRequest, RegisterRequest};
use crate::api::security::JwtService;
use crate::api::tags::ApiTags;

pub struct AuthApi {
    register_use_case: Arc<dyn RegisterUserUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
    jwt: Arc<JwtService>,
}

impl AuthApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUserUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
        jwt: Arc<JwtService>,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
            jwt,
        }
    }

    fn mint_token(&self, user: User) -> Result<AuthResponse, Json<ErrorResponse>> {
        match self.jwt.generate(&user) {
            Ok((token, expires_at)) => Ok(AuthResponse {
                token,
                expires_at,
                username: user.username,
                role: user.role.into(),
            }),
            Err(err) => {
                tracing::error!("failed to sign token: {err}");
                Err(Json(ErrorResponse {
                    name: "InternalError".to_string(),
                    message: "auth.token_signing_failed".to_string(),
                }))
            }
        }
    }
}

/// Credential check-and-issue API
///
/// Registration and login both answer with a signed bearer token carrying
/// the role claim the product endpoints check.
#[OpenApi]
impl AuthApi {
    /// Register a new user
    #[oai(path = "/auth/register", method = "post", tag = "ApiTags::Auth")]
    async fn register(&self, body: Json<RegisterRequest>) -> RegisterResponse {
        let params = RegisterUserParams {
            username: body.0.username,
            email: body.0.email,
            password: body.0.password,
            confirm_password: body.0.confirm_password,
            role: body.0.role.map(|role| role.into()),
        };

        match self.register_use_case.execute(params).await {
            Ok(user) => match self.mint_token(user) {
                Ok(response) => RegisterResponse::Ok(Json(response)),
                Err(json) => RegisterResponse::InternalError(json),
            },
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterResponse::BadRequest(json),
                    503 => RegisterResponse::ServiceUnavailable(json),
                    _ => RegisterResponse::InternalError(json),
                }
            }
        }
    }

    /// Log in with username and password
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginResponse {
        let params = LoginParams {
            username: body.0.username,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(user) => match self.mint_token(user) {
                Ok(response) => LoginResponse::Ok(Json(response)),
                Err(json) => LoginResponse::InternalError(json),
            },
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LoginResponse::Unauthorized(json),
                    503 => LoginResponse::ServiceUnavailable(json),
                    _ => LoginResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterResponse {
    #[oai(status = 200)]
    Ok(Json<AuthResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<AuthResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
