use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on a protected route.
    #[error("Missing or malformed Authorization header")]
    MissingCredentials,

    /// Token failed signature or expiry validation.
    #[error("Bearer token rejected: {0}")]
    TokenRejected(#[from] jsonwebtoken::errors::Error),

    /// Email/password pair did not match a stored credential.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated actor does not own the resource being read or mutated.
    #[error("Actor {0} does not own the requested resource")]
    NotResourceOwner(uuid::Uuid),
}

/// All authentication failures surface as 401 with a generic body; the
/// precise reason is only logged.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("auth failure: {}", self);

        let message = match self {
            Self::InvalidCredentials => "Invalid email or password",
            _ => "Unauthorized",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
