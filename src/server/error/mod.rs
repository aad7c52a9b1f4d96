//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by every handler. Domain
//! outcomes (`NotFound`, `Validation`, `SlotConflict`, `DuplicateAccount`)
//! map to distinct status codes; infrastructure failures collapse into a
//! generic 500 with details logged server-side only.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    model::api::{ErrorDto, SlotConflictDto},
    server::error::{auth::AuthError, config::ConfigError},
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup. Always a 500.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error. Delegates response mapping to
    /// `AuthError::into_response()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM. 500, details logged.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Referenced turf/booking/user absent. 404.
    #[error("{0}")]
    NotFound(String),

    /// Missing or malformed field, invalid date range, empty slot set. 400.
    #[error("{0}")]
    Validation(String),

    /// A requested slot is already claimed by a non-cancelled booking with an
    /// intersecting date range. 409, identifying the conflicting labels and
    /// the existing booking.
    #[error("time slots {slots:?} already booked by {booking_id}")]
    SlotConflict { booking_id: Uuid, slots: Vec<String> },

    /// Unique email/phone violation on registration. 409.
    #[error("{0}")]
    DuplicateAccount(String),

    /// Internal server error with custom message. 500, message logged but a
    /// generic body returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Maps a database error from an account insert to `DuplicateAccount` when it
/// is a unique-constraint violation, passing everything else through.
pub fn map_unique_violation(err: sea_orm::DbErr, message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::DuplicateAccount(message.to_string())
        }
        _ => AppError::DbErr(err),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::SlotConflict { booking_id, slots } => (
                StatusCode::CONFLICT,
                Json(SlotConflictDto {
                    error: "Requested time slots are already booked".to_string(),
                    booking_id,
                    slots,
                }),
            )
                .into_response(),
            Self::DuplicateAccount(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message and returns a generic body so internal
/// details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
