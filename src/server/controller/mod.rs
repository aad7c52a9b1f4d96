pub mod booking;
pub mod owner;
pub mod review;
pub mod turf;
pub mod user;

use validator::Validate;

use crate::server::error::AppError;

/// Runs a request body's declared validation rules and maps failures to a
/// 400 with the field-level messages.
pub fn validate(dto: &impl Validate) -> Result<(), AppError> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}
