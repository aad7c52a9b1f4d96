use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct MessageDto {
    pub message: String,
}

/// Body of a 409 slot-conflict response: which labels collided and with
/// which existing booking.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct SlotConflictDto {
    pub error: String,
    pub booking_id: Uuid,
    pub slots: Vec<String>,
}
