use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use entity::booking::BookingStatus;

#[derive(Deserialize, Validate, Clone, Debug)]
pub struct CreateBookingDto {
    pub turf_id: Uuid,
    pub date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(length(min = 1, message = "Sport must not be empty"))]
    pub sport: String,
    #[validate(length(min = 1, message = "At least one time slot is required"))]
    pub time_slots: Vec<String>,
    #[validate(range(min = 0, message = "Cost must not be negative"))]
    pub cost: i32,
}

/// The only mutable booking field is its status; everything else is fixed at
/// creation time so accepted bookings cannot drift past the overlap check.
#[derive(Deserialize, Clone, Debug)]
pub struct UpdateBookingDto {
    pub status: BookingStatus,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct SlotQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct BookingDto {
    pub id: Uuid,
    pub turf_id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub end_date: NaiveDate,
    pub sport: String,
    pub time_slots: Vec<String>,
    pub cost: i32,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl BookingDto {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            turf_id: entity.turf_id,
            user_id: entity.user_id,
            date: entity.date,
            end_date: entity.end_date,
            sport: entity.sport,
            time_slots: entity.time_slots.0,
            cost: entity.cost,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}

/// Booked-slot map for a turf: calendar date to the union of slot labels
/// claimed by non-cancelled bookings covering that date.
pub type BookedSlotsDto = BTreeMap<NaiveDate, BTreeSet<String>>;
