use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use entity::turf::TurfStatus;

#[derive(Deserialize, Validate, Clone, Debug)]
pub struct CreateTurfDto {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Address must not be empty"))]
    pub address: String,
    #[validate(length(min = 1, message = "City must not be empty"))]
    pub city: String,
    #[validate(length(min = 1, message = "State must not be empty"))]
    pub state: String,
    #[validate(length(min = 4, message = "Pincode too short"))]
    pub pincode: String,
    #[validate(length(min = 1, message = "At least one sport is required"))]
    pub sports: Vec<String>,
    pub available_sports: Vec<String>,
    #[validate(range(min = 1, message = "Capacity must be positive"))]
    pub capacity: i32,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub equipments: Vec<String>,
    #[validate(length(min = 1, message = "At least one open day is required"))]
    pub days: Vec<String>,
    /// Open day name mapped to the ordered slot labels bookable on that day.
    pub timings: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub payment_info: serde_json::Value,
    pub status: TurfStatus,
}

#[derive(Deserialize, Validate, Clone, Debug, Default)]
pub struct UpdateTurfDto {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub sports: Option<Vec<String>>,
    pub available_sports: Option<Vec<String>>,
    #[validate(range(min = 1, message = "Capacity must be positive"))]
    pub capacity: Option<i32>,
    pub facilities: Option<Vec<String>>,
    pub equipments: Option<Vec<String>>,
    pub days: Option<Vec<String>>,
    pub timings: Option<BTreeMap<String, Vec<String>>>,
    pub rules: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub payment_info: Option<serde_json::Value>,
    pub status: Option<TurfStatus>,
    pub rating: Option<i32>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct TurfFilterQuery {
    pub city: Option<String>,
    pub state: Option<String>,
    pub sport: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct TurfDto {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub sports: Vec<String>,
    pub available_sports: Vec<String>,
    pub capacity: i32,
    pub facilities: Vec<String>,
    pub equipments: Vec<String>,
    pub days: Vec<String>,
    pub timings: BTreeMap<String, Vec<String>>,
    pub rules: Vec<String>,
    pub images: Vec<String>,
    pub payment_info: serde_json::Value,
    pub status: TurfStatus,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TurfDto {
    pub fn from_entity(entity: entity::turf::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            address: entity.address,
            city: entity.city,
            state: entity.state,
            pincode: entity.pincode,
            sports: entity.sports.0,
            available_sports: entity.available_sports.0,
            capacity: entity.capacity,
            facilities: entity.facilities.0,
            equipments: entity.equipments.0,
            days: entity.days.0,
            timings: entity.timings.0,
            rules: entity.rules.0,
            images: entity.images.0,
            payment_info: entity.payment_info,
            status: entity.status,
            rating: entity.rating,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
