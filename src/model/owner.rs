use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate, Clone, Debug)]
pub struct CreateOwnerDto {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 7, message = "Phone number too short"))]
    pub phone: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Address must not be empty"))]
    pub address: String,
    #[validate(length(min = 1, message = "City must not be empty"))]
    pub city: String,
    #[validate(length(min = 1, message = "State must not be empty"))]
    pub state: String,
    #[validate(length(min = 1, message = "Id proof must not be empty"))]
    pub id_proof: String,
    #[serde(default)]
    pub payment_info: serde_json::Value,
}

#[derive(Deserialize, Validate, Clone, Debug, Default)]
pub struct UpdateOwnerDto {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 7, message = "Phone number too short"))]
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub id_proof: Option<String>,
    pub payment_info: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct OwnerDto {
    pub id: Uuid,
    pub turf_ids: Vec<Uuid>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub id_proof: String,
    pub payment_info: serde_json::Value,
}

impl OwnerDto {
    pub fn from_entity(entity: entity::turf_owner::Model) -> Self {
        Self {
            id: entity.id,
            turf_ids: entity.turf_ids.0,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            address: entity.address,
            city: entity.city,
            state: entity.state,
            id_proof: entity.id_proof,
            payment_info: entity.payment_info,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct OwnerSessionDto {
    #[serde(flatten)]
    pub account: OwnerDto,
    pub token: String,
}
