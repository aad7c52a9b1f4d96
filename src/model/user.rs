use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate, Clone, Debug)]
pub struct CreateUserDto {
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
}

#[derive(Deserialize, Validate, Clone, Debug, Default)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 7, message = "Phone number too short"))]
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Deserialize, Validate, Clone, Debug)]
pub struct LoginDto {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
}

impl UserDto {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            address: entity.address,
            city: entity.city,
            state: entity.state,
        }
    }
}

/// Login response: the account's public fields plus a fresh bearer token,
/// mirroring what clients already expect from the login endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct AuthSessionDto {
    #[serde(flatten)]
    pub account: UserDto,
    pub token: String,
}
