//! User factory for creating test user accounts.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test users with customizable fields.
///
/// Defaults give every user a unique email and phone so the unique
/// constraints on the users table never collide across factory calls.
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    phone: String,
    password_hash: String,
    address: String,
    city: String,
    state: String,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User {id}"),
            email: format!("user{id}@example.com"),
            phone: format!("98765{id:05}"),
            // Not a real hash; password checks are covered by auth tests.
            password_hash: "factory-password-hash".to_string(),
            address: format!("{id} Test Street"),
            city: "pune".to_string(),
            state: "maharashtra".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            password_hash: ActiveValue::Set(self.password_hash),
            address: ActiveValue::Set(self.address),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
