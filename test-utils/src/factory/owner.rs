//! Turf owner factory for creating test owner accounts.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use entity::types::UuidList;

use crate::factory::helpers::next_id;

/// Factory for creating test turf owners with customizable fields.
pub struct OwnerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    phone: String,
    password_hash: String,
    address: String,
    city: String,
    state: String,
    id_proof: String,
    turf_ids: Vec<Uuid>,
}

impl<'a> OwnerFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Owner {id}"),
            email: format!("owner{id}@example.com"),
            phone: format!("91234{id:05}"),
            password_hash: "factory-password-hash".to_string(),
            address: format!("{id} Owner Lane"),
            city: "pune".to_string(),
            state: "maharashtra".to_string(),
            id_proof: format!("ID-PROOF-{id}"),
            turf_ids: Vec::new(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn turf_ids(mut self, turf_ids: Vec<Uuid>) -> Self {
        self.turf_ids = turf_ids;
        self
    }

    /// Builds and inserts the owner entity into the database.
    pub async fn build(self) -> Result<entity::turf_owner::Model, DbErr> {
        entity::turf_owner::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            turf_ids: ActiveValue::Set(UuidList(self.turf_ids)),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            password_hash: ActiveValue::Set(self.password_hash),
            address: ActiveValue::Set(self.address),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            id_proof: ActiveValue::Set(self.id_proof),
            payment_info: ActiveValue::Set(serde_json::json!({})),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a turf owner with default values.
pub async fn create_owner(db: &DatabaseConnection) -> Result<entity::turf_owner::Model, DbErr> {
    OwnerFactory::new(db).build().await
}
