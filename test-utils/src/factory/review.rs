//! Review factory for creating test reviews.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test reviews with customizable fields.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    turf_id: Uuid,
    user_id: Uuid,
    rating: i32,
    comment: String,
}

impl<'a> ReviewFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, turf_id: Uuid, user_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            turf_id,
            user_id,
            rating: 4,
            comment: format!("Test review {id}"),
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Builds and inserts the review entity into the database.
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            turf_id: ActiveValue::Set(self.turf_id),
            user_id: ActiveValue::Set(self.user_id),
            rating: ActiveValue::Set(self.rating),
            comment: ActiveValue::Set(self.comment),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values.
pub async fn create_review(
    db: &DatabaseConnection,
    turf_id: Uuid,
    user_id: Uuid,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, turf_id, user_id).build().await
}
