use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate, Clone, Debug)]
pub struct CreateReviewDto {
    pub turf_id: Uuid,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    #[validate(length(min = 1, message = "Comment must not be empty"))]
    pub comment: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ReviewDto {
    pub id: Uuid,
    pub turf_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl ReviewDto {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            turf_id: entity.turf_id,
            user_id: entity.user_id,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }
}
