use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

pub struct CreateReviewParams {
    pub turf_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: String,
}

pub struct ReviewRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateReviewParams) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            turf_id: ActiveValue::Set(params.turf_id),
            user_id: ActiveValue::Set(params.user_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::review::Model>, DbErr> {
        entity::prelude::Review::find_by_id(id).one(self.db).await
    }

    pub async fn all(&self) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn by_turf(&self, turf_id: Uuid) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::TurfId.eq(turf_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let res = entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}
