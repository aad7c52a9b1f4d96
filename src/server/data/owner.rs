use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use entity::types::UuidList;

pub struct CreateOwnerParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub id_proof: String,
    pub payment_info: serde_json::Value,
}

#[derive(Default)]
pub struct UpdateOwnerParams {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub id_proof: Option<String>,
    pub payment_info: Option<serde_json::Value>,
}

pub struct OwnerRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OwnerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateOwnerParams,
    ) -> Result<entity::turf_owner::Model, DbErr> {
        entity::turf_owner::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            turf_ids: ActiveValue::Set(UuidList::default()),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            password_hash: ActiveValue::Set(params.password_hash),
            address: ActiveValue::Set(params.address),
            city: ActiveValue::Set(params.city),
            state: ActiveValue::Set(params.state),
            id_proof: ActiveValue::Set(params.id_proof),
            payment_info: ActiveValue::Set(params.payment_info),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::turf_owner::Model>, DbErr> {
        entity::prelude::TurfOwner::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::turf_owner::Model>, DbErr> {
        entity::prelude::TurfOwner::find()
            .filter(entity::turf_owner::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateOwnerParams,
    ) -> Result<Option<entity::turf_owner::Model>, DbErr> {
        let Some(owner) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::turf_owner::ActiveModel = owner.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(phone);
        }
        if let Some(address) = params.address {
            active.address = ActiveValue::Set(address);
        }
        if let Some(city) = params.city {
            active.city = ActiveValue::Set(city);
        }
        if let Some(state) = params.state {
            active.state = ActiveValue::Set(state);
        }
        if let Some(id_proof) = params.id_proof {
            active.id_proof = ActiveValue::Set(id_proof);
        }
        if let Some(payment_info) = params.payment_info {
            active.payment_info = ActiveValue::Set(payment_info);
        }

        Ok(Some(active.update(self.db).await?))
    }

    /// Records a turf id in the owner's managed list. Adding an id twice is
    /// a no-op.
    pub async fn add_turf(
        &self,
        owner_id: Uuid,
        turf_id: Uuid,
    ) -> Result<Option<entity::turf_owner::Model>, DbErr> {
        let Some(owner) = self.find_by_id(owner_id).await? else {
            return Ok(None);
        };

        let mut turf_ids = owner.turf_ids.clone();
        if !turf_ids.contains(turf_id) {
            turf_ids.0.push(turf_id);
        }

        let mut active: entity::turf_owner::ActiveModel = owner.into();
        active.turf_ids = ActiveValue::Set(turf_ids);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn remove_turf(
        &self,
        owner_id: Uuid,
        turf_id: Uuid,
    ) -> Result<Option<entity::turf_owner::Model>, DbErr> {
        let Some(owner) = self.find_by_id(owner_id).await? else {
            return Ok(None);
        };

        let mut turf_ids = owner.turf_ids.clone();
        turf_ids.0.retain(|id| *id != turf_id);

        let mut active: entity::turf_owner::ActiveModel = owner.into();
        active.turf_ids = ActiveValue::Set(turf_ids);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let res = entity::prelude::TurfOwner::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}
