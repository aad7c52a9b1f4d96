use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use entity::turf::TurfStatus;
use entity::types::{SlotCalendar, StringList};

pub struct CreateTurfParams {
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
}

#[derive(Default)]
pub struct UpdateTurfParams {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub sports: Option<Vec<String>>,
    pub available_sports: Option<Vec<String>>,
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

pub struct TurfRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TurfRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTurfParams) -> Result<entity::turf::Model, DbErr> {
        let now = Utc::now();

        entity::turf::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner_id: ActiveValue::Set(params.owner_id),
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            city: ActiveValue::Set(params.city),
            state: ActiveValue::Set(params.state),
            pincode: ActiveValue::Set(params.pincode),
            sports: ActiveValue::Set(StringList(params.sports)),
            available_sports: ActiveValue::Set(StringList(params.available_sports)),
            capacity: ActiveValue::Set(params.capacity),
            facilities: ActiveValue::Set(StringList(params.facilities)),
            equipments: ActiveValue::Set(StringList(params.equipments)),
            days: ActiveValue::Set(StringList(params.days)),
            timings: ActiveValue::Set(SlotCalendar(params.timings)),
            rules: ActiveValue::Set(StringList(params.rules)),
            images: ActiveValue::Set(StringList(params.images)),
            payment_info: ActiveValue::Set(params.payment_info),
            status: ActiveValue::Set(params.status),
            rating: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::turf::Model>, DbErr> {
        entity::prelude::Turf::find_by_id(id).one(self.db).await
    }

    pub async fn all(&self) -> Result<Vec<entity::turf::Model>, DbErr> {
        entity::prelude::Turf::find()
            .order_by_asc(entity::turf::Column::Name)
            .all(self.db)
            .await
    }

    /// Filters turfs by city and/or state in SQL; the optional sport filter
    /// is applied to the JSON `available_sports` list after the fetch, which
    /// keeps the query portable across Postgres and SQLite.
    pub async fn filter(
        &self,
        city: Option<&str>,
        state: Option<&str>,
        sport: Option<&str>,
    ) -> Result<Vec<entity::turf::Model>, DbErr> {
        let mut query = entity::prelude::Turf::find();

        if let Some(city) = city {
            query = query.filter(entity::turf::Column::City.eq(city.to_lowercase()));
        }
        if let Some(state) = state {
            query = query.filter(entity::turf::Column::State.eq(state.to_lowercase()));
        }

        let mut turfs = query
            .order_by_asc(entity::turf::Column::Name)
            .all(self.db)
            .await?;

        if let Some(sport) = sport {
            turfs.retain(|t| t.available_sports.contains(sport));
        }

        Ok(turfs)
    }

    pub async fn by_pincode(&self, pincode: &str) -> Result<Vec<entity::turf::Model>, DbErr> {
        entity::prelude::Turf::find()
            .filter(entity::turf::Column::Pincode.eq(pincode))
            .order_by_asc(entity::turf::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateTurfParams,
    ) -> Result<Option<entity::turf::Model>, DbErr> {
        let Some(turf) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::turf::ActiveModel = turf.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
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
        if let Some(pincode) = params.pincode {
            active.pincode = ActiveValue::Set(pincode);
        }
        if let Some(sports) = params.sports {
            active.sports = ActiveValue::Set(StringList(sports));
        }
        if let Some(available_sports) = params.available_sports {
            active.available_sports = ActiveValue::Set(StringList(available_sports));
        }
        if let Some(capacity) = params.capacity {
            active.capacity = ActiveValue::Set(capacity);
        }
        if let Some(facilities) = params.facilities {
            active.facilities = ActiveValue::Set(StringList(facilities));
        }
        if let Some(equipments) = params.equipments {
            active.equipments = ActiveValue::Set(StringList(equipments));
        }
        if let Some(days) = params.days {
            active.days = ActiveValue::Set(StringList(days));
        }
        if let Some(timings) = params.timings {
            active.timings = ActiveValue::Set(SlotCalendar(timings));
        }
        if let Some(rules) = params.rules {
            active.rules = ActiveValue::Set(StringList(rules));
        }
        if let Some(images) = params.images {
            active.images = ActiveValue::Set(StringList(images));
        }
        if let Some(payment_info) = params.payment_info {
            active.payment_info = ActiveValue::Set(payment_info);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(rating) = params.rating {
            active.rating = ActiveValue::Set(rating);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let res = entity::prelude::Turf::delete_by_id(id).exec(self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
