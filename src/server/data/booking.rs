use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use entity::booking::BookingStatus;
use entity::types::StringList;

pub struct CreateBookingParams {
    pub turf_id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub end_date: NaiveDate,
    pub sport: String,
    pub time_slots: Vec<String>,
    pub cost: i32,
}

pub struct BookingRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a booking with status `pending`. Callers are responsible for
    /// running the overlap check first; this method does not re-validate.
    pub async fn create(
        &self,
        params: CreateBookingParams,
    ) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            turf_id: ActiveValue::Set(params.turf_id),
            user_id: ActiveValue::Set(params.user_id),
            date: ActiveValue::Set(params.date),
            end_date: ActiveValue::Set(params.end_date),
            sport: ActiveValue::Set(params.sport),
            time_slots: ActiveValue::Set(StringList(params.time_slots)),
            cost: ActiveValue::Set(params.cost),
            status: ActiveValue::Set(BookingStatus::Pending),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    pub async fn all(&self) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .order_by_asc(entity::booking::Column::Date)
            .all(self.db)
            .await
    }

    pub async fn by_user(&self, user_id: Uuid) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_asc(entity::booking::Column::Date)
            .all(self.db)
            .await
    }

    pub async fn by_turf(&self, turf_id: Uuid) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::TurfId.eq(turf_id))
            .order_by_asc(entity::booking::Column::Date)
            .all(self.db)
            .await
    }

    /// All non-cancelled bookings for a turf. Input to the booked-slot map.
    pub async fn active_by_turf(&self, turf_id: Uuid) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::TurfId.eq(turf_id))
            .filter(entity::booking::Column::Status.ne(BookingStatus::Cancelled))
            .order_by_asc(entity::booking::Column::Date)
            .all(self.db)
            .await
    }

    /// Non-cancelled bookings for a turf whose `[date, end_date]` window
    /// intersects the given range. Two inclusive ranges intersect when
    /// `existing.date <= end_date && date <= existing.end_date`.
    pub async fn active_overlapping(
        &self,
        turf_id: Uuid,
        date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::TurfId.eq(turf_id))
            .filter(entity::booking::Column::Status.ne(BookingStatus::Cancelled))
            .filter(entity::booking::Column::Date.lte(end_date))
            .filter(entity::booking::Column::EndDate.gte(date))
            .order_by_asc(entity::booking::Column::Date)
            .all(self.db)
            .await
    }

    /// Sets a booking's status. State-machine rules are enforced by the
    /// availability engine before this is called.
    pub async fn set_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        let Some(booking) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::booking::ActiveModel = booking.into();
        active.status = ActiveValue::Set(status);

        Ok(Some(active.update(self.db).await?))
    }
}
