//! Booking factory for creating test bookings.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use entity::booking::BookingStatus;
use entity::types::StringList;

/// Factory for creating test bookings with customizable fields.
///
/// Defaults: a single `"10:00-11:00"` slot of football, one week from
/// today, status `pending`. Inserts bypass the availability engine, so tests
/// can seed overlapping or cancelled bookings directly.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    turf_id: Uuid,
    user_id: Uuid,
    date: NaiveDate,
    end_date: NaiveDate,
    sport: String,
    time_slots: Vec<String>,
    cost: i32,
    status: BookingStatus,
}

impl<'a> BookingFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, turf_id: Uuid, user_id: Uuid) -> Self {
        let date = Utc::now().date_naive() + Duration::days(7);
        Self {
            db,
            turf_id,
            user_id,
            date,
            end_date: date,
            sport: "football".to_string(),
            time_slots: vec!["10:00-11:00".to_string()],
            cost: 500,
            status: BookingStatus::Pending,
        }
    }

    /// Sets both ends of the booking window to the same date.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self.end_date = date;
        self
    }

    pub fn date_range(mut self, date: NaiveDate, end_date: NaiveDate) -> Self {
        self.date = date;
        self.end_date = end_date;
        self
    }

    pub fn sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = sport.into();
        self
    }

    pub fn time_slots(mut self, time_slots: Vec<String>) -> Self {
        self.time_slots = time_slots;
        self
    }

    pub fn cost(mut self, cost: i32) -> Self {
        self.cost = cost;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            turf_id: ActiveValue::Set(self.turf_id),
            user_id: ActiveValue::Set(self.user_id),
            date: ActiveValue::Set(self.date),
            end_date: ActiveValue::Set(self.end_date),
            sport: ActiveValue::Set(self.sport),
            time_slots: ActiveValue::Set(StringList(self.time_slots)),
            cost: ActiveValue::Set(self.cost),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending booking with default values.
pub async fn create_booking(
    db: &DatabaseConnection,
    turf_id: Uuid,
    user_id: Uuid,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, turf_id, user_id).build().await
}
