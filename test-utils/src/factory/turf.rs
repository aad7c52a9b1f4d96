//! Turf factory for creating test turfs.
//!
//! The default turf is open every day of the week with an hourly slot
//! vocabulary from 06:00 to 22:00, so bookings on arbitrary dates pass the
//! vocabulary check without per-test setup.

use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use entity::turf::TurfStatus;
use entity::types::{SlotCalendar, StringList};

use crate::factory::helpers::next_id;

pub const ALL_DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Hourly slot labels from 06:00 to 22:00, e.g. `"10:00-11:00"`.
pub fn hourly_slots() -> Vec<String> {
    (6..22)
        .map(|h| format!("{:02}:00-{:02}:00", h, h + 1))
        .collect()
}

fn default_timings() -> BTreeMap<String, Vec<String>> {
    ALL_DAYS
        .iter()
        .map(|day| (day.to_string(), hourly_slots()))
        .collect()
}

/// Factory for creating test turfs with customizable fields.
pub struct TurfFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: Uuid,
    name: String,
    city: String,
    state: String,
    pincode: String,
    sports: Vec<String>,
    available_sports: Vec<String>,
    capacity: i32,
    days: Vec<String>,
    timings: BTreeMap<String, Vec<String>>,
    status: TurfStatus,
}

impl<'a> TurfFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Turf {id}"),
            city: "pune".to_string(),
            state: "maharashtra".to_string(),
            pincode: "411001".to_string(),
            sports: vec!["football".to_string(), "cricket".to_string()],
            available_sports: vec!["football".to_string(), "cricket".to_string()],
            capacity: 10,
            days: ALL_DAYS.iter().map(|d| d.to_string()).collect(),
            timings: default_timings(),
            status: TurfStatus::Active,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn pincode(mut self, pincode: impl Into<String>) -> Self {
        self.pincode = pincode.into();
        self
    }

    pub fn available_sports(mut self, sports: Vec<String>) -> Self {
        self.available_sports = sports;
        self
    }

    pub fn days(mut self, days: Vec<String>) -> Self {
        self.days = days;
        self
    }

    pub fn timings(mut self, timings: BTreeMap<String, Vec<String>>) -> Self {
        self.timings = timings;
        self
    }

    pub fn status(mut self, status: TurfStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the turf entity into the database.
    pub async fn build(self) -> Result<entity::turf::Model, DbErr> {
        let now = Utc::now();

        entity::turf::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set("1 Stadium Road".to_string()),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            pincode: ActiveValue::Set(self.pincode),
            sports: ActiveValue::Set(StringList(self.sports)),
            available_sports: ActiveValue::Set(StringList(self.available_sports)),
            capacity: ActiveValue::Set(self.capacity),
            facilities: ActiveValue::Set(StringList::default()),
            equipments: ActiveValue::Set(StringList::default()),
            days: ActiveValue::Set(StringList(self.days)),
            timings: ActiveValue::Set(SlotCalendar(self.timings)),
            rules: ActiveValue::Set(StringList::default()),
            images: ActiveValue::Set(StringList::default()),
            payment_info: ActiveValue::Set(serde_json::json!({})),
            status: ActiveValue::Set(self.status),
            rating: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a turf with default values for the given owner.
pub async fn create_turf(
    db: &DatabaseConnection,
    owner_id: Uuid,
) -> Result<entity::turf::Model, DbErr> {
    TurfFactory::new(db, owner_id).build().await
}
