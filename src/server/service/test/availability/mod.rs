use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use entity::booking::BookingStatus;

use crate::server::{
    data::booking::CreateBookingParams,
    error::{auth::AuthError, AppError},
    middleware::auth::{Actor, ActorKind},
    service::availability::AvailabilityService,
};
use test_utils::{builder::TestBuilder, factory, factory::booking::BookingFactory};

mod booked_slots;
mod cancel_booking;
mod transition_status;

// 2026-09-07 is a Monday; tests that depend on the weekday build on it.
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 7).unwrap()
}

fn tuesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 8).unwrap()
}

fn user_actor(id: Uuid) -> Actor {
    Actor {
        id,
        kind: ActorKind::User,
    }
}

fn owner_actor(id: Uuid) -> Actor {
    Actor {
        id,
        kind: ActorKind::Owner,
    }
}

fn slots(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

fn params(turf_id: Uuid, user_id: Uuid, date: NaiveDate, labels: &[&str]) -> CreateBookingParams {
    CreateBookingParams {
        turf_id,
        user_id,
        date,
        end_date: date,
        sport: "football".to_string(),
        time_slots: slots(labels),
        cost: 500,
    }
}

async fn booking_db() -> DatabaseConnection {
    TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap()
        .db
        .unwrap()
}
