//! The availability engine.
//!
//! Owns the mapping from (turf, date) to booked time slots: answers
//! free/occupied queries, accepts or rejects new bookings based on overlap
//! with existing ones, and enforces the booking status machine.
//!
//! Booking creation runs its read-check-write sequence inside a single
//! transaction (SERIALIZABLE on Postgres) so two concurrent requests for
//! overlapping slots on the same turf and date cannot both succeed. A
//! rejected overlap is a business outcome, not a transient fault; nothing
//! here retries.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate, Weekday};
use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbBackend, IsolationLevel, TransactionTrait,
};
use uuid::Uuid;

use entity::booking::BookingStatus;
use entity::turf::TurfStatus;

use crate::server::{
    data::booking::{BookingRepository, CreateBookingParams},
    data::turf::TurfRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::{Actor, ActorKind},
};

/// Booked slot labels per calendar date.
pub type BookedSlots = BTreeMap<NaiveDate, BTreeSet<String>>;

pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the booked-slot map for a turf: every calendar day covered by
    /// a non-cancelled booking, mapped to the union of the slot labels
    /// claimed on that day. Bookings sharing a date merge; nothing is
    /// overwritten. With a date filter the map holds exactly that day, with
    /// an empty set when nothing is booked.
    pub async fn booked_slots(
        &self,
        turf_id: Uuid,
        date: Option<NaiveDate>,
    ) -> Result<BookedSlots, AppError> {
        let turf_repo = TurfRepository::new(self.db);
        turf_repo
            .find_by_id(turf_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Turf not found".to_string()))?;

        let bookings = BookingRepository::new(self.db)
            .active_by_turf(turf_id)
            .await?;

        let mut booked: BookedSlots = BTreeMap::new();
        for booking in bookings {
            for day in days_in(booking.date, booking.end_date) {
                booked
                    .entry(day)
                    .or_default()
                    .extend(booking.time_slots.0.iter().cloned());
            }
        }

        if let Some(date) = date {
            let slots = booked.remove(&date).unwrap_or_default();
            booked = BTreeMap::from([(date, slots)]);
        }

        Ok(booked)
    }

    /// Creates a booking, rejecting it when any requested slot is already
    /// claimed by a non-cancelled booking with an intersecting date range.
    ///
    /// # Returns
    /// - `Ok(model)` - The persisted booking, status `pending`
    /// - `Err(SlotConflict)` - Overlap detected; names the conflicting slot
    ///   labels and the existing booking id
    /// - `Err(Validation)` / `Err(NotFound)` - Input constraint violated
    pub async fn create_booking(
        &self,
        user_id: Uuid,
        params: CreateBookingParams,
    ) -> Result<entity::booking::Model, AppError> {
        if params.date > params.end_date {
            return Err(AppError::Validation(
                "Booking date must not be after its end date".to_string(),
            ));
        }
        if params.time_slots.is_empty() {
            return Err(AppError::Validation(
                "At least one time slot is required".to_string(),
            ));
        }
        let mut seen = BTreeSet::new();
        for slot in &params.time_slots {
            if !seen.insert(slot.as_str()) {
                return Err(AppError::Validation(format!("Duplicate time slot {slot}")));
            }
        }

        let txn = self.begin_serializable().await?;

        let turf = TurfRepository::new(&txn)
            .find_by_id(params.turf_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Turf not found".to_string()))?;

        if turf.status != TurfStatus::Active {
            return Err(AppError::Validation(
                "Turf is not open for booking".to_string(),
            ));
        }
        if !turf.available_sports.contains(&params.sport) {
            return Err(AppError::Validation(format!(
                "Turf does not offer {}",
                params.sport
            )));
        }
        validate_slot_vocabulary(&turf, &params)?;

        let booking_repo = BookingRepository::new(&txn);
        let existing = booking_repo
            .active_overlapping(params.turf_id, params.date, params.end_date)
            .await?;

        for other in &existing {
            let conflicting: Vec<String> = other
                .time_slots
                .0
                .iter()
                .filter(|slot| params.time_slots.contains(slot))
                .cloned()
                .collect();

            if !conflicting.is_empty() {
                // Dropping the transaction rolls it back.
                return Err(AppError::SlotConflict {
                    booking_id: other.id,
                    slots: conflicting,
                });
            }
        }

        let booking = booking_repo.create(CreateBookingParams {
            user_id,
            ..params
        })
        .await?;

        txn.commit().await?;

        Ok(booking)
    }

    /// Cancels a booking on behalf of its user or the turf's owner. The
    /// booking's slots become available to new requests immediately, since
    /// cancelled bookings are excluded from overlap checks and slot queries.
    pub async fn cancel_booking(
        &self,
        booking_id: Uuid,
        actor: Actor,
    ) -> Result<entity::booking::Model, AppError> {
        self.transition_status(booking_id, BookingStatus::Cancelled, actor)
            .await
    }

    /// Applies a booking status transition, enforcing the state machine:
    /// `pending → confirmed` (turf owner only) and `pending|confirmed →
    /// cancelled` (booking user or turf owner). `cancelled` is terminal.
    pub async fn transition_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
        actor: Actor,
    ) -> Result<entity::booking::Model, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let booking = booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let turf = TurfRepository::new(self.db)
            .find_by_id(booking.turf_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Turf not found".to_string()))?;

        let is_booking_user = actor.kind == ActorKind::User && actor.id == booking.user_id;
        let is_turf_owner = actor.kind == ActorKind::Owner && actor.id == turf.owner_id;

        match (booking.status, status) {
            (BookingStatus::Pending, BookingStatus::Confirmed) => {
                if !is_turf_owner {
                    return Err(AuthError::NotResourceOwner(actor.id).into());
                }
            }
            (BookingStatus::Pending | BookingStatus::Confirmed, BookingStatus::Cancelled) => {
                if !is_booking_user && !is_turf_owner {
                    return Err(AuthError::NotResourceOwner(actor.id).into());
                }
            }
            (from, to) => {
                return Err(AppError::Validation(format!(
                    "Booking cannot move from {from:?} to {to:?}"
                )));
            }
        }

        let updated = booking_repo
            .set_status(booking_id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        Ok(updated)
    }

    /// Opens the transaction the overlap check runs in. Postgres gets
    /// SERIALIZABLE isolation; SQLite's single-writer lock already
    /// serializes the read-check-write sequence.
    async fn begin_serializable(&self) -> Result<DatabaseTransaction, AppError> {
        let txn = match self.db.get_database_backend() {
            DbBackend::Postgres => {
                self.db
                    .begin_with_config(Some(IsolationLevel::Serializable), None)
                    .await?
            }
            _ => self.db.begin().await?,
        };
        Ok(txn)
    }
}

/// Checks every requested slot against the turf's vocabulary for every day
/// of the booking window. The turf must be open on each day and define each
/// requested label for that day.
fn validate_slot_vocabulary(
    turf: &entity::turf::Model,
    params: &CreateBookingParams,
) -> Result<(), AppError> {
    for day in days_in(params.date, params.end_date) {
        let name = day_name(day.weekday());

        if !turf.days.contains(name) {
            return Err(AppError::Validation(format!("Turf is closed on {name}")));
        }

        let vocabulary = turf
            .timings
            .slots_for(name)
            .ok_or_else(|| AppError::Validation(format!("Turf has no time slots on {name}")))?;

        for slot in &params.time_slots {
            if !vocabulary.contains(slot) {
                return Err(AppError::Validation(format!(
                    "Time slot {slot} is not offered on {name}"
                )));
            }
        }
    }

    Ok(())
}

/// Inclusive iterator over the calendar days of a booking window.
fn days_in(date: NaiveDate, end_date: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    date.iter_days().take_while(move |d| *d <= end_date)
}

fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}
