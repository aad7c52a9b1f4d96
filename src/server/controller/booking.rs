use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use uuid::Uuid;

use crate::{
    model::booking::{BookedSlotsDto, BookingDto, CreateBookingDto, SlotQuery, UpdateBookingDto},
    server::{
        controller::validate,
        data::{
            booking::{BookingRepository, CreateBookingParams},
            turf::TurfRepository,
        },
        error::{auth::AuthError, AppError},
        middleware::auth::{Actor, ActorKind},
        service::availability::AvailabilityService,
        state::AppState,
    },
};

/// POST /api/bookings
/// Book time slots on a turf for the authenticated user
pub async fn create_booking(
    State(state): State<AppState>,
    actor: Actor,
    Json(dto): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::User)?;
    validate(&dto)?;

    let booking = AvailabilityService::new(&state.db)
        .create_booking(
            actor.id,
            CreateBookingParams {
                turf_id: dto.turf_id,
                user_id: actor.id,
                date: dto.date,
                end_date: dto.end_date,
                sport: dto.sport,
                time_slots: dto.time_slots,
                cost: dto.cost,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(BookingDto::from_entity(booking))))
}

/// GET /api/bookings
/// List all bookings; requires authentication
pub async fn get_bookings(
    State(state): State<AppState>,
    _actor: Actor,
) -> Result<impl IntoResponse, AppError> {
    let bookings = BookingRepository::new(&state.db)
        .all()
        .await?
        .into_iter()
        .map(BookingDto::from_entity)
        .collect::<Vec<_>>();

    Ok(Json(bookings))
}

/// GET /api/bookings/{id}
/// Get a booking; visible to its user and the turf's owner
pub async fn get_booking(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    require_booking_party(&state, &actor, &booking).await?;

    Ok(Json(BookingDto::from_entity(booking)))
}

/// PUT /api/bookings/{id}
/// Apply a booking status transition
pub async fn update_booking(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let booking = AvailabilityService::new(&state.db)
        .transition_status(id, dto.status, actor)
        .await?;

    Ok(Json(BookingDto::from_entity(booking)))
}

/// DELETE /api/bookings/{id}
/// Cancel a booking, freeing its slots
pub async fn cancel_booking(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let booking = AvailabilityService::new(&state.db)
        .cancel_booking(id, actor)
        .await?;

    Ok(Json(BookingDto::from_entity(booking)))
}

/// GET /api/bookings/user/{id}
/// List the authenticated user's own bookings
pub async fn get_user_bookings(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::User)?;
    actor.require_id(id)?;

    let bookings = BookingRepository::new(&state.db)
        .by_user(id)
        .await?
        .into_iter()
        .map(BookingDto::from_entity)
        .collect::<Vec<_>>();

    Ok(Json(bookings))
}

/// GET /api/bookings/turf/{id}
/// List a turf's bookings; restricted to the turf's owner
pub async fn get_turf_bookings(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::Owner)?;

    let turf = TurfRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Turf not found".to_string()))?;
    actor.require_id(turf.owner_id)?;

    let bookings = BookingRepository::new(&state.db)
        .by_turf(id)
        .await?
        .into_iter()
        .map(BookingDto::from_entity)
        .collect::<Vec<_>>();

    Ok(Json(bookings))
}

/// GET /api/bookings/turf/{id}/time-slots?date=
/// Booked-slot map for a turf; the availability view clients book against
pub async fn get_booked_slots(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<SlotQuery>,
) -> Result<impl IntoResponse, AppError> {
    let booked: BookedSlotsDto = AvailabilityService::new(&state.db)
        .booked_slots(id, query.date)
        .await?;

    Ok(Json(booked))
}

/// Accepts the booking's user and the turf's owner, rejects everyone else.
async fn require_booking_party(
    state: &AppState,
    actor: &Actor,
    booking: &entity::booking::Model,
) -> Result<(), AppError> {
    match actor.kind {
        ActorKind::User if actor.id == booking.user_id => Ok(()),
        ActorKind::Owner => {
            let turf = TurfRepository::new(&state.db)
                .find_by_id(booking.turf_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Turf not found".to_string()))?;

            if actor.id == turf.owner_id {
                Ok(())
            } else {
                Err(AuthError::NotResourceOwner(actor.id).into())
            }
        }
        _ => Err(AuthError::NotResourceOwner(actor.id).into()),
    }
}
