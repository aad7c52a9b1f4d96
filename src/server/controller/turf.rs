use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use uuid::Uuid;

use crate::{
    model::{
        api::MessageDto,
        turf::{CreateTurfDto, TurfDto, TurfFilterQuery, UpdateTurfDto},
    },
    server::{
        controller::validate,
        data::{
            owner::OwnerRepository,
            turf::{CreateTurfParams, TurfRepository, UpdateTurfParams},
        },
        error::AppError,
        middleware::auth::{Actor, ActorKind},
        state::AppState,
    },
};

/// POST /api/turfs
/// Register a turf under the authenticated owner
pub async fn create_turf(
    State(state): State<AppState>,
    actor: Actor,
    Json(dto): Json<CreateTurfDto>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::Owner)?;
    validate(&dto)?;
    check_sports_subset(&dto.sports, &dto.available_sports)?;
    check_timing_days(&dto.days, dto.timings.keys())?;

    let turf = TurfRepository::new(&state.db)
        .create(CreateTurfParams {
            owner_id: actor.id,
            name: dto.name,
            address: dto.address,
            city: dto.city,
            state: dto.state,
            pincode: dto.pincode,
            sports: dto.sports,
            available_sports: dto.available_sports,
            capacity: dto.capacity,
            facilities: dto.facilities,
            equipments: dto.equipments,
            days: dto.days,
            timings: dto.timings,
            rules: dto.rules,
            images: dto.images,
            payment_info: dto.payment_info,
            status: dto.status,
        })
        .await?;

    OwnerRepository::new(&state.db)
        .add_turf(actor.id, turf.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Owner not found".to_string()))?;

    Ok((StatusCode::CREATED, Json(TurfDto::from_entity(turf))))
}

/// GET /api/turfs
/// List all turfs
pub async fn get_turfs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let turfs = TurfRepository::new(&state.db)
        .all()
        .await?
        .into_iter()
        .map(TurfDto::from_entity)
        .collect::<Vec<_>>();

    Ok(Json(turfs))
}

/// GET /api/turfs/filter?city=&state=&sport=
/// List turfs matching the given location and sport filters
pub async fn filter_turfs(
    State(state): State<AppState>,
    Query(query): Query<TurfFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let turfs = TurfRepository::new(&state.db)
        .filter(
            query.city.as_deref(),
            query.state.as_deref(),
            query.sport.as_deref(),
        )
        .await?
        .into_iter()
        .map(TurfDto::from_entity)
        .collect::<Vec<_>>();

    Ok(Json(turfs))
}

/// GET /api/turfs/pincode/{pincode}
/// List turfs in the given postal code
pub async fn get_turfs_by_pincode(
    State(state): State<AppState>,
    Path(pincode): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let turfs = TurfRepository::new(&state.db)
        .by_pincode(&pincode)
        .await?
        .into_iter()
        .map(TurfDto::from_entity)
        .collect::<Vec<_>>();

    Ok(Json(turfs))
}

/// GET /api/turfs/{id}
/// Get a single turf
pub async fn get_turf(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let turf = TurfRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Turf not found".to_string()))?;

    Ok(Json(TurfDto::from_entity(turf)))
}

/// PUT /api/turfs/{id}
/// Update a turf; only its owner may do so
pub async fn update_turf(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateTurfDto>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::Owner)?;
    validate(&dto)?;

    let repo = TurfRepository::new(&state.db);
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Turf not found".to_string()))?;
    actor.require_id(existing.owner_id)?;

    // Subset and timing invariants hold against the values the turf will
    // have after the update, mixing provided and existing fields.
    let sports = dto.sports.as_deref().unwrap_or(&existing.sports.0);
    let available = dto
        .available_sports
        .as_deref()
        .unwrap_or(&existing.available_sports.0);
    check_sports_subset(sports, available)?;

    let days = dto.days.as_deref().unwrap_or(&existing.days.0);
    match &dto.timings {
        Some(timings) => check_timing_days(days, timings.keys())?,
        None => check_timing_days(days, existing.timings.0.keys())?,
    }

    let turf = repo
        .update(
            id,
            UpdateTurfParams {
                name: dto.name,
                address: dto.address,
                city: dto.city,
                state: dto.state,
                pincode: dto.pincode,
                sports: dto.sports,
                available_sports: dto.available_sports,
                capacity: dto.capacity,
                facilities: dto.facilities,
                equipments: dto.equipments,
                days: dto.days,
                timings: dto.timings,
                rules: dto.rules,
                images: dto.images,
                payment_info: dto.payment_info,
                status: dto.status,
                rating: dto.rating,
            },
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Turf not found".to_string()))?;

    Ok(Json(TurfDto::from_entity(turf)))
}

/// DELETE /api/turfs/{id}
/// Delete a turf and detach it from its owner's managed list
pub async fn delete_turf(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::Owner)?;

    let repo = TurfRepository::new(&state.db);
    let turf = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Turf not found".to_string()))?;
    actor.require_id(turf.owner_id)?;

    repo.delete(id).await?;
    OwnerRepository::new(&state.db)
        .remove_turf(turf.owner_id, id)
        .await?;

    Ok(Json(MessageDto {
        message: "Turf deleted".to_string(),
    }))
}

/// Bookable sports must be drawn from the sports the turf supports.
fn check_sports_subset(sports: &[String], available: &[String]) -> Result<(), AppError> {
    for sport in available {
        if !sports.contains(sport) {
            return Err(AppError::Validation(format!(
                "Available sport {sport} is not in the turf's sports list"
            )));
        }
    }
    Ok(())
}

/// Every timing entry must refer to one of the turf's open days.
fn check_timing_days<'a>(
    days: &[String],
    timing_days: impl Iterator<Item = &'a String>,
) -> Result<(), AppError> {
    for day in timing_days {
        if !days.contains(day) {
            return Err(AppError::Validation(format!(
                "Timings reference {day}, which is not an open day"
            )));
        }
    }
    Ok(())
}
