use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use uuid::Uuid;

use crate::{
    model::{
        api::MessageDto,
        owner::{CreateOwnerDto, OwnerDto, OwnerSessionDto, UpdateOwnerDto},
        user::LoginDto,
    },
    server::{
        controller::validate,
        data::{
            owner::{CreateOwnerParams, OwnerRepository, UpdateOwnerParams},
            turf::TurfRepository,
        },
        error::{auth::AuthError, map_unique_violation, AppError},
        middleware::auth::{Actor, ActorKind},
        service::auth::{hash_password, verify_password},
        state::AppState,
    },
};

/// POST /api/owners
/// Register a turf owner account and issue a bearer token for it
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<CreateOwnerDto>,
) -> Result<impl IntoResponse, AppError> {
    validate(&dto)?;

    let owner = OwnerRepository::new(&state.db)
        .create(CreateOwnerParams {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            password_hash: hash_password(&dto.password)?,
            address: dto.address,
            city: dto.city,
            state: dto.state,
            id_proof: dto.id_proof,
            payment_info: dto.payment_info,
        })
        .await
        .map_err(|e| {
            map_unique_violation(e, "An account with that email or phone already exists")
        })?;

    let token = state.tokens.issue(owner.id, ActorKind::Owner)?;

    Ok((
        StatusCode::CREATED,
        Json(OwnerSessionDto {
            account: OwnerDto::from_entity(owner),
            token,
        }),
    ))
}

/// POST /api/owners/login
/// Verify credentials and issue a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    validate(&dto)?;

    let owner = OwnerRepository::new(&state.db)
        .find_by_email(&dto.email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    verify_password(&dto.password, &owner.password_hash)?;

    let token = state.tokens.issue(owner.id, ActorKind::Owner)?;

    Ok(Json(OwnerSessionDto {
        account: OwnerDto::from_entity(owner),
        token,
    }))
}

/// GET /api/owners/{id}
/// Get the authenticated owner's own account
pub async fn get_owner(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::Owner)?;
    actor.require_id(id)?;

    let owner = OwnerRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Owner not found".to_string()))?;

    Ok(Json(OwnerDto::from_entity(owner)))
}

/// GET /api/owners/email/{email}
/// Look up the authenticated owner's own account by email
pub async fn get_owner_by_email(
    State(state): State<AppState>,
    actor: Actor,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::Owner)?;

    let owner = OwnerRepository::new(&state.db)
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::NotFound("Owner not found".to_string()))?;

    actor.require_id(owner.id)?;

    Ok(Json(OwnerDto::from_entity(owner)))
}

/// PUT /api/owners/{id}
/// Update the authenticated owner's own account
pub async fn update_owner(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateOwnerDto>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::Owner)?;
    actor.require_id(id)?;
    validate(&dto)?;

    let owner = OwnerRepository::new(&state.db)
        .update(
            id,
            UpdateOwnerParams {
                name: dto.name,
                phone: dto.phone,
                address: dto.address,
                city: dto.city,
                state: dto.state,
                id_proof: dto.id_proof,
                payment_info: dto.payment_info,
            },
        )
        .await
        .map_err(|e| map_unique_violation(e, "An account with that phone already exists"))?
        .ok_or_else(|| AppError::NotFound("Owner not found".to_string()))?;

    Ok(Json(OwnerDto::from_entity(owner)))
}

/// DELETE /api/owners/{id}
/// Delete the authenticated owner's own account
pub async fn delete_owner(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::Owner)?;
    actor.require_id(id)?;

    let deleted = OwnerRepository::new(&state.db).delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Owner not found".to_string()));
    }

    Ok(Json(MessageDto {
        message: "Account deleted".to_string(),
    }))
}

/// PUT /api/owners/{id}/turfs/{turf_id}
/// Attach an existing turf to the owner's managed list
pub async fn add_turf(
    State(state): State<AppState>,
    actor: Actor,
    Path((id, turf_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::Owner)?;
    actor.require_id(id)?;

    let turf = TurfRepository::new(&state.db)
        .find_by_id(turf_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Turf not found".to_string()))?;
    actor.require_id(turf.owner_id)?;

    let owner = OwnerRepository::new(&state.db)
        .add_turf(id, turf_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Owner not found".to_string()))?;

    Ok(Json(OwnerDto::from_entity(owner)))
}

/// DELETE /api/owners/{id}/turfs/{turf_id}
/// Detach a turf from the owner's managed list
pub async fn remove_turf(
    State(state): State<AppState>,
    actor: Actor,
    Path((id, turf_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::Owner)?;
    actor.require_id(id)?;

    let owner = OwnerRepository::new(&state.db)
        .remove_turf(id, turf_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Owner not found".to_string()))?;

    Ok(Json(OwnerDto::from_entity(owner)))
}
