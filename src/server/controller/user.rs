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
        user::{AuthSessionDto, CreateUserDto, LoginDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::validate,
        data::user::{CreateUserParams, UpdateUserParams, UserRepository},
        error::{auth::AuthError, map_unique_violation, AppError},
        middleware::auth::{Actor, ActorKind},
        service::auth::{hash_password, verify_password},
        state::AppState,
    },
};

/// POST /api/users
/// Register a user account and issue a bearer token for it
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    validate(&dto)?;

    let user = UserRepository::new(&state.db)
        .create(CreateUserParams {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            password_hash: hash_password(&dto.password)?,
            address: dto.address,
            city: dto.city,
            state: dto.state,
        })
        .await
        .map_err(|e| {
            map_unique_violation(e, "An account with that email or phone already exists")
        })?;

    let token = state.tokens.issue(user.id, ActorKind::User)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthSessionDto {
            account: UserDto::from_entity(user),
            token,
        }),
    ))
}

/// POST /api/users/login
/// Verify credentials and issue a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    validate(&dto)?;

    let user = UserRepository::new(&state.db)
        .find_by_email(&dto.email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    verify_password(&dto.password, &user.password_hash)?;

    let token = state.tokens.issue(user.id, ActorKind::User)?;

    Ok(Json(AuthSessionDto {
        account: UserDto::from_entity(user),
        token,
    }))
}

/// GET /api/users/{id}
/// Get the authenticated user's own account
pub async fn get_user(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::User)?;
    actor.require_id(id)?;

    let user = UserRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(UserDto::from_entity(user)))
}

/// GET /api/users/email/{email}
/// Look up the authenticated user's own account by email
pub async fn get_user_by_email(
    State(state): State<AppState>,
    actor: Actor,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::User)?;

    let user = UserRepository::new(&state.db)
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    actor.require_id(user.id)?;

    Ok(Json(UserDto::from_entity(user)))
}

/// PUT /api/users/{id}
/// Update the authenticated user's own account
pub async fn update_user(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::User)?;
    actor.require_id(id)?;
    validate(&dto)?;

    let user = UserRepository::new(&state.db)
        .update(
            id,
            UpdateUserParams {
                name: dto.name,
                phone: dto.phone,
                address: dto.address,
                city: dto.city,
                state: dto.state,
            },
        )
        .await
        .map_err(|e| map_unique_violation(e, "An account with that phone already exists"))?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(UserDto::from_entity(user)))
}

/// DELETE /api/users/{id}
/// Delete the authenticated user's own account
pub async fn delete_user(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::User)?;
    actor.require_id(id)?;

    let deleted = UserRepository::new(&state.db).delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(Json(MessageDto {
        message: "Account deleted".to_string(),
    }))
}
