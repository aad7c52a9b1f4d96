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
        review::{CreateReviewDto, ReviewDto},
    },
    server::{
        controller::validate,
        data::{
            review::{CreateReviewParams, ReviewRepository},
            turf::TurfRepository,
        },
        error::AppError,
        middleware::auth::{Actor, ActorKind},
        state::AppState,
    },
};

/// POST /api/reviews
/// Post a review of a turf as the authenticated user
pub async fn create_review(
    State(state): State<AppState>,
    actor: Actor,
    Json(dto): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::User)?;
    validate(&dto)?;

    TurfRepository::new(&state.db)
        .find_by_id(dto.turf_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Turf not found".to_string()))?;

    let review = ReviewRepository::new(&state.db)
        .create(CreateReviewParams {
            turf_id: dto.turf_id,
            user_id: actor.id,
            rating: dto.rating,
            comment: dto.comment,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ReviewDto::from_entity(review))))
}

/// GET /api/reviews
/// List all reviews, newest first
pub async fn get_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewRepository::new(&state.db)
        .all()
        .await?
        .into_iter()
        .map(ReviewDto::from_entity)
        .collect::<Vec<_>>();

    Ok(Json(reviews))
}

/// GET /api/reviews/{id}
/// Get a single review
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let review = ReviewRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

    Ok(Json(ReviewDto::from_entity(review)))
}

/// GET /api/reviews/turf/{id}
/// List a turf's reviews, newest first
pub async fn get_turf_reviews(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewRepository::new(&state.db)
        .by_turf(id)
        .await?
        .into_iter()
        .map(ReviewDto::from_entity)
        .collect::<Vec<_>>();

    Ok(Json(reviews))
}

/// DELETE /api/reviews/{id}
/// Delete a review; only its author may do so
pub async fn delete_review(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    actor.require_kind(ActorKind::User)?;

    let repo = ReviewRepository::new(&state.db);
    let review = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;
    actor.require_id(review.user_id)?;

    repo.delete(id).await?;

    Ok(Json(MessageDto {
        message: "Review deleted".to_string(),
    }))
}
