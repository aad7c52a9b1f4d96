use axum::{
    routing::{get, post, put},
    Router,
};

use crate::server::{
    controller::{booking, owner, review, turf, user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(owner_routes())
        .merge(turf_routes())
        .merge(booking_routes())
        .merge(review_routes())
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(user::register))
        .route("/api/users/login", post(user::login))
        .route("/api/users/email/{email}", get(user::get_user_by_email))
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
}

fn owner_routes() -> Router<AppState> {
    Router::new()
        .route("/api/owners", post(owner::register))
        .route("/api/owners/login", post(owner::login))
        .route("/api/owners/email/{email}", get(owner::get_owner_by_email))
        .route(
            "/api/owners/{id}",
            get(owner::get_owner)
                .put(owner::update_owner)
                .delete(owner::delete_owner),
        )
        .route(
            "/api/owners/{id}/turfs/{turf_id}",
            put(owner::add_turf).delete(owner::remove_turf),
        )
}

fn turf_routes() -> Router<AppState> {
    Router::new()
        .route("/api/turfs", get(turf::get_turfs).post(turf::create_turf))
        .route("/api/turfs/filter", get(turf::filter_turfs))
        .route("/api/turfs/pincode/{pincode}", get(turf::get_turfs_by_pincode))
        .route(
            "/api/turfs/{id}",
            get(turf::get_turf)
                .put(turf::update_turf)
                .delete(turf::delete_turf),
        )
}

fn booking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/bookings",
            get(booking::get_bookings).post(booking::create_booking),
        )
        .route("/api/bookings/user/{id}", get(booking::get_user_bookings))
        .route("/api/bookings/turf/{id}", get(booking::get_turf_bookings))
        .route(
            "/api/bookings/turf/{id}/time-slots",
            get(booking::get_booked_slots),
        )
        .route(
            "/api/bookings/{id}",
            get(booking::get_booking)
                .put(booking::update_booking)
                .delete(booking::cancel_booking),
        )
}

fn review_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/reviews",
            get(review::get_reviews).post(review::create_review),
        )
        .route("/api/reviews/turf/{id}", get(review::get_turf_reviews))
        .route(
            "/api/reviews/{id}",
            get(review::get_review).delete(review::delete_review),
        )
}
