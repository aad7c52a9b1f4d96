//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// Each factory-created entity draws from this counter so unique columns
/// (email, phone) never collide within a test run.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a booking with its full dependency chain.
///
/// Inserts, in order: a user, a turf owner, a turf managed by that owner,
/// and a pending booking of the turf by the user. All entities use factory
/// defaults; use the individual factories to customize specific ones.
///
/// # Returns
/// - `Ok((user, owner, turf, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::turf_owner::Model,
        entity::turf::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let owner = crate::factory::owner::create_owner(db).await?;
    let turf = crate::factory::turf::create_turf(db, owner.id).await?;
    let booking = crate::factory::booking::create_booking(db, turf.id, user.id).await?;

    Ok((user, owner, turf, booking))
}

/// Creates a turf with its owner, without any bookings.
///
/// # Returns
/// - `Ok((owner, turf))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_turf_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::turf_owner::Model, entity::turf::Model), DbErr> {
    let owner = crate::factory::owner::create_owner(db).await?;
    let turf = crate::factory::turf::create_turf(db, owner.id).await?;

    Ok((owner, turf))
}
