use super::*;

/// Tests the turf owner confirming a pending booking.
///
/// Expected: Ok with status confirmed
#[tokio::test]
async fn owner_confirms_pending_booking() -> Result<(), AppError> {
    let db = booking_db().await;
    let (_, owner, _, booking) = factory::helpers::create_booking_with_dependencies(&db).await?;

    let service = AvailabilityService::new(&db);
    let confirmed = service
        .transition_status(booking.id, BookingStatus::Confirmed, owner_actor(owner.id))
        .await?;

    assert_eq!(confirmed.status, BookingStatus::Confirmed);

    Ok(())
}

/// Tests that the booking's user cannot confirm their own booking.
///
/// Expected: auth error; confirmation is the owner's call
#[tokio::test]
async fn user_cannot_confirm() -> Result<(), AppError> {
    let db = booking_db().await;
    let (user, _, _, booking) = factory::helpers::create_booking_with_dependencies(&db).await?;

    let service = AvailabilityService::new(&db);
    let result = service
        .transition_status(booking.id, BookingStatus::Confirmed, user_actor(user.id))
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests cancelling a confirmed booking.
///
/// Expected: Ok; confirmed bookings can still be cancelled
#[tokio::test]
async fn confirmed_booking_can_be_cancelled() -> Result<(), AppError> {
    let db = booking_db().await;
    let (user, owner, _, booking) = factory::helpers::create_booking_with_dependencies(&db).await?;

    let service = AvailabilityService::new(&db);
    service
        .transition_status(booking.id, BookingStatus::Confirmed, owner_actor(owner.id))
        .await?;
    let cancelled = service
        .transition_status(booking.id, BookingStatus::Cancelled, user_actor(user.id))
        .await?;

    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    Ok(())
}

/// Tests that no transition leaves the cancelled state.
///
/// Expected: Validation error for both confirm and re-cancel
#[tokio::test]
async fn cancelled_is_terminal() -> Result<(), AppError> {
    let db = booking_db().await;
    let (user, owner, _, booking) = factory::helpers::create_booking_with_dependencies(&db).await?;

    let service = AvailabilityService::new(&db);
    service
        .cancel_booking(booking.id, user_actor(user.id))
        .await?;

    let result = service
        .transition_status(booking.id, BookingStatus::Confirmed, owner_actor(owner.id))
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    let result = service
        .transition_status(booking.id, BookingStatus::Cancelled, user_actor(user.id))
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that a booking cannot be moved back to pending.
///
/// Expected: Validation error
#[tokio::test]
async fn cannot_return_to_pending() -> Result<(), AppError> {
    let db = booking_db().await;
    let (_, owner, _, booking) = factory::helpers::create_booking_with_dependencies(&db).await?;

    let service = AvailabilityService::new(&db);
    service
        .transition_status(booking.id, BookingStatus::Confirmed, owner_actor(owner.id))
        .await?;

    let result = service
        .transition_status(booking.id, BookingStatus::Pending, owner_actor(owner.id))
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
