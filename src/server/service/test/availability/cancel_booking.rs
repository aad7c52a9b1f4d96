use super::*;

/// Tests a user cancelling their own booking.
///
/// Expected: Ok with status cancelled
#[tokio::test]
async fn user_cancels_own_booking() -> Result<(), AppError> {
    let db = booking_db().await;
    let (user, _, _, booking) = factory::helpers::create_booking_with_dependencies(&db).await?;

    let service = AvailabilityService::new(&db);
    let cancelled = service.cancel_booking(booking.id, user_actor(user.id)).await?;

    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    Ok(())
}

/// Tests the turf's owner cancelling a booking of their turf.
///
/// Expected: Ok with status cancelled
#[tokio::test]
async fn turf_owner_cancels_booking() -> Result<(), AppError> {
    let db = booking_db().await;
    let (_, owner, _, booking) = factory::helpers::create_booking_with_dependencies(&db).await?;

    let service = AvailabilityService::new(&db);
    let cancelled = service
        .cancel_booking(booking.id, owner_actor(owner.id))
        .await?;

    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    Ok(())
}

/// Tests that an unrelated user cannot cancel someone else's booking.
///
/// Expected: auth error and the booking left untouched
#[tokio::test]
async fn stranger_cannot_cancel() -> Result<(), AppError> {
    let db = booking_db().await;
    let (_, _, _, booking) = factory::helpers::create_booking_with_dependencies(&db).await?;
    let stranger = factory::create_user(&db).await?;

    let service = AvailabilityService::new(&db);
    let result = service
        .cancel_booking(booking.id, user_actor(stranger.id))
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::NotResourceOwner(_)))));

    let stored = crate::server::data::booking::BookingRepository::new(&db)
        .find_by_id(booking.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, BookingStatus::Pending);

    Ok(())
}

/// Tests that cancellation frees the booking's slots for a new request.
///
/// Expected: the same slots book successfully after the cancel
#[tokio::test]
async fn cancellation_frees_slots() -> Result<(), AppError> {
    let db = booking_db().await;
    let user = factory::create_user(&db).await?;
    let owner = factory::create_owner(&db).await?;
    let turf = factory::create_turf(&db, owner.id).await?;

    let service = AvailabilityService::new(&db);
    let booking = service
        .create_booking(user.id, params(turf.id, user.id, monday(), &["10:00-11:00"]))
        .await?;

    // Same slots are taken while the booking is live
    let result = service
        .create_booking(user.id, params(turf.id, user.id, monday(), &["10:00-11:00"]))
        .await;
    assert!(matches!(result, Err(AppError::SlotConflict { .. })));

    service.cancel_booking(booking.id, user_actor(user.id)).await?;

    let rebooked = service
        .create_booking(user.id, params(turf.id, user.id, monday(), &["10:00-11:00"]))
        .await?;
    assert_eq!(rebooked.status, BookingStatus::Pending);

    Ok(())
}

/// Tests cancelling a booking that does not exist.
///
/// Expected: NotFound
#[tokio::test]
async fn rejects_unknown_booking() -> Result<(), AppError> {
    let db = booking_db().await;
    let user = factory::create_user(&db).await?;

    let service = AvailabilityService::new(&db);
    let result = service
        .cancel_booking(Uuid::new_v4(), user_actor(user.id))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
