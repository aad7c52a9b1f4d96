use super::*;

/// Tests setting a booking's status.
///
/// Expected: Ok(Some) with the new status persisted
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let updated = repo
        .set_status(booking.id, BookingStatus::Confirmed)
        .await?
        .unwrap();

    assert_eq!(updated.status, BookingStatus::Confirmed);

    let stored = repo.find_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Confirmed);

    Ok(())
}

/// Tests setting the status of a booking that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let result = repo
        .set_status(uuid::Uuid::new_v4(), BookingStatus::Cancelled)
        .await?;

    assert!(result.is_none());

    Ok(())
}
