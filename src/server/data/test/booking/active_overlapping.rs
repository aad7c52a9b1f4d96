use super::*;

/// Tests that the overlap query matches intersecting date ranges.
///
/// Expected: a booking spanning the queried window is returned
#[tokio::test]
async fn matches_intersecting_ranges() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let owner = factory::create_owner(db).await?;
    let turf = factory::create_turf(db, owner.id).await?;

    let booking = BookingFactory::new(db, turf.id, user.id)
        .date_range(day(2026, 9, 10), day(2026, 9, 12))
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    // Window overlapping the middle of the booking
    let hits = repo
        .active_overlapping(turf.id, day(2026, 9, 12), day(2026, 9, 14))
        .await?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, booking.id);

    // Window strictly after the booking
    let hits = repo
        .active_overlapping(turf.id, day(2026, 9, 13), day(2026, 9, 14))
        .await?;
    assert!(hits.is_empty());

    Ok(())
}

/// Tests that cancelled bookings never count as overlapping.
///
/// Expected: a cancelled booking on the same dates is not returned
#[tokio::test]
async fn excludes_cancelled_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let owner = factory::create_owner(db).await?;
    let turf = factory::create_turf(db, owner.id).await?;

    BookingFactory::new(db, turf.id, user.id)
        .date(day(2026, 9, 10))
        .status(BookingStatus::Cancelled)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let hits = repo
        .active_overlapping(turf.id, day(2026, 9, 10), day(2026, 9, 10))
        .await?;

    assert!(hits.is_empty());

    Ok(())
}

/// Tests that bookings on other turfs are ignored.
///
/// Expected: only the queried turf's bookings are returned
#[tokio::test]
async fn scopes_to_the_turf() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let owner = factory::create_owner(db).await?;
    let turf = factory::create_turf(db, owner.id).await?;
    let other_turf = factory::create_turf(db, owner.id).await?;

    BookingFactory::new(db, other_turf.id, user.id)
        .date(day(2026, 9, 10))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let hits = repo
        .active_overlapping(turf.id, day(2026, 9, 10), day(2026, 9, 10))
        .await?;

    assert!(hits.is_empty());

    Ok(())
}
