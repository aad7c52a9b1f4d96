use super::*;
use std::collections::BTreeSet;

/// Tests that bookings sharing a date merge into one slot set.
///
/// Expected: the date maps to the union of both bookings' labels
#[tokio::test]
async fn merges_slots_across_bookings() -> Result<(), AppError> {
    let db = booking_db().await;
    let user = factory::create_user(&db).await?;
    let owner = factory::create_owner(&db).await?;
    let turf = factory::create_turf(&db, owner.id).await?;

    BookingFactory::new(&db, turf.id, user.id)
        .date(monday())
        .time_slots(slots(&["10:00-11:00"]))
        .build()
        .await?;
    BookingFactory::new(&db, turf.id, user.id)
        .date(monday())
        .time_slots(slots(&["14:00-15:00", "15:00-16:00"]))
        .build()
        .await?;

    let service = AvailabilityService::new(&db);
    let booked = service.booked_slots(turf.id, None).await?;

    let expected: BTreeSet<String> = slots(&["10:00-11:00", "14:00-15:00", "15:00-16:00"])
        .into_iter()
        .collect();
    assert_eq!(booked.get(&monday()), Some(&expected));

    Ok(())
}

/// Tests that a multi-day booking marks every day in its range.
///
/// Expected: each covered date maps to the booking's slot set
#[tokio::test]
async fn covers_every_day_of_a_range() -> Result<(), AppError> {
    let db = booking_db().await;
    let user = factory::create_user(&db).await?;
    let owner = factory::create_owner(&db).await?;
    let turf = factory::create_turf(&db, owner.id).await?;

    BookingFactory::new(&db, turf.id, user.id)
        .date_range(monday(), tuesday())
        .time_slots(slots(&["09:00-10:00"]))
        .build()
        .await?;

    let service = AvailabilityService::new(&db);
    let booked = service.booked_slots(turf.id, None).await?;

    let expected: BTreeSet<String> = slots(&["09:00-10:00"]).into_iter().collect();
    assert_eq!(booked.len(), 2);
    assert_eq!(booked.get(&monday()), Some(&expected));
    assert_eq!(booked.get(&tuesday()), Some(&expected));

    Ok(())
}

/// Tests the single-date filter.
///
/// Expected: exactly one entry; an empty set when nothing is booked
#[tokio::test]
async fn date_filter_returns_single_entry() -> Result<(), AppError> {
    let db = booking_db().await;
    let user = factory::create_user(&db).await?;
    let owner = factory::create_owner(&db).await?;
    let turf = factory::create_turf(&db, owner.id).await?;

    BookingFactory::new(&db, turf.id, user.id)
        .date(monday())
        .time_slots(slots(&["10:00-11:00"]))
        .build()
        .await?;

    let service = AvailabilityService::new(&db);

    let booked = service.booked_slots(turf.id, Some(monday())).await?;
    assert_eq!(booked.len(), 1);
    let expected: BTreeSet<String> = slots(&["10:00-11:00"]).into_iter().collect();
    assert_eq!(booked.get(&monday()), Some(&expected));

    let booked = service.booked_slots(turf.id, Some(tuesday())).await?;
    assert_eq!(booked.len(), 1);
    assert_eq!(booked.get(&tuesday()), Some(&BTreeSet::new()));

    Ok(())
}

/// Tests that cancelled bookings never appear in the map.
///
/// Expected: an empty map when the only booking is cancelled
#[tokio::test]
async fn excludes_cancelled_bookings() -> Result<(), AppError> {
    let db = booking_db().await;
    let user = factory::create_user(&db).await?;
    let owner = factory::create_owner(&db).await?;
    let turf = factory::create_turf(&db, owner.id).await?;

    BookingFactory::new(&db, turf.id, user.id)
        .date(monday())
        .status(BookingStatus::Cancelled)
        .build()
        .await?;

    let service = AvailabilityService::new(&db);
    let booked = service.booked_slots(turf.id, None).await?;

    assert!(booked.is_empty());

    Ok(())
}

/// Tests that the query is read-only.
///
/// Expected: two consecutive queries return identical maps
#[tokio::test]
async fn repeated_queries_are_identical() -> Result<(), AppError> {
    let db = booking_db().await;
    let (_, _, turf, _) = factory::helpers::create_booking_with_dependencies(&db).await?;

    let service = AvailabilityService::new(&db);
    let first = service.booked_slots(turf.id, None).await?;
    let second = service.booked_slots(turf.id, None).await?;

    assert_eq!(first, second);

    Ok(())
}

/// Tests querying a turf that does not exist.
///
/// Expected: NotFound
#[tokio::test]
async fn rejects_unknown_turf() -> Result<(), AppError> {
    let db = booking_db().await;

    let service = AvailabilityService::new(&db);
    let result = service.booked_slots(Uuid::new_v4(), None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
