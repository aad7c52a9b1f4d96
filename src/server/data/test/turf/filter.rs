use super::*;
use test_utils::factory::turf::TurfFactory;

/// Tests filtering turfs by city.
///
/// Expected: only turfs in the requested city are returned
#[tokio::test]
async fn filters_by_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TurfOwner)
        .with_table(entity::prelude::Turf)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let in_pune = TurfFactory::new(db, owner.id).city("pune").build().await?;
    TurfFactory::new(db, owner.id).city("mumbai").build().await?;

    let repo = TurfRepository::new(db);
    let turfs = repo.filter(Some("pune"), None, None).await?;

    assert_eq!(turfs.len(), 1);
    assert_eq!(turfs[0].id, in_pune.id);

    Ok(())
}

/// Tests the sport filter against the bookable-sports list.
///
/// Expected: turfs that do not offer the sport are excluded
#[tokio::test]
async fn filters_by_available_sport() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TurfOwner)
        .with_table(entity::prelude::Turf)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let football_only = TurfFactory::new(db, owner.id)
        .available_sports(vec!["football".to_string()])
        .build()
        .await?;
    TurfFactory::new(db, owner.id)
        .available_sports(vec!["cricket".to_string()])
        .build()
        .await?;

    let repo = TurfRepository::new(db);
    let turfs = repo.filter(None, None, Some("football")).await?;

    assert_eq!(turfs.len(), 1);
    assert_eq!(turfs[0].id, football_only.id);

    Ok(())
}

/// Tests looking turfs up by postal code.
///
/// Expected: only turfs with the matching pincode are returned
#[tokio::test]
async fn finds_by_pincode() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TurfOwner)
        .with_table(entity::prelude::Turf)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let matching = TurfFactory::new(db, owner.id)
        .pincode("411001")
        .build()
        .await?;
    TurfFactory::new(db, owner.id)
        .pincode("400001")
        .build()
        .await?;

    let repo = TurfRepository::new(db);
    let turfs = repo.by_pincode("411001").await?;

    assert_eq!(turfs.len(), 1);
    assert_eq!(turfs[0].id, matching.id);

    Ok(())
}
