use super::*;
use entity::turf::TurfStatus;

/// Tests that an update only touches the provided fields.
///
/// Expected: Ok with the status applied and other fields unchanged
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TurfOwner)
        .with_table(entity::prelude::Turf)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let turf = factory::create_turf(db, owner.id).await?;

    let repo = TurfRepository::new(db);
    let updated = repo
        .update(
            turf.id,
            UpdateTurfParams {
                status: Some(TurfStatus::Inactive),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, TurfStatus::Inactive);
    assert_eq!(updated.name, turf.name);
    assert_eq!(updated.timings, turf.timings);

    Ok(())
}

/// Tests updating a turf that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_turf() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TurfOwner)
        .with_table(entity::prelude::Turf)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TurfRepository::new(db);
    let result = repo
        .update(uuid::Uuid::new_v4(), UpdateTurfParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
