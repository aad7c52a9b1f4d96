use super::*;

/// Tests attaching and detaching a turf id on the owner's managed list.
///
/// Expected: the id appears after add and is gone after remove
#[tokio::test]
async fn adds_and_removes_turf() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TurfOwner)
        .with_table(entity::prelude::Turf)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let turf = factory::create_turf(db, owner.id).await?;

    let repo = OwnerRepository::new(db);
    let updated = repo.add_turf(owner.id, turf.id).await?.unwrap();
    assert_eq!(updated.turf_ids.0, vec![turf.id]);

    let updated = repo.remove_turf(owner.id, turf.id).await?.unwrap();
    assert!(updated.turf_ids.0.is_empty());

    Ok(())
}

/// Tests that adding the same turf id twice does not duplicate it.
///
/// Expected: the managed list holds the id exactly once
#[tokio::test]
async fn add_turf_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TurfOwner)
        .with_table(entity::prelude::Turf)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let turf = factory::create_turf(db, owner.id).await?;

    let repo = OwnerRepository::new(db);
    repo.add_turf(owner.id, turf.id).await?;
    let updated = repo.add_turf(owner.id, turf.id).await?.unwrap();

    assert_eq!(updated.turf_ids.0, vec![turf.id]);

    Ok(())
}
