use super::*;

/// Tests that an update only touches the provided fields.
///
/// Expected: Ok with the new city applied and the name unchanged
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParams {
                city: Some("mumbai".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.city, "mumbai");
    assert_eq!(updated.name, user.name);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(uuid::Uuid::new_v4(), UpdateUserParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
