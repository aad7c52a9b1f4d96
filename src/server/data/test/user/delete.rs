use super::*;

/// Tests deleting an existing user account.
///
/// Expected: Ok(true) and the account is gone
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(user.id).await?);
    assert!(repo.find_by_id(user.id).await?.is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.delete(uuid::Uuid::new_v4()).await?);

    Ok(())
}
