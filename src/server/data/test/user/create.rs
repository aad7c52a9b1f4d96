use super::*;

fn params(email: &str, phone: &str) -> CreateUserParams {
    CreateUserParams {
        name: "Asha".to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        password_hash: "hash".to_string(),
        address: "1 Test Street".to_string(),
        city: "pune".to_string(),
        state: "maharashtra".to_string(),
    }
}

/// Tests creating a new user account.
///
/// Expected: Ok with the account persisted and retrievable by email
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("asha@example.com", "9876500001")).await?;

    assert_eq!(user.email, "asha@example.com");

    let found = repo.find_by_email("asha@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that a second account reusing an email is rejected.
///
/// Expected: Err from the unique constraint on the email column
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("asha@example.com", "9876500001")).await?;

    let result = repo.create(params("asha@example.com", "9876500002")).await;
    assert!(result.is_err());

    Ok(())
}
