use super::*;

/// Tests creating a turf owner account.
///
/// Expected: Ok with an empty managed-turf list and the account
/// retrievable by email
#[tokio::test]
async fn creates_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TurfOwner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OwnerRepository::new(db);
    let owner = repo
        .create(CreateOwnerParams {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            phone: "9123400001".to_string(),
            password_hash: "hash".to_string(),
            address: "2 Owner Lane".to_string(),
            city: "pune".to_string(),
            state: "maharashtra".to_string(),
            id_proof: "ID-PROOF-1".to_string(),
            payment_info: serde_json::json!({"upi": "ravi@bank"}),
        })
        .await?;

    assert!(owner.turf_ids.0.is_empty());

    let found = repo.find_by_email("ravi@example.com").await?;
    assert_eq!(found.map(|o| o.id), Some(owner.id));

    Ok(())
}
