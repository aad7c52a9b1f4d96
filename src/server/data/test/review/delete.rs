use super::*;

/// Tests deleting a review.
///
/// Expected: Ok(true) and the review is gone
#[tokio::test]
async fn deletes_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let owner = factory::create_owner(db).await?;
    let turf = factory::create_turf(db, owner.id).await?;
    let review = factory::create_review(db, turf.id, user.id).await?;

    let repo = ReviewRepository::new(db);
    assert!(repo.delete(review.id).await?);
    assert!(repo.find_by_id(review.id).await?.is_none());

    Ok(())
}

/// Tests deleting a review that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    assert!(!repo.delete(uuid::Uuid::new_v4()).await?);

    Ok(())
}
