use super::*;

/// Tests listing a turf's reviews.
///
/// Expected: only the queried turf's reviews, newest first
#[tokio::test]
async fn lists_turf_reviews_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let owner = factory::create_owner(db).await?;
    let turf = factory::create_turf(db, owner.id).await?;
    let other_turf = factory::create_turf(db, owner.id).await?;

    let first = ReviewFactory::new(db, turf.id, user.id)
        .rating(3)
        .build()
        .await?;
    let second = ReviewFactory::new(db, turf.id, user.id)
        .rating(5)
        .build()
        .await?;
    factory::create_review(db, other_turf.id, user.id).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.by_turf(turf.id).await?;

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].id, second.id);
    assert_eq!(reviews[1].id, first.id);

    Ok(())
}
