use super::*;

/// Tests deleting a user row.
///
/// Expected: Ok(true), then the user can no longer be found
#[tokio::test]
async fn deletes_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(created.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(created.id).await?.is_none());
    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests deleting a missing user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!UserRepository::new(db).delete(42).await?);

    Ok(())
}
