use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some(User)) with the matching id
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("found@example.com")
        .build()
        .await?;

    let user = UserRepository::new(db)
        .find_by_email("found@example.com")
        .await?;

    assert_eq!(user.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests looking up an email with no account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let user = UserRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(user.is_none());

    Ok(())
}
