use super::*;

/// Tests a partial profile update.
///
/// Verifies that only the provided fields change.
///
/// Expected: Ok(Some(User)) with the new username and the old email
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let user = UserRepository::new(db)
        .update(
            created.id,
            UpdateUserParams {
                username: Some("renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(user.username, "renamed");
    assert_eq!(user.email, created.email);

    Ok(())
}

/// Tests clearing the avatar.
///
/// Expected: Ok(Some(User)) with avatar_url None
#[tokio::test]
async fn clears_avatar() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .avatar_url("https://example.com/me.png")
        .build()
        .await?;

    let user = UserRepository::new(db)
        .update(
            created.id,
            UpdateUserParams {
                avatar_url: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(user.avatar_url.is_none());

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .update(
            999,
            UpdateUserParams {
                active: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert!(user.is_none());

    Ok(())
}
