use super::*;

fn params(username: &str, email: &str) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "salt$digest".to_string(),
        role: Role::User,
    }
}

/// Tests creating a new user.
///
/// Verifies that the repository inserts an active account with the given role
/// and no avatar.
///
/// Expected: Ok(User) with active set and role User
#[tokio::test]
async fn creates_active_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(params("alice", "alice@example.com"))
        .await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, Role::User);
    assert!(user.active);
    assert!(user.avatar_url.is_none());

    Ok(())
}

/// Tests the unique index on email.
///
/// Verifies that a second account with the same email is rejected with a
/// unique constraint violation.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("alice", "same@example.com")).await?;

    let result = repo.create(params("bob", "same@example.com")).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

/// Tests the unique index on username.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("alice", "one@example.com")).await?;

    let result = repo.create(params("alice", "two@example.com")).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
