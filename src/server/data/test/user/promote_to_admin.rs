use super::*;

/// Tests promoting an existing account.
///
/// Expected: Ok(AdminPromotion::Promoted) and the stored role becomes Admin
#[tokio::test]
async fn promotes_matching_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("boss@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let promotion = repo.promote_to_admin("boss@example.com").await?;
    let user = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(promotion, AdminPromotion::Promoted);
    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests promoting an account that already has the admin role.
///
/// Verifies that a second startup reports the existing admin rather than a
/// missing account.
///
/// Expected: Ok(AdminPromotion::AlreadyAdmin) and the role stays Admin
#[tokio::test]
async fn reports_existing_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("boss@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.promote_to_admin("boss@example.com").await?;
    let promotion = repo.promote_to_admin("boss@example.com").await?;
    let user = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(promotion, AdminPromotion::AlreadyAdmin);
    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests promoting an email with no account.
///
/// Expected: Ok(AdminPromotion::NoAccount)
#[tokio::test]
async fn reports_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let promotion = UserRepository::new(db)
        .promote_to_admin("missing@example.com")
        .await?;

    assert_eq!(promotion, AdminPromotion::NoAccount);

    Ok(())
}
