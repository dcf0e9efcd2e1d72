use super::*;

/// Tests paginating over users.
///
/// Verifies that consecutive pages do not overlap and that the total counts
/// every user regardless of the page.
///
/// Expected: two pages of 2 and 1 users with distinct ids, total 3
#[tokio::test]
async fn pages_do_not_overlap() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_user(db).await?;
    }

    let repo = UserRepository::new(db);
    let (first, total) = repo
        .get_all_paginated(Pagination { page: 1, limit: 2 })
        .await?;
    let (second, _) = repo
        .get_all_paginated(Pagination { page: 2, limit: 2 })
        .await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    assert!(first.iter().all(|a| second.iter().all(|b| a.id != b.id)));

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with an empty page and the full total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let (users, total) = UserRepository::new(db)
        .get_all_paginated(Pagination { page: 5, limit: 10 })
        .await?;

    assert!(users.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
