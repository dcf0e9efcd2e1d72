use super::*;

/// Tests creating a category.
///
/// Expected: Ok(Category) that is then found by name
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CreateCategoryParams {
            name: "space".to_string(),
            colour: "1e3a8a".to_string(),
        })
        .await?;

    assert_eq!(category.name, "space");
    assert_eq!(category.colour, "1e3a8a");
    assert!(repo.exists_by_name("space").await?);
    assert!(!repo.exists_by_name("history").await?);

    Ok(())
}

/// Tests the unique index on category names.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category(db, "space").await?;

    let result = CategoryRepository::new(db)
        .create(CreateCategoryParams {
            name: "space".to_string(),
            colour: "000000".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
