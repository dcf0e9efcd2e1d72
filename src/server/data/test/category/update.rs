use super::*;

/// Tests changing only the colour of a category.
///
/// Expected: Ok(Some(Category)) with the old name and new colour
#[tokio::test]
async fn updates_colour() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_category(db, "science").await?;

    let category = CategoryRepository::new(db)
        .update(UpdateCategoryParams {
            id: created.id,
            name: None,
            colour: Some("abcdef".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(category.name, "science");
    assert_eq!(category.colour, "abcdef");

    Ok(())
}

/// Tests updating and deleting a category that does not exist.
///
/// Expected: Ok(None) and Ok(false)
#[tokio::test]
async fn handles_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(UpdateCategoryParams {
            id: 7,
            name: Some("space".to_string()),
            colour: None,
        })
        .await?;

    assert!(updated.is_none());
    assert!(!repo.delete(7).await?);

    Ok(())
}
