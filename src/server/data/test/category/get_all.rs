use super::*;

/// Tests listing categories.
///
/// Verifies that categories are returned alphabetically regardless of insert
/// order.
///
/// Expected: Ok(Vec) ordered by name
#[tokio::test]
async fn returns_categories_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category(db, "technology").await?;
    factory::create_category(db, "history").await?;
    factory::create_category(db, "science").await?;

    let names: Vec<String> = CategoryRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, vec!["history", "science", "technology"]);

    Ok(())
}
