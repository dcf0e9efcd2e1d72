use super::*;

/// Tests moving facts to a renamed category.
///
/// Expected: Ok(2) and no fact left in the old category
#[tokio::test]
async fn moves_all_facts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for category in ["society", "society", "science"] {
        factory::fact::FactFactory::new(db, user.id)
            .category(category)
            .build()
            .await?;
    }

    let repo = FactRepository::new(db);
    let moved = repo.rename_category("society", "culture").await?;

    assert_eq!(moved, 2);
    assert!(repo.list(&query(&[("category", "society")])).await?.is_empty());
    assert_eq!(repo.list(&query(&[("category", "culture")])).await?.len(), 2);

    Ok(())
}
