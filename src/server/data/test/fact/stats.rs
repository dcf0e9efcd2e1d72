use super::*;

/// Tests per-category statistics.
///
/// Verifies fact counts and counter averages, with the largest category first.
///
/// Expected: science (2 facts, avg interesting 3.0) before history (1 fact)
#[tokio::test]
async fn aggregates_by_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::fact::FactFactory::new(db, user.id)
        .category("science")
        .votes(2, 1, 0)
        .build()
        .await?;
    factory::fact::FactFactory::new(db, user.id)
        .category("science")
        .votes(4, 0, 0)
        .build()
        .await?;
    factory::fact::FactFactory::new(db, user.id)
        .category("history")
        .votes(0, 0, 5)
        .build()
        .await?;

    let stats = FactRepository::new(db).stats().await?;

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].category, "science");
    assert_eq!(stats[0].num_facts, 2);
    assert_eq!(stats[0].avg_interesting, Some(3.0));
    assert_eq!(stats[0].avg_mind_blowing, Some(0.5));
    assert_eq!(stats[1].category, "history");
    assert_eq!(stats[1].avg_false, Some(5.0));

    Ok(())
}

/// Tests statistics with no facts.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_facts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(FactRepository::new(db).stats().await?.is_empty());

    Ok(())
}
