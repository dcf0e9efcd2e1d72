use super::*;

/// Tests submitting a fact.
///
/// Verifies that counters start at zero and the owner's profile is attached.
///
/// Expected: Ok(Fact) with zero counts and owner set
#[tokio::test]
async fn creates_fact_with_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let fact = FactRepository::new(db)
        .create(CreateFactParams {
            user_id: user.id,
            text: "Octopuses have three hearts".to_string(),
            source: "https://example.com/octopus".to_string(),
            category: "science".to_string(),
        })
        .await?;

    assert_eq!(fact.user_id, user.id);
    assert_eq!(fact.counts, VoteCounts::default());
    assert_eq!(fact.owner.map(|o| o.username), Some(user.username));
    assert!(fact.user_vote.is_none());

    Ok(())
}

/// Tests looking up a missing fact.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_returns_none_for_missing_fact() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(FactRepository::new(db).find_by_id(1).await?.is_none());

    Ok(())
}
