use super::*;

/// Tests the default ordering.
///
/// Verifies that without a sort parameter the newest fact comes first.
///
/// Expected: facts in reverse creation order
#[tokio::test]
async fn lists_newest_first_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();
    let old = factory::fact::FactFactory::new(db, user.id)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let new = factory::fact::FactFactory::new(db, user.id)
        .created_at(now)
        .build()
        .await?;

    let ids: Vec<i32> = FactRepository::new(db)
        .list(&FactQuery::default())
        .await?
        .into_iter()
        .map(|f| f.id)
        .collect();

    assert_eq!(ids, vec![new.id, old.id]);

    Ok(())
}

/// Tests filtering by category and counter comparison.
///
/// Expected: only the science fact with at least 5 interesting votes
#[tokio::test]
async fn filters_by_category_and_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let hit = factory::fact::FactFactory::new(db, user.id)
        .category("science")
        .votes(7, 0, 0)
        .build()
        .await?;
    factory::fact::FactFactory::new(db, user.id)
        .category("science")
        .votes(2, 0, 0)
        .build()
        .await?;
    factory::fact::FactFactory::new(db, user.id)
        .category("history")
        .votes(9, 0, 0)
        .build()
        .await?;

    let facts = FactRepository::new(db)
        .list(&query(&[
            ("category", "science"),
            ("votesInteresting[gte]", "5"),
        ]))
        .await?;

    assert_eq!(facts.len(), 1);
    assert_eq!(facts[0].id, hit.id);

    Ok(())
}

/// Tests sorting by a counter.
///
/// Expected: facts ordered by mind-blowing votes, highest first
#[tokio::test]
async fn sorts_by_counter_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for votes in [3, 10, 1] {
        factory::fact::FactFactory::new(db, user.id)
            .votes(0, votes, 0)
            .build()
            .await?;
    }

    let counts: Vec<i32> = FactRepository::new(db)
        .list(&query(&[("sort", "-votesMindBlowing")]))
        .await?
        .into_iter()
        .map(|f| f.counts.get(VoteType::MindBlowing))
        .collect();

    assert_eq!(counts, vec![10, 3, 1]);

    Ok(())
}

/// Tests paging with facts that share a timestamp.
///
/// Verifies that the id tie-break keeps pages disjoint and complete.
///
/// Expected: 5 distinct ids across pages of 2
#[tokio::test]
async fn pages_are_disjoint_with_equal_timestamps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();
    for _ in 0..5 {
        factory::fact::FactFactory::new(db, user.id)
            .created_at(now)
            .build()
            .await?;
    }

    let repo = FactRepository::new(db);
    let mut seen = Vec::new();
    for page in ["1", "2", "3"] {
        let facts = repo.list(&query(&[("page", page), ("limit", "2")])).await?;
        seen.extend(facts.into_iter().map(|f| f.id));
    }

    let mut unique = seen.clone();
    unique.sort();
    unique.dedup();

    assert_eq!(seen.len(), 5);
    assert_eq!(unique.len(), 5);

    Ok(())
}
