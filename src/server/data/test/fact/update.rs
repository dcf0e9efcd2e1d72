use super::*;

/// Tests a partial fact update.
///
/// Expected: Ok(Some(Fact)) with the new text and unchanged source
#[tokio::test]
async fn updates_text_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::create_fact(db, user.id).await?;

    let fact = FactRepository::new(db)
        .update(UpdateFactParams {
            id: created.id,
            text: Some("Honey never spoils".to_string()),
            source: None,
            category: None,
        })
        .await?
        .unwrap();

    assert_eq!(fact.text, "Honey never spoils");
    assert_eq!(fact.source, created.source);

    Ok(())
}

/// Tests moving a vote between counters in SQL.
///
/// Expected: the stored counters reflect a cast followed by a switch
#[tokio::test]
async fn apply_vote_moves_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::create_fact(db, user.id).await?;

    let repo = FactRepository::new(db);
    repo.apply_vote(created.id, VoteTransition::Cast(VoteType::Interesting))
        .await?;
    repo.apply_vote(created.id, VoteTransition::Cast(VoteType::Interesting))
        .await?;
    repo.apply_vote(
        created.id,
        VoteTransition::Switch {
            from: VoteType::Interesting,
            to: VoteType::False,
        },
    )
    .await?;
    let fact = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(
        fact.counts,
        VoteCounts {
            interesting: 1,
            mind_blowing: 0,
            false_votes: 1,
        }
    );

    Ok(())
}

/// Tests retracting from a counter that is already zero.
///
/// Expected: the counter stays at 0
#[tokio::test]
async fn apply_vote_stops_decrement_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::create_fact(db, user.id).await?;

    let repo = FactRepository::new(db);
    let applied = repo
        .apply_vote(created.id, VoteTransition::Retract(VoteType::MindBlowing))
        .await?;
    let fact = repo.find_by_id(created.id).await?.unwrap();

    assert!(applied);
    assert_eq!(fact.counts.get(VoteType::MindBlowing), 0);

    Ok(())
}

/// Tests locking and applying a vote on a missing fact.
///
/// Expected: both report false
#[tokio::test]
async fn missing_fact_is_not_locked_or_counted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FactRepository::new(db);

    assert!(!repo.lock(404).await?);
    assert!(
        !repo
            .apply_vote(404, VoteTransition::Cast(VoteType::False))
            .await?
    );

    Ok(())
}
