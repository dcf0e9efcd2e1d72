use super::*;

/// Tests counting stored votes by type.
///
/// Expected: counts matching the inserted votes
#[tokio::test]
async fn counts_votes_by_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let fact = factory::create_fact(db, owner.id).await?;
    for vote_type in ["votesInteresting", "votesInteresting", "votesFalse"] {
        let voter = factory::create_user(db).await?;
        factory::create_vote(db, voter.id, fact.id, vote_type).await?;
    }

    let counts = VoteRepository::new(db).tally(fact.id).await?;

    assert_eq!(
        counts,
        VoteCounts {
            interesting: 2,
            mind_blowing: 0,
            false_votes: 1,
        }
    );

    Ok(())
}

/// Tests removing the votes of a set of facts.
///
/// Expected: Ok(2) and an empty tally afterwards
#[tokio::test]
async fn delete_by_facts_removes_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, voter, fact) = factory::helpers::create_fact_with_voter(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_vote(db, voter.id, fact.id, "votesInteresting").await?;
    factory::create_vote(db, other.id, fact.id, "votesFalse").await?;

    let repo = VoteRepository::new(db);
    let deleted = repo.delete_by_facts(&[fact.id]).await?;

    assert_eq!(deleted, 2);
    assert_eq!(repo.tally(fact.id).await?, VoteCounts::default());

    Ok(())
}
