use super::*;
use crate::server::service::vote::VoteService;

/// Tests casting a first vote.
///
/// Expected: counter incremented to 1 and user_vote set
#[tokio::test]
async fn casts_first_vote() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, voter, fact) = factory::helpers::create_fact_with_voter(db).await?;

    let result = VoteService::new(db)
        .vote(voter.id, fact.id, VoteType::Interesting)
        .await?;

    assert_eq!(result.counts.get(VoteType::Interesting), 1);
    assert_eq!(result.user_vote, Some(VoteType::Interesting));
    assert_counts_match_votes(db, fact.id).await?;

    Ok(())
}

/// Tests voting the same type twice.
///
/// Verifies that the second vote retracts the first.
///
/// Expected: counter back to 0 and user_vote None
#[tokio::test]
async fn same_vote_twice_retracts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, voter, fact) = factory::helpers::create_fact_with_voter(db).await?;

    let service = VoteService::new(db);
    service.vote(voter.id, fact.id, VoteType::MindBlowing).await?;
    let result = service.vote(voter.id, fact.id, VoteType::MindBlowing).await?;

    assert_eq!(result.counts.get(VoteType::MindBlowing), 0);
    assert_eq!(result.user_vote, None);
    assert_counts_match_votes(db, fact.id).await?;

    Ok(())
}

/// Tests voting a different type.
///
/// Verifies that the vote moves from one counter to the other.
///
/// Expected: interesting 0, false 1, user_vote False
#[tokio::test]
async fn different_vote_switches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, voter, fact) = factory::helpers::create_fact_with_voter(db).await?;

    let service = VoteService::new(db);
    service.vote(voter.id, fact.id, VoteType::Interesting).await?;
    let result = service.vote(voter.id, fact.id, VoteType::False).await?;

    assert_eq!(result.counts.get(VoteType::Interesting), 0);
    assert_eq!(result.counts.get(VoteType::False), 1);
    assert_eq!(result.user_vote, Some(VoteType::False));
    assert_counts_match_votes(db, fact.id).await?;

    Ok(())
}

/// Tests several users voting on one fact.
///
/// Expected: counters equal the tally of vote rows after every step
#[tokio::test]
async fn counters_follow_votes_of_many_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let fact = factory::create_fact(db, owner.id).await?;
    let service = VoteService::new(db);

    let steps = [
        VoteType::Interesting,
        VoteType::False,
        VoteType::Interesting,
        VoteType::MindBlowing,
    ];
    let mut voters = Vec::new();
    for vote_type in steps {
        let voter = factory::create_user(db).await?;
        service.vote(voter.id, fact.id, vote_type).await?;
        voters.push(voter);
        assert_counts_match_votes(db, fact.id).await?;
    }

    service.vote(voters[0].id, fact.id, VoteType::Interesting).await?;
    service.vote(voters[1].id, fact.id, VoteType::MindBlowing).await?;
    assert_counts_match_votes(db, fact.id).await?;

    Ok(())
}

/// Tests votes from several users arriving at the same time.
///
/// Verifies that each transaction moves the counters relative to the stored
/// values, so no vote overwrites another.
///
/// Expected: every vote succeeds and counters equal the tally of vote rows
#[tokio::test]
async fn concurrent_votes_keep_counters_consistent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let fact = factory::create_fact(db, owner.id).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let third = factory::create_user(db).await?;

    let service = VoteService::new(db);
    let (a, b, c) = tokio::join!(
        service.vote(first.id, fact.id, VoteType::Interesting),
        service.vote(second.id, fact.id, VoteType::Interesting),
        service.vote(third.id, fact.id, VoteType::False),
    );
    a?;
    b?;
    c?;

    let stored = FactRepository::new(db).find_by_id(fact.id).await?.unwrap();

    assert_eq!(stored.counts.get(VoteType::Interesting), 2);
    assert_eq!(stored.counts.get(VoteType::False), 1);
    assert_counts_match_votes(db, fact.id).await?;

    Ok(())
}

/// Tests voting on a fact that does not exist.
///
/// Expected: Err(AppError::NotFound) and no vote row written
#[tokio::test]
async fn missing_fact_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let voter = factory::create_user(db).await?;

    let result = VoteService::new(db)
        .vote(voter.id, 404, VoteType::Interesting)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(VoteRepository::new(db).get_by_user(voter.id).await?.is_empty());

    Ok(())
}
