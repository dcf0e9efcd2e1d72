use super::*;

/// Tests recording and reading back a vote.
///
/// Expected: Ok(Some(VoteType::Interesting))
#[tokio::test]
async fn records_vote() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, voter, fact) = factory::helpers::create_fact_with_voter(db).await?;

    let repo = VoteRepository::new(db);
    repo.create(voter.id, fact.id, VoteType::Interesting).await?;

    assert_eq!(
        repo.find(voter.id, fact.id).await?,
        Some(VoteType::Interesting)
    );

    Ok(())
}

/// Tests the one-vote-per-user-per-fact constraint.
///
/// Expected: second insert fails
#[tokio::test]
async fn rejects_second_vote_on_same_fact() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, voter, fact) = factory::helpers::create_fact_with_voter(db).await?;

    let repo = VoteRepository::new(db);
    repo.create(voter.id, fact.id, VoteType::Interesting).await?;
    let result = repo.create(voter.id, fact.id, VoteType::False).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests switching and removing a vote.
///
/// Expected: type changes to False, then the vote is gone
#[tokio::test]
async fn switches_and_deletes_vote() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, voter, fact) = factory::helpers::create_fact_with_voter(db).await?;

    let repo = VoteRepository::new(db);
    repo.create(voter.id, fact.id, VoteType::Interesting).await?;
    repo.update_type(voter.id, fact.id, VoteType::False).await?;

    assert_eq!(repo.find(voter.id, fact.id).await?, Some(VoteType::False));

    repo.delete(voter.id, fact.id).await?;

    assert_eq!(repo.find(voter.id, fact.id).await?, None);

    Ok(())
}
