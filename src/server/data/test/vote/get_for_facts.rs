use super::*;

/// Tests mapping a user's votes onto a set of facts.
///
/// Verifies that facts without a vote from this user are absent from the map
/// and that other users' votes are ignored.
///
/// Expected: map with one entry for the voted fact
#[tokio::test]
async fn maps_only_own_votes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, voter, voted) = factory::helpers::create_fact_with_voter(db).await?;
    let other = factory::create_fact(db, owner.id).await?;
    factory::create_vote(db, voter.id, voted.id, "votesMindBlowing").await?;
    factory::create_vote(db, owner.id, other.id, "votesFalse").await?;

    let votes = VoteRepository::new(db)
        .get_for_facts(voter.id, &[voted.id, other.id])
        .await?;

    assert_eq!(votes.len(), 1);
    assert_eq!(votes.get(&voted.id), Some(&VoteType::MindBlowing));

    Ok(())
}

/// Tests an empty id list.
///
/// Expected: Ok(empty map)
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fact_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    assert!(VoteRepository::new(db)
        .get_for_facts(user.id, &[])
        .await?
        .is_empty());

    Ok(())
}
