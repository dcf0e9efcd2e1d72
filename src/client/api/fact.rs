use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, patch, post, send_request,
            serialize_json,
        },
        model::{error::ApiError, feed::FeedFilter},
    },
    model::{
        fact::{CreateFactDto, FactData, FactDto, FactsData, UpdateFactDto, VoteDto},
        vote::VoteType,
    },
};

/// Fetches one feed page for the filter and sort order.
pub async fn get_feed_page(filter: &FeedFilter, page: u64) -> Result<Vec<FactDto>, ApiError> {
    let path = filter.page_path(page)?;

    let response = send_request(get(&path)).await?;
    parse_response::<FactsData>(response).await.map(|d| d.facts)
}

pub async fn get_my_facts() -> Result<Vec<FactDto>, ApiError> {
    let response = send_request(get("/facts/my-facts")).await?;
    parse_response::<FactsData>(response).await.map(|d| d.facts)
}

pub async fn get_voted_facts() -> Result<Vec<FactDto>, ApiError> {
    let response = send_request(get("/facts/voted-facts")).await?;
    parse_response::<FactsData>(response).await.map(|d| d.facts)
}

pub async fn create_fact(payload: &CreateFactDto) -> Result<FactDto, ApiError> {
    let request = post("/facts").body(serialize_json(payload)?);
    let response = send_request(request).await?;
    parse_response::<FactData>(response).await.map(|d| d.fact)
}

pub async fn update_fact(id: i32, payload: &UpdateFactDto) -> Result<FactDto, ApiError> {
    let request = patch(&format!("/facts/{}", id)).body(serialize_json(payload)?);
    let response = send_request(request).await?;
    parse_response::<FactData>(response).await.map(|d| d.fact)
}

pub async fn delete_fact(id: i32) -> Result<(), ApiError> {
    let response = send_request(delete(&format!("/facts/{}", id))).await?;
    parse_empty_response(response).await
}

/// Votes on a fact and returns it with the new counters and the caller's vote.
pub async fn vote(id: i32, vote_type: VoteType) -> Result<FactDto, ApiError> {
    let payload = VoteDto::from(vote_type);
    let request = patch(&format!("/facts/{}/vote", id)).body(serialize_json(&payload)?);
    let response = send_request(request).await?;
    parse_response::<FactData>(response).await.map(|d| d.fact)
}
