use crate::{
    client::{
        api::helper::{get, parse_empty_response, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::user::{LoginDto, SignupDto, UserData, UserDto},
};

pub async fn login(payload: &LoginDto) -> Result<UserDto, ApiError> {
    let request = post("/auth/login").body(serialize_json(payload)?);
    let response = send_request(request).await?;
    parse_response::<UserData>(response).await.map(|d| d.user)
}

pub async fn signup(payload: &SignupDto) -> Result<UserDto, ApiError> {
    let request = post("/auth/signup").body(serialize_json(payload)?);
    let response = send_request(request).await?;
    parse_response::<UserData>(response).await.map(|d| d.user)
}

pub async fn logout() -> Result<(), ApiError> {
    let response = send_request(get("/auth/logout")).await?;
    parse_empty_response(response).await
}
