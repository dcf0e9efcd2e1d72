use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, patch, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::user::{UpdateMeDto, UpdatePasswordDto, UserData, UserDto},
};

/// Fetches the logged-in user. A 401 means nobody is logged in and maps to `None`.
pub async fn get_me() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/users/me")).await?;

    if response.status() == 401 {
        return Ok(None);
    }

    parse_response::<UserData>(response).await.map(|d| Some(d.user))
}

pub async fn update_me(payload: &UpdateMeDto) -> Result<UserDto, ApiError> {
    let request = patch("/users/updateMe").body(serialize_json(payload)?);
    let response = send_request(request).await?;
    parse_response::<UserData>(response).await.map(|d| d.user)
}

pub async fn update_password(payload: &UpdatePasswordDto) -> Result<UserDto, ApiError> {
    let request = patch("/users/updatePassword").body(serialize_json(payload)?);
    let response = send_request(request).await?;
    parse_response::<UserData>(response).await.map(|d| d.user)
}

pub async fn delete_me() -> Result<(), ApiError> {
    let response = send_request(delete("/users/deleteMe")).await?;
    parse_empty_response(response).await
}
