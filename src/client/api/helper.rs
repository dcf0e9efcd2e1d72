use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::{
    client::{constant::API_BASE, model::error::ApiError},
    model::api::{ApiResponse, ErrorDto},
};

/// Builds the absolute path of an API endpoint.
pub fn url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

async fn error_from(response: Response) -> ApiError {
    let status = response.status() as u64;

    let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.message
    } else {
        response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string())
    };

    ApiError { status, message }
}

/// Unwraps the `data` of a success envelope or maps the error envelope to an `ApiError`.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response
            .json::<ApiResponse<T>>()
            .await
            .map(|envelope| envelope.data)
            .map_err(|e| ApiError {
                status: 500,
                message: format!("Failed to parse response: {}", e),
            })
    } else {
        Err(error_from(response).await)
    }
}

/// Helper function to parse empty success responses (204 No Content, logout, etc.)
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(error_from(response).await)
    }
}

/// Create a GET request with credentials
pub fn get(path: &str) -> Request {
    Request::get(&url(path)).credentials(reqwasm::http::RequestCredentials::Include)
}

/// Create a POST request with credentials and JSON content type
pub fn post(path: &str) -> Request {
    Request::post(&url(path))
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a PATCH request with credentials and JSON content type
pub fn patch(path: &str) -> Request {
    Request::patch(&url(path))
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a DELETE request with credentials
pub fn delete(path: &str) -> Request {
    Request::delete(&url(path)).credentials(reqwasm::http::RequestCredentials::Include)
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}
