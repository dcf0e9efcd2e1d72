use serde::{Deserialize, Serialize};

/// Status value of every successful response envelope.
pub const STATUS_SUCCESS: &str = "success";
/// Status value of client error (4xx) envelopes.
pub const STATUS_FAIL: &str = "fail";
/// Status value of server error (5xx) envelopes.
pub const STATUS_ERROR: &str = "error";

/// JSON envelope wrapping every successful response body.
///
/// `results` is only present on list responses and holds the number of items
/// in the returned page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<usize>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            results: None,
            data,
        }
    }

    pub fn list(results: usize, data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            results: Some(results),
            data,
        }
    }
}

/// Error envelope: `fail` for client errors, `error` for server errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    pub status: String,
    pub message: String,
}

impl ErrorDto {
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_FAIL.to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_includes_results() {
        let json = serde_json::to_value(ApiResponse::list(2, vec![1, 2])).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["results"], 2);
    }

    #[test]
    fn single_envelope_omits_results() {
        let json = serde_json::to_value(ApiResponse::success("x")).unwrap();

        assert!(json.get("results").is_none());
    }
}
