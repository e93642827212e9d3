use serde::Serialize;
use serde_json::Value;

use crate::constants::API_KEY_ENV;

/// Uniform return shape of every API operation: the raw decoded response
/// body on success, or a structured error that serializes to the same
/// `{"error": ..., "details": ...}` JSON the tools print.
pub type ApiResult = Result<Value, ApiError>;

#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub error: String,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_status: Option<String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: details.into(),
            status_code: None,
            job_id: None,
            last_status: None,
        }
    }

    pub fn missing_api_key() -> Self {
        Self::new(
            format!("{API_KEY_ENV} not found"),
            format!(
                "Please configure your Legnext API key:\n\n\
                 \x20 Option 1 (Recommended): Create a .env file\n\
                 \x20   echo \"{API_KEY_ENV}=your-api-key-here\" > .env\n\n\
                 \x20 Option 2: Set environment variable\n\
                 \x20   export {API_KEY_ENV}=your-api-key-here\n\n\
                 \x20 Get your API key from: https://legnext.ai\n\
                 \x20 (Dashboard → API Settings)"
            ),
        )
    }

    pub fn request_failed(details: impl Into<String>, status_code: Option<u16>) -> Self {
        Self {
            status_code,
            ..Self::new("API request failed", details)
        }
    }

    pub fn invalid_arguments(details: impl Into<String>) -> Self {
        Self::new("Invalid arguments", details)
    }

    pub fn timeout(max_wait: u64, job_id: String, last_status: String) -> Self {
        Self {
            job_id: Some(job_id),
            last_status: Some(last_status),
            ..Self::new(
                "Timeout",
                format!("Task did not complete within {max_wait} seconds"),
            )
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.details)
    }
}

impl std::error::Error for ApiError {}
