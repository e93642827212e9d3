use reqwest::Client;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::utils::{build_headers, read_json_response};

#[derive(Debug, Serialize)]
pub struct ImagineRequestBody {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
}

/// Submit an image generation task.
///
/// Performs exactly one POST to `api_url` with the prompt (and optional
/// webhook callback URL) and returns the decoded response body. A missing
/// credential short-circuits before any network traffic. Retrying is the
/// caller's business.
pub async fn submit_imagine_task(
    client: &Client,
    api_url: &str,
    api_key: Option<&str>,
    prompt: &str,
    callback: Option<&str>,
) -> ApiResult {
    let Some(api_key) = api_key.filter(|key| !key.is_empty()) else {
        return Err(ApiError::missing_api_key());
    };

    let headers = build_headers(api_key)?;
    let body = ImagineRequestBody {
        text: prompt.to_string(),
        callback: callback.map(str::to_string),
    };

    log::debug!("POST {api_url}");
    let response = client
        .post(api_url)
        .headers(headers)
        .json(&body)
        .send()
        .await
        .map_err(|e| ApiError::request_failed(e.to_string(), e.status().map(|s| s.as_u16())))?;

    read_json_response(response).await
}
