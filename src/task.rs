use reqwest::Client;

use crate::error::{ApiError, ApiResult};
use crate::utils::{build_headers, read_json_response};

pub fn job_status_url(base_url: &str, job_id: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), job_id)
}

/// Query the status of a previously submitted task.
///
/// Single GET against the job endpoint; the response body comes back
/// unmodified so callers see exactly what the service reported.
pub async fn get_task_status(
    client: &Client,
    base_url: &str,
    api_key: Option<&str>,
    job_id: &str,
) -> ApiResult {
    let Some(api_key) = api_key.filter(|key| !key.is_empty()) else {
        return Err(ApiError::missing_api_key());
    };

    let headers = build_headers(api_key)?;
    let url = job_status_url(base_url, job_id);

    log::debug!("GET {url}");
    let response = client
        .get(&url)
        .headers(headers)
        .send()
        .await
        .map_err(|e| ApiError::request_failed(e.to_string(), e.status().map(|s| s.as_u16())))?;

    read_json_response(response).await
}
