use indicatif::{ProgressBar, ProgressStyle};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;

use crate::constants::{API_KEY_HEADER, IMAGE_URL_KEYS};
use crate::error::{ApiError, ApiResult};

pub fn build_headers(api_key: &str) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    let mut key_value = HeaderValue::from_str(api_key)
        .map_err(|e| ApiError::new("Invalid LEGNEXT_API_KEY", e.to_string()))?;
    key_value.set_sensitive(true);
    headers.insert(API_KEY_HEADER, key_value);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Decode a response into the result envelope: 2xx bodies come back as raw
/// JSON, everything else becomes a structured error carrying the HTTP
/// status code and whatever the server said.
pub async fn read_json_response(response: reqwest::Response) -> ApiResult {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::request_failed(e.to_string(), None));
    }

    let body = response.text().await.unwrap_or_default();
    let details = if body.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        body
    };
    Err(ApiError::request_failed(details, Some(status.as_u16())))
}

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("Failed to render response as JSON: {e}"),
    }
}

/// Pull image URLs out of a completed job's output, trying the known key
/// spellings in order. An empty list under one key falls through to the
/// next, matching how the service has historically populated these.
pub fn extract_image_urls(output: &Value) -> Vec<String> {
    for key in IMAGE_URL_KEYS {
        if let Some(urls) = output.get(key).and_then(Value::as_array) {
            let urls: Vec<String> = urls
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
            if !urls.is_empty() {
                return urls;
            }
        }
    }
    Vec::new()
}

pub fn extract_seed(output: &Value) -> Option<&Value> {
    output.get("seed")
}

/// Print the image URLs and seed of a completed result, if any.
pub fn print_image_summary(result: &Value) {
    let Some(output) = result.get("output") else {
        return;
    };

    let urls = extract_image_urls(output);
    if !urls.is_empty() {
        println!("\n{}", "=".repeat(60));
        println!("Generated Images:");
        println!("{}", "=".repeat(60));
        for (i, url) in urls.iter().enumerate() {
            println!("{}. {url}", i + 1);
        }
    }

    if let Some(seed) = extract_seed(output) {
        println!("\nSeed: {seed}");
    }
}
