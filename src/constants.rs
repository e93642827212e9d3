pub const DIFFUSION_API_URL: &str = "https://api.legnext.ai/api/v1/diffusion";
pub const JOB_API_URL: &str = "https://api.legnext.ai/api/v1/job";
pub const API_KEY_ENV: &str = "LEGNEXT_API_KEY";
pub const API_KEY_HEADER: &str = "x-api-key";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_MAX_WAIT_SECS: u64 = 300;
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_FAILED: &str = "failed";

/// Keys tried, in order, when looking for image URLs in a completed
/// job's output. The upstream schema has shipped all three at some point.
pub const IMAGE_URL_KEYS: [&str; 3] = ["images", "image_urls", "imageUrls"];

/// The two API endpoints every tool talks to. Tests point these at a
/// mock server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub diffusion: String,
    pub job: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            diffusion: DIFFUSION_API_URL.to_string(),
            job: JOB_API_URL.to_string(),
        }
    }
}
