use colored::Colorize;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::constants::{
    Endpoints, DEFAULT_MAX_WAIT_SECS, DEFAULT_POLL_INTERVAL_SECS, STATUS_COMPLETED, STATUS_FAILED,
};
use crate::error::{ApiError, ApiResult};
use crate::imagine::submit_imagine_task;
use crate::task::get_task_status;
use crate::utils::create_spinner;

#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    pub poll_interval: u64,
    pub max_wait: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL_SECS,
            max_wait: DEFAULT_MAX_WAIT_SECS,
        }
    }
}

/// Parse `<prompt> [--interval SECONDS] [--max-wait SECONDS]`.
pub fn parse_wait_args(args: &[String]) -> Result<(String, WaitOptions), String> {
    let mut prompt: Option<String> = None;
    let mut opts = WaitOptions::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--interval" => opts.poll_interval = parse_seconds(iter.next(), "--interval")?,
            "--max-wait" => opts.max_wait = parse_seconds(iter.next(), "--max-wait")?,
            _ if prompt.is_none() => prompt = Some(arg.clone()),
            other => return Err(format!("unexpected argument: {other}")),
        }
    }

    let prompt = prompt.ok_or("missing prompt argument")?;
    Ok((prompt, opts))
}

fn parse_seconds(value: Option<&String>, flag: &str) -> Result<u64, String> {
    let raw = value.ok_or_else(|| format!("{flag} requires a value in seconds"))?;
    match raw.parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!(
            "{flag} must be a positive number of seconds, got {raw:?}"
        )),
    }
}

/// Submit an imagine task and poll its status until it completes, fails,
/// or the wait budget runs out.
///
/// The loop sleeps before each status check, so the first check happens one
/// full interval after submission. Submit and poll errors propagate
/// verbatim; `completed` and `failed` both return the full status response
/// and leave the verdict to the caller. Exceeding `max_wait` with no
/// terminal status yields a timeout error carrying the job id and the last
/// status seen.
pub async fn generate_and_wait(
    client: &Client,
    endpoints: &Endpoints,
    api_key: Option<&str>,
    prompt: &str,
    opts: WaitOptions,
) -> ApiResult {
    if opts.poll_interval == 0 || opts.max_wait == 0 {
        return Err(ApiError::invalid_arguments(
            "poll interval and max wait must be positive",
        ));
    }

    println!("Step 1: Submitting imagine task...");
    println!("Prompt: {prompt}\n");

    let submitted = submit_imagine_task(client, &endpoints.diffusion, api_key, prompt, None).await?;

    let Some(job_id) = submitted
        .get("job_id")
        .and_then(Value::as_str)
        .map(str::to_string)
    else {
        return Err(ApiError::new(
            "Malformed response",
            "submit response did not contain a job_id",
        ));
    };

    println!("{} Task submitted! Job ID: {job_id}", "✓".green());
    if let Some(status) = submitted.get("status").and_then(Value::as_str) {
        println!("Initial status: {status}\n");
    }

    println!(
        "Step 2: Waiting for completion (checking every {}s)...",
        opts.poll_interval
    );
    let spinner = create_spinner("cyan", "Waiting for first status check...".to_string());

    let mut elapsed = 0u64;
    let mut last_status = String::new();
    while elapsed < opts.max_wait {
        tokio::time::sleep(Duration::from_secs(opts.poll_interval)).await;
        elapsed += opts.poll_interval;

        let status_result = match get_task_status(client, &endpoints.job, api_key, &job_id).await {
            Ok(value) => value,
            Err(e) => {
                spinner.finish_and_clear();
                return Err(e);
            }
        };

        let status = status_result
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();
        log::debug!("poll at {elapsed}s: status {status}");
        spinner.set_message(format!("[{elapsed}s] Status: {status}"));

        if status == STATUS_COMPLETED {
            spinner.finish_and_clear();
            println!("\n{} Task completed successfully!", "✓".green());
            return Ok(status_result);
        }
        if status == STATUS_FAILED {
            spinner.finish_and_clear();
            println!("\n{} Task failed!", "✗".red());
            return Ok(status_result);
        }

        last_status = status;
    }

    spinner.finish_and_clear();
    Err(ApiError::timeout(opts.max_wait, job_id, last_status))
}
