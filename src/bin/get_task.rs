use colored::Colorize;
use serde_json::Value;
use std::{env, process, time::Duration};

use legnext::constants::{
    API_KEY_ENV, JOB_API_URL, REQUEST_TIMEOUT_SECS, STATUS_COMPLETED, STATUS_FAILED,
};
use legnext::print_help::print_get_task_help;
use legnext::task::get_task_status;
use legnext::utils::{create_spinner, extract_image_urls, print_json};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args
        .iter()
        .any(|arg| arg == "-h" || arg == "-help" || arg == "--help")
    {
        print_get_task_help();
        return;
    }
    if args.len() < 2 {
        print_get_task_help();
        process::exit(1);
    }

    let job_id = &args[1];

    println!("Querying task status...");
    println!("Job ID: {job_id}");
    println!();

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to build HTTP client: {e}");
            process::exit(1);
        }
    };
    let api_key = env::var(API_KEY_ENV).ok();

    let spinner = create_spinner("cyan", "Fetching status...".to_string());
    let result = get_task_status(&client, JOB_API_URL, api_key.as_deref(), job_id).await;
    spinner.finish_and_clear();

    match result {
        Ok(result) => {
            print_json(&result);

            let status = result
                .get("status")
                .and_then(Value::as_str)
                .unwrap_or("unknown");
            println!("\n{} Current status: {status}", "✓".green());

            if status == STATUS_COMPLETED {
                let images_ready = result
                    .get("output")
                    .map(|output| !extract_image_urls(output).is_empty())
                    .unwrap_or(false);
                if images_ready {
                    println!("{} Images ready!", "✓".green());
                }
            } else if status == STATUS_FAILED {
                println!("{} Task failed!", "✗".red());
            }
        }
        Err(err) => {
            print_json(&err);
            process::exit(1);
        }
    }
}
