use colored::Colorize;
use serde_json::Value;
use std::{env, process, time::Duration};

use legnext::constants::{API_KEY_ENV, DIFFUSION_API_URL, REQUEST_TIMEOUT_SECS};
use legnext::imagine::submit_imagine_task;
use legnext::print_help::print_imagine_help;
use legnext::utils::{create_spinner, print_json};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args
        .iter()
        .any(|arg| arg == "-h" || arg == "-help" || arg == "--help")
    {
        print_imagine_help();
        return;
    }
    if args.len() < 2 {
        print_imagine_help();
        process::exit(1);
    }

    let prompt = &args[1];
    let callback = args.get(2).map(String::as_str);

    println!("Submitting imagine task...");
    println!("Prompt: {prompt}");
    if let Some(callback) = callback {
        println!("Callback: {callback}");
    }
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

    let spinner = create_spinner("green", "Submitting request...".to_string());
    let result = submit_imagine_task(
        &client,
        DIFFUSION_API_URL,
        api_key.as_deref(),
        prompt,
        callback,
    )
    .await;
    spinner.finish_and_clear();

    match result {
        Ok(result) => {
            print_json(&result);
            println!("\n{} Task submitted successfully!", "✓".green());
            if let Some(job_id) = result.get("job_id").and_then(Value::as_str) {
                println!("Job ID: {job_id}");
            }
            if let Some(status) = result.get("status").and_then(Value::as_str) {
                println!("Status: {status}");
            }
        }
        Err(err) => {
            print_json(&err);
            process::exit(1);
        }
    }
}
