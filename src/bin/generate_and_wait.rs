use colored::Colorize;
use serde_json::Value;
use std::{env, process, time::Duration};

use legnext::constants::{Endpoints, API_KEY_ENV, REQUEST_TIMEOUT_SECS, STATUS_COMPLETED};
use legnext::print_help::print_wait_help;
use legnext::utils::{print_image_summary, print_json};
use legnext::wait::{generate_and_wait, parse_wait_args};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args
        .iter()
        .any(|arg| arg == "-h" || arg == "-help" || arg == "--help")
    {
        print_wait_help();
        return;
    }

    let (prompt, opts) = match parse_wait_args(&args[1..]) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}: {message}\n", "Error".red());
            print_wait_help();
            process::exit(1);
        }
    };

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
    let endpoints = Endpoints::default();

    println!("{}", "=".repeat(60));
    println!("Legnext Midjourney Image Generation");
    println!("{}", "=".repeat(60));
    println!();

    let result = generate_and_wait(&client, &endpoints, api_key.as_deref(), &prompt, opts).await;

    println!("\n{}", "=".repeat(60));
    println!("Final Result:");
    println!("{}", "=".repeat(60));

    match result {
        Ok(result) => {
            print_json(&result);
            let completed =
                result.get("status").and_then(Value::as_str) == Some(STATUS_COMPLETED);
            if completed {
                print_image_summary(&result);
            }
            process::exit(if completed { 0 } else { 1 });
        }
        Err(err) => {
            print_json(&err);
            process::exit(1);
        }
    }
}
