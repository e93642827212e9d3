use colored::Colorize;

use crate::constants::{API_KEY_ENV, DEFAULT_MAX_WAIT_SECS, DEFAULT_POLL_INTERVAL_SECS};

fn print_key_config() {
    println!("\nAPI Key Configuration:");
    println!("  The tool looks for {} in:", API_KEY_ENV.bold());
    println!("    1. .env file (in current or parent directories)");
    println!("    2. Environment variable");
    println!("\n  Get your API key from: https://legnext.ai");
}

pub fn print_imagine_help() {
    println!("{:━^60}", " imagine ".yellow());
    println!("Usage:");
    println!("  {} <prompt> [callback_url]", "imagine".bold().green());
    println!("\nArguments:");
    println!(
        "  {}        Text prompt, may include Midjourney parameters.",
        "<prompt>".bold().green()
    );
    println!(
        "  {}  Optional webhook URL for completion notifications.",
        "[callback_url]".bold().cyan()
    );
    println!("\nExamples:");
    println!(
        "  {} \"a cyberpunk city at night --v 7 --ar 16:9\"",
        "imagine".bold().green()
    );
    print_key_config();
    println!("{:━^60}", "".yellow());
}

pub fn print_get_task_help() {
    println!("{:━^60}", " get-task ".yellow());
    println!("Usage:");
    println!("  {} <job_id>", "get-task".bold().green());
    println!("\nArguments:");
    println!(
        "  {}  The job identifier returned by imagine.",
        "<job_id>".bold().green()
    );
    println!("\nExamples:");
    println!(
        "  {} 98761286-cdc7-4085-abfe-c9f149ff722b",
        "get-task".bold().green()
    );
    print_key_config();
    println!("{:━^60}", "".yellow());
}

pub fn print_wait_help() {
    println!("{:━^60}", " generate-and-wait ".yellow());
    println!("Usage:");
    println!(
        "  {} <prompt> [--interval SECONDS] [--max-wait SECONDS]",
        "generate-and-wait".bold().green()
    );
    println!("\nOptions:");
    println!(
        "  {}  Polling interval in seconds (default: {}).",
        "--interval".bold().cyan(),
        DEFAULT_POLL_INTERVAL_SECS
    );
    println!(
        "  {}  Maximum wait time in seconds (default: {}).",
        "--max-wait".bold().cyan(),
        DEFAULT_MAX_WAIT_SECS
    );
    println!("\nExamples:");
    println!(
        "  {} \"a beautiful sunset --v 7\" --interval 5 --max-wait 300",
        "generate-and-wait".bold().green()
    );
    print_key_config();
    println!("{:━^60}", "".yellow());
}
