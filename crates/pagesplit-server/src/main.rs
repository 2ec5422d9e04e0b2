//! pagesplit Server CLI
//!
//! Starts the HTTP server for the page_content split custom skill.

use pagesplit_server::{config::ServerConfig, init_tracing, start_server, ServerError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        let config_path = &args[2];
        ServerConfig::from_file(config_path)?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using default configuration");
        eprintln!("Usage: pagesplit-server --config <path-to-config.toml>");
        eprintln!();
        ServerConfig::default()
    };

    init_tracing(&config.log_level);

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("pagesplit-server - page_content split custom skill");
    println!();
    println!("USAGE:");
    println!("    pagesplit-server --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file should contain:");
    println!("    - bind_address: IP address to bind (e.g., '127.0.0.1')");
    println!("    - bind_port: Port number (e.g., 7071)");
    println!("    - route_path: Skill endpoint (default: '/api/page_content_split_http_trigger')");
    println!("    - max_body_bytes: Request body limit (default: 16777216)");
    println!("    - log_level: Log filter when RUST_LOG is unset (default: 'info')");
    println!("    - [extractor] max_content_length: optional page_content limit in chars (default: unset)");
    println!();
    println!("ENVIRONMENT:");
    println!("    RUST_LOG           Overrides log_level (e.g., 'pagesplit_server=debug')");
    println!();
}
