//! pagesplit CLI - run the page_content split skill from the command line.

use clap::Parser;
use pagesplit_cli::commands;
use pagesplit_cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> pagesplit_cli::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the result
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = match &cli.command {
        Command::Process(args) => commands::execute_process(args)?,
        Command::Extract(args) => commands::execute_extract(args)?,
    };

    println!("{}", output);
    Ok(())
}
