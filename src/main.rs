mod aggregate;
mod api;
mod cli;
mod client;
mod config;
mod errors;
mod models;
mod reporting;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = match cli.command {
        cli::Commands::Serve(args) => cli::serve::handle_serve(args).await,
        cli::Commands::Batches(args) => cli::batches::handle_batches(args).await,
        cli::Commands::Show(args) => cli::show::handle_show(args).await,
        cli::Commands::Stats(args) => cli::stats::handle_stats(args).await,
        cli::Commands::Vulns(args) => cli::vulns::handle_vulns(args).await,
        cli::Commands::News(args) => cli::news::handle_news(args).await,
        cli::Commands::Campaigns(args) => cli::news::handle_campaigns(args).await,
        cli::Commands::Validate(args) => handle_validate(args).await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                errors::VulndeckError::Config(_) => 2,
                errors::VulndeckError::Network(_) | errors::VulndeckError::Upstream(_) => 3,
                errors::VulndeckError::Authentication(_) => 4,
                errors::VulndeckError::InvalidInput(_) => 5,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), errors::VulndeckError> {
    let path = std::path::PathBuf::from(&args.config);
    let _config = config::parse_config(&path).await?;
    println!("Configuration is valid: {}", args.config);
    Ok(())
}
