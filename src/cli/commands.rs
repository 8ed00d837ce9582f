use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vulndeck", version, about = "Vulnerability scan aggregation service and dashboard API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the dashboard API server
    Serve(ServeArgs),
    /// List stored scan batches
    Batches(BatchesArgs),
    /// Fetch one batch and print its aggregated summary
    Show(ShowArgs),
    /// Severity totals across a batch or all batches
    Stats(StatsArgs),
    /// List findings at one severity level
    Vulns(VulnsArgs),
    /// Browse the security news feed
    News(FeedArgs),
    /// Browse the threat-campaign feed
    Campaigns(FeedArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Bind host (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Args, Clone)]
pub struct BatchesArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Emit raw JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ShowArgs {
    /// Scan batch id
    pub batch_id: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Emit the aggregated summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit a markdown report
    #[arg(long)]
    pub markdown: bool,
}

#[derive(Args, Clone)]
pub struct StatsArgs {
    /// Scope to one scan batch
    #[arg(short, long)]
    pub batch: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Emit raw JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct VulnsArgs {
    /// Severity level: critical, high, medium, low, info
    pub severity: String,

    /// Scope to one scan batch
    #[arg(short, long)]
    pub batch: Option<String>,

    /// Maximum number of findings to fetch
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Emit raw JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct FeedArgs {
    /// Page number
    #[arg(short, long)]
    pub page: Option<u32>,

    /// Items per page
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Full-text search query
    #[arg(short, long)]
    pub search: Option<String>,

    /// Column to sort by
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort order: asc or desc
    #[arg(long)]
    pub order: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Emit raw JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Path to the configuration file
    pub config: String,
}
