use crate::cli::commands::StatsArgs;
use crate::client::ScanBackend;
use crate::errors::VulndeckError;
use crate::models::Severity;

pub async fn handle_stats(args: StatsArgs) -> Result<(), VulndeckError> {
    let (_, backend) = super::connect(args.config.as_deref()).await?;

    let stats = match &args.batch {
        Some(id) => backend.statistics(Some(id)).await?,
        None => {
            // Global view: fetch totals and the batch count together.
            let (stats, batches) =
                futures::try_join!(backend.statistics(None), backend.list_batches())?;
            if !args.json {
                println!("{} batch(es) stored", batches.len());
            }
            stats
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!(
        "Hosts: {}   Findings: {}",
        stats.total_hosts, stats.total_vulns
    );
    let counts = [
        (Severity::Critical, stats.critical_count),
        (Severity::High, stats.high_count),
        (Severity::Medium, stats.medium_count),
        (Severity::Low, stats.low_count),
        (Severity::Info, stats.info_count),
    ];
    for (severity, count) in counts {
        println!("  {:<10} {}", super::style_severity(severity), count);
    }
    Ok(())
}
