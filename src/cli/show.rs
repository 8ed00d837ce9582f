use console::style;

use crate::aggregate::summarize_batch;
use crate::cli::commands::ShowArgs;
use crate::client::ScanBackend;
use crate::errors::VulndeckError;
use crate::models::Severity;
use crate::reporting::format_batch_markdown;

pub async fn handle_show(args: ShowArgs) -> Result<(), VulndeckError> {
    let (_, backend) = super::connect(args.config.as_deref()).await?;
    let batch = backend.get_batch(&args.batch_id).await?;
    let summary = summarize_batch(&batch);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    if args.markdown {
        println!("{}", format_batch_markdown(&args.batch_id, &summary));
        return Ok(());
    }

    println!(
        "Batch {}  ({} hosts, {} findings)",
        style(&args.batch_id).bold(),
        summary.assets.len(),
        summary.total_findings(),
    );
    for severity in Severity::ASCENDING.iter().rev() {
        println!(
            "  {:<10} {}",
            super::style_severity(*severity),
            summary.bucket(*severity).len()
        );
    }

    println!("\nAssets:");
    for asset in &summary.assets {
        println!(
            "  {}  plugins: {}  services: {}  alerts: {}",
            style(&asset.name).bold(),
            asset.plugins.len(),
            asset.service_list.len(),
            asset.alert_count(),
        );
    }

    if !summary.vulnerability_ports.is_empty() {
        println!("\nPorts: {}", summary.vulnerability_ports.join(", "));
    }
    if !summary.os_versions.is_empty() {
        println!("Operating systems: {}", summary.os_versions.join(", "));
    }
    Ok(())
}
