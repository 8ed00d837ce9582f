use crate::cli::commands::BatchesArgs;
use crate::client::ScanBackend;
use crate::errors::VulndeckError;

pub async fn handle_batches(args: BatchesArgs) -> Result<(), VulndeckError> {
    let (_, backend) = super::connect(args.config.as_deref()).await?;
    let batches = backend.list_batches().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&batches)?);
        return Ok(());
    }

    if batches.is_empty() {
        println!("No scan batches stored.");
        return Ok(());
    }

    for batch in &batches {
        // Timestamps come over the wire as RFC 3339 strings.
        let timestamp = batch
            .timestamp
            .as_deref()
            .and_then(|t| chrono::DateTime::parse_from_rfc3339(t).ok())
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "{}  {}  hosts/items: {}  file: {}",
            batch.id,
            timestamp,
            batch.total_items.map(|n| n.to_string()).unwrap_or_else(|| "-".into()),
            batch.file_name.as_deref().unwrap_or("-"),
        );
    }
    println!("{} batch(es)", batches.len());
    Ok(())
}
