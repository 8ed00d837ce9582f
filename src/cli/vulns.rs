use crate::cli::commands::VulnsArgs;
use crate::client::ScanBackend;
use crate::errors::VulndeckError;
use crate::models::Severity;

pub async fn handle_vulns(args: VulnsArgs) -> Result<(), VulndeckError> {
    let severity = Severity::parse_label(&args.severity).ok_or_else(|| {
        VulndeckError::InvalidInput(format!(
            "Unknown severity '{}' (expected critical, high, medium, low or info)",
            args.severity
        ))
    })?;

    let (_, backend) = super::connect(args.config.as_deref()).await?;
    let vulns = backend
        .vulnerabilities_by_severity(severity, args.batch.as_deref(), args.limit)
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&vulns)?);
        return Ok(());
    }

    if vulns.is_empty() {
        println!("No {} findings.", severity.label());
        return Ok(());
    }

    for vuln in &vulns {
        let port = vuln
            .port
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<10} {}  host: {}  port: {}",
            super::style_severity(severity),
            vuln.title(),
            vuln.host_id,
            port,
        );
    }
    println!("{} finding(s)", vulns.len());
    Ok(())
}
