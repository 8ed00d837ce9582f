use crate::aggregate::BatchSummary;
use crate::models::{Asset, Severity};

/// Markdown severity table for a batch summary.
pub fn format_severity_table(summary: &BatchSummary) -> String {
    let mut out = String::from("## Severity Summary\n\n| Severity | Count |\n|---|---|\n");
    // Most severe first in the rendered table.
    for severity in Severity::ASCENDING.iter().rev() {
        out.push_str(&format!(
            "| {} | {} |\n",
            severity.label(),
            summary.bucket(*severity).len()
        ));
    }
    out.push_str(&format!(
        "| **Total** | **{}** |\n",
        summary.total_findings()
    ));
    out
}

/// Markdown section per asset: its services and non-empty severity buckets.
pub fn format_asset_sections(assets: &[Asset]) -> String {
    let mut out = String::new();
    for asset in assets {
        out.push_str(&format!("### {}\n\n", asset.name));
        if asset.service_list.is_empty() {
            out.push_str("No services observed.\n\n");
        } else {
            let services: Vec<String> = asset
                .service_list
                .iter()
                .map(|s| format!("{}/{}", s.name, s.protocol))
                .collect();
            out.push_str(&format!("Services: {}\n\n", services.join(", ")));
        }
        for group in &asset.alerts {
            if group.data.is_empty() {
                continue;
            }
            out.push_str(&format!(
                "**{}** ({})\n",
                group.severity.label(),
                group.data.len()
            ));
            for vuln in &group.data {
                out.push_str(&format!("- {}\n", vuln.title()));
            }
            out.push('\n');
        }
    }
    out
}

/// Full markdown report for one aggregated batch.
pub fn format_batch_markdown(batch_id: &str, summary: &BatchSummary) -> String {
    format!(
        "# Scan Batch {}\n\n{}\n## Assets ({})\n\n{}",
        batch_id,
        format_severity_table(summary),
        summary.assets.len(),
        format_asset_sections(&summary.assets),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::summarize_hosts;
    use crate::models::{ScanHost, ScanVulnerability};

    #[test]
    fn severity_table_lists_most_severe_first() {
        let host = ScanHost {
            id: "h1".into(),
            host_name: "web01".into(),
            vulnerabilities: vec![ScanVulnerability {
                host_id: "h1".into(),
                severity: Some("4".into()),
                plugin_name: Some("Heartbleed".into()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let summary = summarize_hosts(&[host]);
        let table = format_severity_table(&summary);
        let critical = table.find("| Critical | 1 |").unwrap();
        let info = table.find("| Info | 0 |").unwrap();
        assert!(critical < info);

        let report = format_batch_markdown("b1", &summary);
        assert!(report.contains("### web01"));
        assert!(report.contains("- Heartbleed"));
    }
}
