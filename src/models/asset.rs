use serde::{Deserialize, Serialize};

use super::scan::ScanVulnerability;
use super::severity::Severity;

/// Scanner check that produced one or more findings, deduplicated by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    pub id: String,
    pub name: String,
}

/// Network service observed on a host, deduplicated by (name, protocol).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub protocol: String,
}

/// Findings on an asset at one severity level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertGroup {
    pub severity: Severity,
    pub data: Vec<ScanVulnerability>,
}

/// A host viewed as an aggregation target: its distinct plugins and
/// services, and its findings partitioned into the five severity buckets.
/// Rebuilt from scratch on every aggregation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub name: String,
    pub alerts: Vec<AlertGroup>,
    pub plugins: Vec<Plugin>,
    pub service_list: Vec<Service>,
}

impl Asset {
    /// Seeds an asset with the five severity buckets empty. The display name
    /// prefers the host name, then the IP address, then the raw host id.
    pub fn empty(host_id: &str, host_name: Option<&str>, ip_address: Option<&str>) -> Asset {
        let name = host_name
            .filter(|s| !s.is_empty())
            .or(ip_address.filter(|s| !s.is_empty()))
            .unwrap_or(host_id);
        Asset {
            name: name.to_string(),
            alerts: [
                Severity::Critical,
                Severity::High,
                Severity::Medium,
                Severity::Low,
                Severity::Info,
            ]
            .into_iter()
            .map(|severity| AlertGroup {
                severity,
                data: Vec::new(),
            })
            .collect(),
            plugins: Vec::new(),
            service_list: Vec::new(),
        }
    }

    /// Mutable access to the bucket for one severity level. Buckets are
    /// seeded for all five levels; a missing group is created rather than
    /// assumed.
    pub fn bucket_mut(&mut self, severity: Severity) -> &mut Vec<ScanVulnerability> {
        let idx = match self.alerts.iter().position(|g| g.severity == severity) {
            Some(idx) => idx,
            None => {
                self.alerts.push(AlertGroup {
                    severity,
                    data: Vec::new(),
                });
                self.alerts.len() - 1
            }
        };
        &mut self.alerts[idx].data
    }

    /// Total findings across all five buckets.
    pub fn alert_count(&self) -> usize {
        self.alerts.iter().map(|group| group.data.len()).sum()
    }
}

/// Label/count pair for one severity level, summed across a whole batch.
/// Downstream consumers expect the capitalized label here ("Critical"),
/// unlike the lowercase alert-group tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCount {
    pub severity: String,
    pub count: usize,
}

impl SeverityCount {
    pub fn new(severity: Severity, count: usize) -> SeverityCount {
        SeverityCount {
            severity: severity.label().to_string(),
            count,
        }
    }
}
