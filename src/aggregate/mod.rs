//! Turns a flat scan batch into the per-asset, per-severity view the
//! dashboard consumes. The pass is pure and synchronous: every call
//! rebuilds the whole summary from its input, so results can be cached
//! by key and replaced wholesale without correctness concerns.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{
    Asset, Plugin, ScanBatch, ScanHost, ScanStatistics, ScanVulnerability, Service, Severity,
    SeverityCount,
};

/// Placeholder for absent upstream fields.
const NOT_AVAILABLE: &str = "N/A";

/// Aggregated view of one scan batch.
///
/// All lists preserve first-occurrence order: assets in host order (hosts
/// supplied up front, then any host ids first seen on a finding), plugins,
/// services, ports and OS versions in the order they were first encountered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchSummary {
    pub assets: Vec<Asset>,
    pub plugins: Vec<Plugin>,
    pub service_names: Vec<Service>,
    pub vulnerability_ports: Vec<String>,
    pub os_versions: Vec<String>,
    pub severities: Vec<SeverityCount>,
    pub critical_vulnerabilities: Vec<ScanVulnerability>,
    pub high_vulnerabilities: Vec<ScanVulnerability>,
    pub medium_vulnerabilities: Vec<ScanVulnerability>,
    pub low_vulnerabilities: Vec<ScanVulnerability>,
    pub info_vulnerabilities: Vec<ScanVulnerability>,
}

impl BatchSummary {
    /// The global findings list for one severity level.
    pub fn bucket(&self, severity: Severity) -> &[ScanVulnerability] {
        match severity {
            Severity::Critical => &self.critical_vulnerabilities,
            Severity::High => &self.high_vulnerabilities,
            Severity::Medium => &self.medium_vulnerabilities,
            Severity::Low => &self.low_vulnerabilities,
            Severity::Info => &self.info_vulnerabilities,
        }
    }

    /// Total findings across all five buckets. Always equals the number of
    /// findings in the aggregated input.
    pub fn total_findings(&self) -> usize {
        Severity::ASCENDING
            .iter()
            .map(|sev| self.bucket(*sev).len())
            .sum()
    }

    /// Locally computed counterpart of the backend statistics endpoint.
    pub fn statistics(&self) -> ScanStatistics {
        ScanStatistics {
            total_hosts: self.assets.len() as u64,
            total_vulns: self.total_findings() as u64,
            critical_count: self.critical_vulnerabilities.len() as u64,
            high_count: self.high_vulnerabilities.len() as u64,
            medium_count: self.medium_vulnerabilities.len() as u64,
            low_count: self.low_vulnerabilities.len() as u64,
            info_count: self.info_vulnerabilities.len() as u64,
        }
    }
}

/// Aggregates a full scan batch.
pub fn summarize_batch(batch: &ScanBatch) -> BatchSummary {
    summarize_hosts(&batch.hosts)
}

/// Aggregates a host list in a single pass over all findings.
///
/// Hosts are enumerated first so that a host with zero findings still
/// appears as an empty asset; the findings pass then classifies each record
/// (severity code first, CVSS score as fallback), files it into its asset's
/// bucket and the global bucket, and registers plugin, service, port and OS
/// descriptors first-occurrence-wins.
pub fn summarize_hosts(hosts: &[ScanHost]) -> BatchSummary {
    let mut summary = BatchSummary::default();

    // Asset registry: insertion order kept separately from the by-id index.
    let mut asset_order: Vec<String> = Vec::new();
    let mut asset_index: HashMap<String, Asset> = HashMap::new();

    let mut seen_plugins: HashSet<String> = HashSet::new();
    let mut seen_services: HashSet<String> = HashSet::new();
    let mut seen_ports: HashSet<String> = HashSet::new();
    let mut seen_os: HashSet<String> = HashSet::new();

    // Host enumeration runs before the findings pass: zero-finding hosts
    // must still materialize as empty assets.
    for host in hosts {
        if let Some(os) = host.operating_system.as_deref().filter(|s| !s.is_empty()) {
            if seen_os.insert(os.to_string()) {
                summary.os_versions.push(os.to_string());
            }
        }
        if !asset_index.contains_key(&host.id) {
            let asset = Asset::empty(
                &host.id,
                Some(&host.host_name),
                host.ip_address.as_deref().or(Some(&host.host_name)),
            );
            asset_order.push(host.id.clone());
            asset_index.insert(host.id.clone(), asset);
        }
    }

    for entry in hosts.iter().flat_map(|h| &h.vulnerabilities) {
        let severity = entry.classify();

        if let Some(port) = entry.port {
            let port = port.to_string();
            if seen_ports.insert(port.clone()) {
                summary.vulnerability_ports.push(port);
            }
        }

        let service = entry.service.as_deref().filter(|s| !s.is_empty());
        let protocol = entry
            .protocol
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(NOT_AVAILABLE);
        if let Some(service) = service {
            let key = format!("{service}-{protocol}");
            if seen_services.insert(key) {
                summary.service_names.push(Service {
                    name: service.to_string(),
                    protocol: protocol.to_string(),
                });
            }
        }

        let plugin_id = entry.plugin_id.as_deref().filter(|s| !s.is_empty());
        let plugin_name = entry
            .plugin_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(NOT_AVAILABLE);
        if let Some(id) = plugin_id {
            if seen_plugins.insert(id.to_string()) {
                summary.plugins.push(Plugin {
                    id: id.to_string(),
                    name: plugin_name.to_string(),
                });
            }
        }

        // Findings that reference a host id absent from the host list still
        // get an asset, named by the raw id.
        let asset = match asset_index.entry(entry.host_id.clone()) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => {
                asset_order.push(entry.host_id.clone());
                slot.insert(Asset::empty(&entry.host_id, None, None))
            }
        };

        if let Some(id) = plugin_id {
            if !asset.plugins.iter().any(|p| p.id == id) {
                asset.plugins.push(Plugin {
                    id: id.to_string(),
                    name: plugin_name.to_string(),
                });
            }
        }
        if let Some(service) = service {
            if !asset
                .service_list
                .iter()
                .any(|s| s.name == service && s.protocol == protocol)
            {
                asset.service_list.push(Service {
                    name: service.to_string(),
                    protocol: protocol.to_string(),
                });
            }
        }
        asset.bucket_mut(severity).push(entry.clone());

        match severity {
            Severity::Critical => summary.critical_vulnerabilities.push(entry.clone()),
            Severity::High => summary.high_vulnerabilities.push(entry.clone()),
            Severity::Medium => summary.medium_vulnerabilities.push(entry.clone()),
            Severity::Low => summary.low_vulnerabilities.push(entry.clone()),
            Severity::Info => summary.info_vulnerabilities.push(entry.clone()),
        }
    }

    summary.severities = Severity::ASCENDING
        .iter()
        .map(|sev| SeverityCount::new(*sev, summary.bucket(*sev).len()))
        .collect();

    summary.assets = asset_order
        .into_iter()
        .filter_map(|id| asset_index.remove(&id))
        .collect();

    summary
}
