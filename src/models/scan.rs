use serde::{Deserialize, Serialize};

use super::severity::Severity;

/// One vulnerability finding reported for a host, as returned by the scan
/// backend. Most descriptive fields are optional; the aggregation layer
/// substitutes placeholders rather than rejecting sparse records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanVulnerability {
    pub id: String,
    pub scan_batch_id: String,
    pub host_id: String,
    pub first_found: Option<String>,
    pub last_seen: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub plugin_id: Option<String>,
    pub plugin_name: Option<String>,
    pub plugin_family: Option<String>,
    pub plugin_type: Option<String>,
    pub port: Option<u32>,
    pub protocol: Option<String>,
    pub service: Option<String>,
    /// Scanner severity code as a numeric string ("0".."4").
    pub severity: Option<String>,
    pub risk_factor: Option<String>,
    pub synopsis: Option<String>,
    pub description: Option<String>,
    pub solution: Option<String>,
    pub see_also: Option<Vec<String>>,
    pub cvss_vector: Option<String>,
    pub cvss_score: Option<f64>,
    pub cvss3_vector: Option<String>,
    pub cvss3_score: Option<f64>,
    pub cve: Option<Vec<String>>,
    pub bid: Option<Vec<String>>,
    pub xref: Option<Vec<String>>,
    pub plugin_output: Option<String>,
}

impl ScanVulnerability {
    /// Classifies this finding into a severity level. The scanner code takes
    /// priority whenever the field is present (a present "0" never defers to
    /// the score); otherwise the first non-zero CVSS score is used, with a
    /// missing score treated as 0.0.
    ///
    /// Presence is decided by the field, not its content: an empty or
    /// non-numeric code still takes the code path and maps to Info. Records
    /// that want the score fallback must omit the field entirely.
    pub fn classify(&self) -> Severity {
        match &self.severity {
            Some(code) => Severity::from_code(code),
            None => Severity::from_score(self.effective_score()),
        }
    }

    /// The CVSSv2 score when non-zero, else the CVSSv3 score, else 0.0.
    pub fn effective_score(&self) -> f64 {
        self.cvss_score
            .filter(|s| *s != 0.0)
            .or(self.cvss3_score)
            .unwrap_or(0.0)
    }

    /// Display title, substituting a placeholder for nameless findings.
    pub fn title(&self) -> &str {
        match self.plugin_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Unknown Vulnerability",
        }
    }
}

/// One scanned host with its flat finding list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanHost {
    pub id: String,
    pub scan_batch_id: String,
    pub host_name: String,
    pub ip_address: Option<String>,
    pub operating_system: Option<String>,
    pub mac_address: Option<String>,
    pub netbios_name: Option<String>,
    pub fqdn: Option<String>,
    pub system_type: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub vulnerabilities: Vec<ScanVulnerability>,
}

/// A full scan batch: the upload unit the backend stores, with all hosts
/// and their findings inlined.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanBatch {
    pub timestamp: Option<String>,
    pub file_name: Option<String>,
    pub file_count: Option<u32>,
    pub total_items: Option<u64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub hosts: Vec<ScanHost>,
}

/// Lightweight batch descriptor used by the batch listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanBatchInfo {
    pub id: String,
    pub timestamp: Option<String>,
    pub file_name: Option<String>,
    pub file_count: Option<u32>,
    pub total_items: Option<u64>,
    pub created_at: Option<String>,
}

/// Backend-computed severity totals across a batch (or all batches).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanStatistics {
    pub total_hosts: u64,
    pub total_vulns: u64,
    pub critical_count: u64,
    pub high_count: u64,
    pub medium_count: u64,
    pub low_count: u64,
    pub info_count: u64,
}
