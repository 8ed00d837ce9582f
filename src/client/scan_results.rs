use tracing::debug;

use super::{Envelope, HttpBackend};
use crate::errors::VulndeckError;
use crate::models::{ScanBatch, ScanBatchInfo, ScanStatistics, ScanVulnerability, Severity};

impl HttpBackend {
    pub(crate) async fn fetch_batch(&self, id: &str) -> Result<ScanBatch, VulndeckError> {
        let path = format!("/scan-results/{}", id);
        let resp = self.get(&path, &[]).await?;
        let envelope: Envelope<ScanBatch> = self.parse(&path, resp).await?;
        debug!(batch = %id, hosts = envelope.data.hosts.len(), "Fetched scan batch");
        Ok(envelope.data)
    }

    pub(crate) async fn fetch_batch_infos(&self) -> Result<Vec<ScanBatchInfo>, VulndeckError> {
        let path = "/scan-results/batches/info";
        let resp = self.get(path, &[]).await?;
        let envelope: Envelope<Vec<ScanBatchInfo>> = self.parse(path, resp).await?;
        Ok(envelope.data)
    }

    pub(crate) async fn fetch_statistics(
        &self,
        scan_batch_id: Option<&str>,
    ) -> Result<ScanStatistics, VulndeckError> {
        let path = "/scan-results/statistics/summary";
        let mut query = Vec::new();
        if let Some(id) = scan_batch_id {
            query.push(("scanBatchId", id.to_string()));
        }
        let resp = self.get(path, &query).await?;
        // Statistics come back bare, without the data envelope.
        self.parse(path, resp).await
    }

    pub(crate) async fn fetch_vulnerabilities(
        &self,
        severity: Severity,
        scan_batch_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<ScanVulnerability>, VulndeckError> {
        let path = format!("/scan-results/vulnerabilities/severity/{}", severity.label());
        let mut query = Vec::new();
        if let Some(id) = scan_batch_id {
            query.push(("scanBatchId", id.to_string()));
        }
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        let resp = self.get(&path, &query).await?;
        let envelope: Envelope<Vec<ScanVulnerability>> = self.parse(&path, resp).await?;
        Ok(envelope.data)
    }
}
