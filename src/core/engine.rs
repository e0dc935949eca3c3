use crate::core::{Pipeline, VendorReport};
use crate::domain::model::ReportOutcome;
use crate::utils::error::Result;

/// 執行摘要
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: String,
    pub vendors: usize,
    pub with_versions: usize,
    pub without_versions: usize,
    pub fetch_failures: usize,
}

impl RunSummary {
    fn from_reports(output_path: String, reports: &[VendorReport]) -> Self {
        let mut summary = Self {
            output_path,
            vendors: reports.len(),
            ..Self::default()
        };
        for report in reports {
            match report.outcome {
                ReportOutcome::Versions { .. } => summary.with_versions += 1,
                ReportOutcome::NoValidVersions => summary.without_versions += 1,
                ReportOutcome::FetchFailed { .. } => summary.fetch_failures += 1,
            }
        }
        summary
    }
}

pub struct ScoutEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ScoutEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Vendors are processed one after another, in input order. The report is
    /// loaded after each vendor so finished blocks survive an interrupted run.
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("🚀 Starting version scan");

        let entries = self.pipeline.extract().await?;
        tracing::info!("📋 Loaded {} vendors", entries.len());

        // 沒有廠商時仍輸出空報告
        if entries.is_empty() {
            let output_path = self.pipeline.load(&[]).await?;
            tracing::info!("📁 Report saved to: {}", output_path);
            return Ok(RunSummary::from_reports(output_path, &[]));
        }

        let mut reports = Vec::with_capacity(entries.len());
        let mut output_path = String::new();
        for (index, entry) in entries.iter().enumerate() {
            tracing::debug!("Vendor {}/{}: {}", index + 1, entries.len(), entry.vendor);
            reports.push(self.pipeline.transform(entry).await);
            output_path = self.pipeline.load(&reports).await?;
        }

        tracing::info!("📁 Report saved to: {}", output_path);

        Ok(RunSummary::from_reports(output_path, &reports))
    }
}
