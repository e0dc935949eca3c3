use crate::domain::model::{ReportFormat, VendorEntry, VendorReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// 附加到既有檔案尾端，檔案不存在時建立
    fn append_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn vendors_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn report_filename(&self) -> &str;
    fn report_format(&self) -> ReportFormat;
    fn request_timeout(&self) -> Duration;
    fn user_agent(&self) -> Option<&str>;
    fn min_line_length(&self) -> usize;
    fn extra_denylist(&self) -> &[String];
    fn as_of(&self) -> Option<NaiveDate>;
}

/// 提供 (vendor, url) 清單的來源
pub trait VendorSource: Send + Sync {
    fn vendors(&self) -> Result<Vec<VendorEntry>>;
}

impl VendorSource for Vec<VendorEntry> {
    fn vendors(&self) -> Result<Vec<VendorEntry>> {
        Ok(self.clone())
    }
}

/// Single-attempt page fetch. Errors are vendor-scoped and never retried.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Raw page content to ordered, trimmed, non-empty lines.
pub trait TextNormalizer: Send + Sync {
    fn normalize(&self, raw: &str) -> Vec<String>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<VendorEntry>>;
    async fn transform(&self, entry: &VendorEntry) -> VendorReport;
    /// Called after every vendor with all reports completed so far, and once
    /// with an empty slice when the list has no vendors.
    async fn load(&self, completed: &[VendorReport]) -> Result<String>;
}
