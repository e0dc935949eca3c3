use crate::adapters::html::HtmlTextNormalizer;
use crate::adapters::http::HttpFetcher;
use crate::adapters::report::{render_report, render_text};
use crate::adapters::vendor_list::CsvVendorList;
use crate::core::extraction::VersionExtractor;
use crate::core::patterns::PatternSet;
use crate::core::{
    ConfigProvider, PageFetcher, Pipeline, SourceText, Storage, TextNormalizer, VendorEntry,
    VendorReport, VendorSource,
};
use crate::domain::model::ReportFormat;
use crate::utils::error::Result;
use crate::utils::validation::validate_url;
use chrono::{Local, NaiveDateTime};

/// 報告輸出設定
#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub output_path: String,
    pub filename: String,
    pub format: ReportFormat,
}

impl ReportSettings {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            output_path: config.output_path().to_string(),
            filename: config.report_filename().to_string(),
            format: config.report_format(),
        }
    }
}

/// Per-vendor fetch → normalize → extract, with the report written through `Storage`.
pub struct VendorPipeline<V, F, N, S>
where
    V: VendorSource,
    F: PageFetcher,
    N: TextNormalizer,
    S: Storage,
{
    vendors: V,
    fetcher: F,
    normalizer: N,
    storage: S,
    extractor: VersionExtractor,
    report: ReportSettings,
    now: NaiveDateTime,
}

impl<S: Storage> VendorPipeline<CsvVendorList, HttpFetcher, HtmlTextNormalizer, S> {
    pub fn from_config<C: ConfigProvider>(config: &C, storage: S) -> Result<Self> {
        let now = resolve_now(config);
        let fetcher = HttpFetcher::new(config.request_timeout(), config.user_agent())?;
        let extractor =
            VersionExtractor::standard(PatternSet::shared()?, now, config.extra_denylist());

        Ok(VendorPipeline::new(
            CsvVendorList::new(config.vendors_file()),
            fetcher,
            HtmlTextNormalizer::new(config.min_line_length()),
            storage,
            extractor,
            ReportSettings::from_config(config),
            now,
        ))
    }
}

impl<V, F, N, S> VendorPipeline<V, F, N, S>
where
    V: VendorSource,
    F: PageFetcher,
    N: TextNormalizer,
    S: Storage,
{
    pub fn new(
        vendors: V,
        fetcher: F,
        normalizer: N,
        storage: S,
        extractor: VersionExtractor,
        report: ReportSettings,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            vendors,
            fetcher,
            normalizer,
            storage,
            extractor,
            report,
            now,
        }
    }
}

/// `as_of` 固定比較日期；未設定時使用本地時間
pub fn resolve_now<C: ConfigProvider>(config: &C) -> NaiveDateTime {
    config
        .as_of()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_else(|| Local::now().naive_local())
}

#[async_trait::async_trait]
impl<V, F, N, S> Pipeline for VendorPipeline<V, F, N, S>
where
    V: VendorSource,
    F: PageFetcher,
    N: TextNormalizer,
    S: Storage,
{
    async fn extract(&self) -> Result<Vec<VendorEntry>> {
        let entries = self.vendors.vendors()?;
        tracing::debug!("Loaded {} vendor entries", entries.len());
        Ok(entries)
    }

    async fn transform(&self, entry: &VendorEntry) -> VendorReport {
        tracing::info!("🔍 Fetching {}: {}", entry.vendor, entry.url);

        if let Err(e) = validate_url("url", &entry.url) {
            tracing::warn!("❌ Skipping fetch for {}: {}", entry.vendor, e);
            return VendorReport::fetch_failed(&entry.vendor, &entry.url, e.to_string());
        }

        let raw = match self.fetcher.fetch(&entry.url).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("❌ Failed to fetch {}: {}", entry.vendor, e);
                return VendorReport::fetch_failed(&entry.vendor, &entry.url, e.to_string());
            }
        };

        let lines = self.normalizer.normalize(&raw);
        tracing::debug!("{}: {} lines after normalization", entry.vendor, lines.len());

        self.extractor
            .report(&SourceText::new(entry.vendor.clone(), lines))
    }

    async fn load(&self, completed: &[VendorReport]) -> Result<String> {
        let output_path = format!("{}/{}", self.report.output_path, self.report.filename);

        match (self.report.format, completed.split_last()) {
            // 文字報告逐一附加區塊，中斷時已完成的廠商仍保留在檔案中
            (ReportFormat::Text, Some((latest, earlier))) if !earlier.is_empty() => {
                let block = render_text(std::slice::from_ref(latest));
                tracing::debug!("Appending {} block ({} bytes)", latest.vendor, block.len());
                self.storage
                    .append_file(&self.report.filename, block.as_bytes())
                    .await?;
            }
            _ => {
                let rendered = render_report(
                    completed,
                    self.report.format,
                    Local::now().naive_local(),
                    self.now,
                )?;
                tracing::debug!("Writing report ({} bytes) to storage", rendered.len());
                self.storage
                    .write_file(&self.report.filename, rendered.as_bytes())
                    .await?;
            }
        }

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ReportOutcome;
    use crate::utils::error::ScoutError;
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }

        async fn append_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files
                .entry(path.to_string())
                .or_default()
                .extend_from_slice(data);
            Ok(())
        }
    }

    /// 以 URL 對應預先準備的頁面內容
    struct MockFetcher {
        pages: HashMap<String, String>,
    }

    #[async_trait::async_trait]
    impl PageFetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| ScoutError::FetchError {
                    url: url.to_string(),
                    message: "HTTP status 404 Not Found".to_string(),
                })
        }
    }

    struct LineSplitter;

    impl TextNormalizer for LineSplitter {
        fn normalize(&self, raw: &str) -> Vec<String> {
            raw.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect()
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn pipeline(
        storage: MockStorage,
    ) -> VendorPipeline<Vec<VendorEntry>, MockFetcher, LineSplitter, MockStorage> {
        let vendors = vec![
            VendorEntry::new("Acme", "https://acme.test/notes"),
            VendorEntry::new("Globex", "https://globex.test/missing"),
        ];
        let pages = HashMap::from([(
            "https://acme.test/notes".to_string(),
            "Release notes\nVersion 3.2.0\nPublished May 2, 2024".to_string(),
        )]);

        VendorPipeline::new(
            vendors,
            MockFetcher { pages },
            LineSplitter,
            storage,
            VersionExtractor::standard(PatternSet::shared().unwrap(), now(), &[]),
            ReportSettings {
                output_path: "test_output".to_string(),
                filename: "versions.txt".to_string(),
                format: ReportFormat::Text,
            },
            now(),
        )
    }

    #[tokio::test]
    async fn test_transform_extracts_versions() {
        let pipeline = pipeline(MockStorage::new());
        let report = pipeline
            .transform(&VendorEntry::new("Acme", "https://acme.test/notes"))
            .await;

        assert_eq!(report.versions(), &["Version 3.2.0".to_string()]);
    }

    #[tokio::test]
    async fn test_transform_reports_fetch_failure() {
        let pipeline = pipeline(MockStorage::new());
        let report = pipeline
            .transform(&VendorEntry::new("Globex", "https://globex.test/missing"))
            .await;

        match report.outcome {
            ReportOutcome::FetchFailed { url, reason } => {
                assert_eq!(url, "https://globex.test/missing");
                assert!(reason.contains("404"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transform_rejects_non_http_url_without_fetching() {
        let pipeline = pipeline(MockStorage::new());
        let report = pipeline
            .transform(&VendorEntry::new("Acme", "ftp://acme.test/notes"))
            .await;

        match report.outcome {
            ReportOutcome::FetchFailed { url, reason } => {
                assert_eq!(url, "ftp://acme.test/notes");
                assert!(reason.contains("Unsupported URL scheme: ftp"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_appends_each_vendor_block() {
        let storage = MockStorage::new();
        storage
            .write_file("versions.txt", b"stale report from last run\n")
            .await
            .unwrap();
        let pipeline = pipeline(storage.clone());

        let mut completed = vec![VendorReport::from_versions(
            "Acme",
            vec!["Version 3.2.0".to_string()],
        )];
        let output_path = pipeline.load(&completed).await.unwrap();
        assert_eq!(output_path, "test_output/versions.txt");

        // 第一個區塊覆寫舊檔案
        let written = String::from_utf8(storage.get_file("versions.txt").await.unwrap()).unwrap();
        assert_eq!(written, "Acme\n----\nVersion 3.2.0\n\n");

        completed.push(VendorReport::fetch_failed(
            "Globex",
            "https://globex.test/missing",
            "timeout",
        ));
        pipeline.load(&completed).await.unwrap();

        let written = String::from_utf8(storage.get_file("versions.txt").await.unwrap()).unwrap();
        assert_eq!(
            written,
            "Acme\n----\nVersion 3.2.0\n\nGlobex\nFAILED TO FETCH: https://globex.test/missing\n\n"
        );
    }

    #[tokio::test]
    async fn test_load_empty_truncates_text_report() {
        let storage = MockStorage::new();
        storage.write_file("versions.txt", b"stale").await.unwrap();
        let pipeline = pipeline(storage.clone());

        pipeline.load(&[]).await.unwrap();

        assert_eq!(storage.get_file("versions.txt").await.unwrap(), b"");
    }

    #[tokio::test]
    async fn test_load_json_rewrites_whole_report() {
        let storage = MockStorage::new();
        let mut pipeline = pipeline(storage.clone());
        pipeline.report.format = ReportFormat::Json;

        let completed = vec![
            VendorReport::from_versions("Acme", vec!["Version 3.2.0".to_string()]),
            VendorReport::from_versions("Globex", Vec::new()),
        ];
        pipeline.load(&completed[..1]).await.unwrap();
        pipeline.load(&completed).await.unwrap();

        let written = storage.get_file("versions.txt").await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&written).unwrap();
        assert_eq!(value["as_of"], "2024-06-01T00:00:00");
        assert_eq!(value["vendors"].as_array().unwrap().len(), 2);
        assert_eq!(value["vendors"][1]["status"], "no_valid_versions");
    }
}
