use crate::adapters::html::DEFAULT_MIN_LINE_LENGTH;
use crate::config::{DEFAULT_REPORT_FILENAME, DEFAULT_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::domain::model::ReportFormat;
use crate::utils::error::{Result, ScoutError};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub vendors_file: String,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub min_line_length: Option<usize>,
    #[serde(default)]
    pub extra_denylist: Vec<String>,
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_path: String,
    pub filename: Option<String>,
    #[serde(default)]
    pub format: ReportFormat,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScoutError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScoutError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${VENDOR_LIST})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl ConfigProvider for TomlConfig {
    fn vendors_file(&self) -> &str {
        &self.source.vendors_file
    }

    fn output_path(&self) -> &str {
        &self.report.output_path
    }

    fn report_filename(&self) -> &str {
        self.report
            .filename
            .as_deref()
            .unwrap_or(DEFAULT_REPORT_FILENAME)
    }

    fn report_format(&self) -> ReportFormat {
        self.report.format
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds())
    }

    fn user_agent(&self) -> Option<&str> {
        self.source.user_agent.as_deref()
    }

    fn min_line_length(&self) -> usize {
        self.extract.min_line_length.unwrap_or(DEFAULT_MIN_LINE_LENGTH)
    }

    fn extra_denylist(&self) -> &[String] {
        &self.extract.extra_denylist
    }

    fn as_of(&self) -> Option<NaiveDate> {
        self.extract.as_of
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source.vendors_file", &self.source.vendors_file)?;
        validation::validate_file_extension("source.vendors_file", &self.source.vendors_file, &["csv"])?;
        validation::validate_range("source.timeout_seconds", self.timeout_seconds(), 1, MAX_TIMEOUT_SECONDS)?;
        if let Some(agent) = &self.source.user_agent {
            validation::validate_non_empty_string("source.user_agent", agent)?;
        }
        validation::validate_positive_number("extract.min_line_length", self.min_line_length(), 1)?;
        validation::validate_path("report.output_path", &self.report.output_path)?;
        validation::validate_non_empty_string("report.filename", self.report_filename())?;
        Ok(())
    }
}
