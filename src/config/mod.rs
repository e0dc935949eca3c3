pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::ReportFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use chrono::NaiveDate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 25;
pub const DEFAULT_REPORT_FILENAME: &str = "scraped_versions.txt";
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "version-scout")]
#[command(about = "Mine software version strings from vendor release-notes pages")]
pub struct CliConfig {
    /// CSV file with a header row and vendor,url columns
    #[arg(long, default_value = "vendors.csv")]
    pub vendors: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_REPORT_FILENAME)]
    pub report_file: String,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, default_value_t = crate::adapters::html::DEFAULT_MIN_LINE_LENGTH)]
    pub min_line_length: usize,

    /// Extra denylist keywords, comma separated
    #[arg(long, value_delimiter = ',')]
    pub deny: Vec<String>,

    /// Compare release dates against this day instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn vendors_file(&self) -> &str {
        &self.vendors
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn report_filename(&self) -> &str {
        &self.report_file
    }

    fn report_format(&self) -> ReportFormat {
        self.format
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn user_agent(&self) -> Option<&str> {
        None
    }

    fn min_line_length(&self) -> usize {
        self.min_line_length
    }

    fn extra_denylist(&self) -> &[String] {
        &self.deny
    }

    fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("vendors", &self.vendors)?;
        validation::validate_file_extension("vendors", &self.vendors, &["csv"])?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("report_file", &self.report_file)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        validation::validate_positive_number("min_line_length", self.min_line_length, 1)?;
        Ok(())
    }
}
