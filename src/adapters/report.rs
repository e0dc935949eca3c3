use crate::core::VendorReport;
use crate::domain::model::{ReportFormat, ReportOutcome};
use crate::utils::error::Result;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt::Write;

pub const NO_VERSIONS_MARKER: &str = "No valid versions found.";
pub const FETCH_FAILED_PREFIX: &str = "FAILED TO FETCH:";

#[derive(Serialize)]
struct JsonReport<'a> {
    /// 報告實際產生時間
    generated_at: NaiveDateTime,
    /// 判斷未來日期所用的比較時間
    as_of: NaiveDateTime,
    vendors: &'a [VendorReport],
}

pub fn render_report(
    reports: &[VendorReport],
    format: ReportFormat,
    generated_at: NaiveDateTime,
    as_of: NaiveDateTime,
) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(reports)),
        ReportFormat::Json => render_json(reports, generated_at, as_of),
    }
}

/// 每個廠商一個區塊，依輸入順序，區塊之間以空行分隔
pub fn render_text(reports: &[VendorReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(out, "{}", report.vendor);
        match &report.outcome {
            ReportOutcome::FetchFailed { url, .. } => {
                let _ = writeln!(out, "{} {}", FETCH_FAILED_PREFIX, url);
            }
            ReportOutcome::NoValidVersions => {
                let _ = writeln!(out, "{}", underline(&report.vendor));
                let _ = writeln!(out, "{}", NO_VERSIONS_MARKER);
            }
            ReportOutcome::Versions { versions } => {
                let _ = writeln!(out, "{}", underline(&report.vendor));
                for version in versions {
                    let _ = writeln!(out, "{}", version);
                }
            }
        }
        out.push('\n');
    }
    out
}

pub fn render_json(
    reports: &[VendorReport],
    generated_at: NaiveDateTime,
    as_of: NaiveDateTime,
) -> Result<String> {
    let report = JsonReport {
        generated_at,
        as_of,
        vendors: reports,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn underline(vendor: &str) -> String {
    "-".repeat(vendor.chars().count())
}
