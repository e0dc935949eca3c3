use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 一筆待掃描的廠商與其 release notes 網址
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorEntry {
    pub vendor: String,
    pub url: String,
}

impl VendorEntry {
    pub fn new(vendor: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            url: url.into(),
        }
    }
}

/// 正規化後的頁面文字：已去除標記、trim 過且非空的行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    vendor: String,
    lines: Vec<String>,
}

impl SourceText {
    pub fn new(vendor: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            vendor: vendor.into(),
            lines,
        }
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Which pattern produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Contextual,
    Fallback,
}

/// Lines `[start, end)` of a source around a match, joined with `\n` and lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl ContextWindow {
    pub fn line_count(&self) -> usize {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub matched: String,
    pub line_index: usize,
    pub kind: MatchKind,
    pub context: ContextWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    KeywordDenylist,
    FutureDate,
    BareDigit,
    AssetPath,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RejectReason::KeywordDenylist => "keyword-denylist",
            RejectReason::FutureDate => "future-date",
            RejectReason::BareDigit => "bare-digit",
            RejectReason::AssetPath => "asset-path",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    Accept,
    Reject(RejectReason),
}

impl FilterOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, FilterOutcome::Accept)
    }
}

/// 單一候選版本的判定紀錄，用於診斷輸出
#[derive(Debug, Clone)]
pub struct CandidateDecision {
    pub candidate: Candidate,
    pub outcome: FilterOutcome,
    pub latest_past_date: Option<NaiveDate>,
    pub duplicate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome {
    Versions { versions: Vec<String> },
    NoValidVersions,
    FetchFailed { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorReport {
    pub vendor: String,
    #[serde(flatten)]
    pub outcome: ReportOutcome,
}

impl VendorReport {
    pub fn from_versions(vendor: impl Into<String>, versions: Vec<String>) -> Self {
        let outcome = if versions.is_empty() {
            ReportOutcome::NoValidVersions
        } else {
            ReportOutcome::Versions { versions }
        };
        Self {
            vendor: vendor.into(),
            outcome,
        }
    }

    pub fn fetch_failed(
        vendor: impl Into<String>,
        url: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            outcome: ReportOutcome::FetchFailed {
                url: url.into(),
                reason: reason.into(),
            },
        }
    }

    pub fn versions(&self) -> &[String] {
        match &self.outcome {
            ReportOutcome::Versions { versions } => versions,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}
