use crate::core::dates::DateExtractor;
use crate::domain::model::{Candidate, FilterOutcome, RejectReason};

/// 內嵌元件或無關產品的關鍵字
pub const DEFAULT_DENYLIST: &[&str] = &[
    "webview",
    "edge",
    "chrome",
    "android",
    "ios",
    "browser",
    "beta program",
];

/// One rejection rule: a predicate over (matched text, context) tagged with a reason.
pub trait RejectionRule: Send + Sync {
    fn reason(&self) -> RejectReason;
    fn rejects(&self, candidate: &Candidate) -> bool;
}

#[derive(Debug, Clone)]
pub struct KeywordDenylistRule {
    keywords: Vec<String>,
}

impl KeywordDenylistRule {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn with_defaults(extra: &[String]) -> Self {
        Self::new(
            DEFAULT_DENYLIST
                .iter()
                .copied()
                .chain(extra.iter().map(String::as_str)),
        )
    }
}

impl RejectionRule for KeywordDenylistRule {
    fn reason(&self) -> RejectReason {
        RejectReason::KeywordDenylist
    }

    fn rejects(&self, candidate: &Candidate) -> bool {
        self.keywords
            .iter()
            .any(|keyword| candidate.context.text.contains(keyword.as_str()))
    }
}

#[derive(Debug, Clone)]
pub struct FutureDateRule {
    dates: DateExtractor,
}

impl FutureDateRule {
    pub fn new(dates: DateExtractor) -> Self {
        Self { dates }
    }
}

impl RejectionRule for FutureDateRule {
    fn reason(&self) -> RejectReason {
        RejectReason::FutureDate
    }

    fn rejects(&self, candidate: &Candidate) -> bool {
        self.dates.has_future_date(&candidate.context.text)
    }
}

/// `9`, `v12`, `v 3`: list numbering and footnote markers, not versions.
#[derive(Debug, Clone, Copy, Default)]
pub struct BareDigitRule;

impl RejectionRule for BareDigitRule {
    fn reason(&self) -> RejectReason {
        RejectReason::BareDigit
    }

    fn rejects(&self, candidate: &Candidate) -> bool {
        let text = candidate.matched.as_str();
        let text = text
            .strip_prefix('v')
            .or_else(|| text.strip_prefix('V'))
            .unwrap_or(text)
            .trim_start();
        (1..=2).contains(&text.len()) && text.bytes().all(|b| b.is_ascii_digit())
    }
}

/// `/v2/assets/app.js` 之類的路徑片段
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetPathRule;

impl RejectionRule for AssetPathRule {
    fn reason(&self) -> RejectReason {
        RejectReason::AssetPath
    }

    fn rejects(&self, candidate: &Candidate) -> bool {
        candidate.context.text.to_lowercase().contains("/v")
    }
}

pub struct NoiseFilter {
    rules: Vec<Box<dyn RejectionRule>>,
}

impl NoiseFilter {
    pub fn new(rules: Vec<Box<dyn RejectionRule>>) -> Self {
        Self { rules }
    }

    /// denylist → future date → bare digit → asset path
    pub fn standard(dates: DateExtractor, extra_denylist: &[String]) -> Self {
        Self::new(vec![
            Box::new(KeywordDenylistRule::with_defaults(extra_denylist)),
            Box::new(FutureDateRule::new(dates)),
            Box::new(BareDigitRule),
            Box::new(AssetPathRule),
        ])
    }

    pub fn evaluate(&self, candidate: &Candidate) -> FilterOutcome {
        self.rules
            .iter()
            .find(|rule| rule.rejects(candidate))
            .map(|rule| FilterOutcome::Reject(rule.reason()))
            .unwrap_or(FilterOutcome::Accept)
    }
}
