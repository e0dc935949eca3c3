use crate::utils::error::Result;
use regex::Regex;
use std::sync::Arc;

/// 關鍵字 + 版本號，例如 `Version 4.2.1`、`build #1234`、`GG 85.0 beta 2`
const CONTEXTUAL_PATTERN: &str = r"(?i)\b(?:version|v(?:er)?|build|release|rev(?:ision)?|update|gg)\s*[#:=-]?\s*\d+(?:\.\d+){0,3}(?:\.x)?(?:\s*(?:beta|rc|patch)\s*\d*)?\b";

/// 沒有關鍵字的長版本號（3 到 5 段），常見於 Wikipedia 資訊框
const LONG_NUMERIC_PATTERN: &str = r"\b\d+(?:\.\d+){2,4}\b";

/// `<Month> <day>, <year>`，月份可為全名或縮寫
const DATE_PATTERN: &str = r"(?i)((?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*)\s+(\d{1,2}),?\s+(\d{4})";

/// Compiled once at startup and shared read-only between the matcher and the date extractor.
#[derive(Debug)]
pub struct PatternSet {
    pub contextual: Regex,
    pub long_numeric: Regex,
    pub date: Regex,
}

impl PatternSet {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            contextual: Regex::new(CONTEXTUAL_PATTERN)?,
            long_numeric: Regex::new(LONG_NUMERIC_PATTERN)?,
            date: Regex::new(DATE_PATTERN)?,
        })
    }

    pub fn shared() -> Result<Arc<Self>> {
        Self::compile().map(Arc::new)
    }
}
