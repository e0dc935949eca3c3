use crate::core::patterns::PatternSet;
use crate::domain::model::MatchKind;
use std::sync::Arc;

/// A single leftmost match on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    pub text: String,
    pub kind: MatchKind,
}

#[derive(Debug, Clone)]
pub struct PatternMatcher {
    patterns: Arc<PatternSet>,
}

impl PatternMatcher {
    pub fn new(patterns: Arc<PatternSet>) -> Self {
        Self { patterns }
    }

    /// 先試關鍵字樣式，找不到才退回長數字樣式；每行最多一個結果
    pub fn match_line(&self, line: &str) -> Option<LineMatch> {
        if let Some(found) = self.patterns.contextual.find(line) {
            return Some(LineMatch {
                text: found.as_str().to_string(),
                kind: MatchKind::Contextual,
            });
        }

        self.patterns
            .long_numeric
            .find(line)
            .map(|found| LineMatch {
                text: found.as_str().to_string(),
                kind: MatchKind::Fallback,
            })
    }
}
