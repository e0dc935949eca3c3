use crate::core::patterns::PatternSet;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;

/// Finds `<Month> <day>, <year>` dates in text and compares them against an injected "now".
#[derive(Debug, Clone)]
pub struct DateExtractor {
    patterns: Arc<PatternSet>,
    now: NaiveDateTime,
}

impl DateExtractor {
    pub fn new(patterns: Arc<PatternSet>, now: NaiveDateTime) -> Self {
        Self { patterns, now }
    }

    /// 回傳所有可解析的日期，無法解析的片段直接略過
    pub fn dates_in(&self, text: &str) -> Vec<NaiveDate> {
        self.patterns
            .date
            .captures_iter(text)
            .filter_map(|caps| {
                let normalized = format!("{} {} {}", &caps[1], &caps[2], &caps[3]);
                parse_month_day_year(&normalized)
            })
            .collect()
    }

    pub fn has_future_date(&self, text: &str) -> bool {
        self.dates_in(text)
            .into_iter()
            .any(|date| self.is_after_now(date))
    }

    pub fn latest_past_date(&self, text: &str) -> Option<NaiveDate> {
        self.dates_in(text)
            .into_iter()
            .filter(|date| !self.is_after_now(*date))
            .max()
    }

    // 日期以當天 00:00 與 now 比較
    fn is_after_now(&self, date: NaiveDate) -> bool {
        date.and_hms_opt(0, 0, 0)
            .map(|midnight| midnight > self.now)
            .unwrap_or(false)
    }
}

fn parse_month_day_year(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%B %d %Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%b %d %Y"))
        .ok()
}
