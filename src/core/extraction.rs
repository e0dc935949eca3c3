use crate::core::dates::DateExtractor;
use crate::core::filter::NoiseFilter;
use crate::core::matcher::PatternMatcher;
use crate::core::patterns::PatternSet;
use crate::core::window::build_context_window;
use crate::domain::model::{Candidate, CandidateDecision, FilterOutcome, SourceText, VendorReport};
use chrono::NaiveDateTime;
use std::collections::HashSet;
use std::sync::Arc;

/// 單一廠商的擷取結果
#[derive(Debug, Clone)]
pub struct Extraction {
    pub versions: Vec<String>,
    pub decisions: Vec<CandidateDecision>,
}

impl Extraction {
    pub fn rejected(&self) -> impl Iterator<Item = &CandidateDecision> {
        self.decisions.iter().filter(|d| !d.outcome.is_accepted())
    }

    pub fn duplicates(&self) -> usize {
        self.decisions.iter().filter(|d| d.duplicate).count()
    }
}

/// match → window → filter → dedup, one vendor at a time.
pub struct VersionExtractor {
    matcher: PatternMatcher,
    dates: DateExtractor,
    filter: NoiseFilter,
}

impl VersionExtractor {
    pub fn new(matcher: PatternMatcher, dates: DateExtractor, filter: NoiseFilter) -> Self {
        Self {
            matcher,
            dates,
            filter,
        }
    }

    /// Standard rule set over shared patterns, with "now" fixed for the whole run.
    pub fn standard(patterns: Arc<PatternSet>, now: NaiveDateTime, extra_denylist: &[String]) -> Self {
        let dates = DateExtractor::new(patterns.clone(), now);
        Self::new(
            PatternMatcher::new(patterns),
            dates.clone(),
            NoiseFilter::standard(dates, extra_denylist),
        )
    }

    pub fn extract(&self, source: &SourceText) -> Extraction {
        let lines = source.lines();
        let mut decisions = Vec::new();
        let mut seen = HashSet::new();

        for (index, line) in lines.iter().enumerate() {
            let Some(found) = self.matcher.match_line(line) else {
                continue;
            };

            let candidate = Candidate {
                matched: found.text,
                line_index: index,
                kind: found.kind,
                context: build_context_window(lines, index),
            };

            let outcome = self.filter.evaluate(&candidate);
            let duplicate = outcome.is_accepted() && !seen.insert(candidate.matched.clone());

            match outcome {
                FilterOutcome::Reject(reason) => tracing::debug!(
                    "🚫 {}: line {} '{}' rejected ({})",
                    source.vendor(),
                    index,
                    candidate.matched,
                    reason
                ),
                FilterOutcome::Accept if duplicate => tracing::debug!(
                    "🔁 {}: line {} '{}' already seen",
                    source.vendor(),
                    index,
                    candidate.matched
                ),
                FilterOutcome::Accept => tracing::debug!(
                    "✅ {}: line {} '{}' accepted ({:?})",
                    source.vendor(),
                    index,
                    candidate.matched,
                    candidate.kind
                ),
            }

            let latest_past_date = self.dates.latest_past_date(&candidate.context.text);
            decisions.push(CandidateDecision {
                candidate,
                outcome,
                latest_past_date,
                duplicate,
            });
        }

        let versions = crate::core::dedup::dedup_first_seen(
            decisions
                .iter()
                .filter(|d| d.outcome.is_accepted())
                .map(|d| d.candidate.matched.clone()),
        );

        Extraction {
            versions,
            decisions,
        }
    }

    pub fn report(&self, source: &SourceText) -> VendorReport {
        let extraction = self.extract(source);
        tracing::info!(
            "📊 {}: {} candidates, {} rejected, {} duplicates, {} versions kept",
            source.vendor(),
            extraction.decisions.len(),
            extraction.rejected().count(),
            extraction.duplicates(),
            extraction.versions.len()
        );
        VendorReport::from_versions(source.vendor(), extraction.versions)
    }
}
