use regex::Regex;

use super::domain::ReviewMetadata;
use super::DetectorError;

/// Sub-score plus the human-readable rationale behind it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AssessorReport {
    pub score: f64,
    pub flags: Vec<String>,
}

/// One independent reliability heuristic. Implementations bind to the trial
/// criteria at construction and stay stateless per call, so a detector can
/// be shared across threads freely.
pub(crate) trait Assessor: Send + Sync {
    /// Prefix applied to this assessor's flags when reports are merged.
    fn flag_prefix(&self) -> Option<&'static str>;

    fn assess(&self, review_text: &str, metadata: &ReviewMetadata) -> AssessorReport;
}

pub(crate) fn compile_pattern(pattern: &str) -> Result<Regex, DetectorError> {
    Regex::new(pattern).map_err(|source| DetectorError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
