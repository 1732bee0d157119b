use chrono::Datelike;

use super::assessor::{Assessor, AssessorReport};
use super::domain::ReviewMetadata;

/// Scores the gap between the posting year and the trial year on a piecewise
/// scale, with a bonus for reviews written once the trial had concluded.
pub(crate) struct TemporalRelevanceAssessor {
    trial_year: i32,
}

impl TemporalRelevanceAssessor {
    pub(crate) fn new(trial_year: i32) -> Self {
        Self { trial_year }
    }
}

impl Assessor for TemporalRelevanceAssessor {
    fn flag_prefix(&self) -> Option<&'static str> {
        Some("Temporal: ")
    }

    fn assess(&self, _review_text: &str, metadata: &ReviewMetadata) -> AssessorReport {
        let review_year = metadata.date_posted.year();
        let years_diff = (review_year - self.trial_year).abs();

        let (mut score, band_flag) = match years_diff {
            0 => (1.0, "Posted same year as clinical trial".to_string()),
            1..=2 => (0.8, "Posted within 2 years of clinical trial".to_string()),
            3..=5 => (0.6, "Posted within 5 years of clinical trial".to_string()),
            6..=10 => (0.4, "Posted within 10 years of clinical trial".to_string()),
            _ => (
                (1.0 - years_diff as f64 * 0.1).max(0.1),
                format!("Posted {years_diff} years from clinical trial"),
            ),
        };
        let mut flags = vec![band_flag];

        if review_year >= self.trial_year {
            flags.push("Posted after clinical trial completion".to_string());
            score = (score + 0.1).min(1.0);
        }

        AssessorReport { score, flags }
    }
}
