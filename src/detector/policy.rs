use serde::{Deserialize, Serialize};

use super::config::DecisionThresholds;
use super::domain::ReliabilityScore;

/// Verdict for a screened review paired with the breakdown that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewVerdict {
    pub is_reliable: bool,
    pub score: ReliabilityScore,
}

/// Apply the caller threshold, then the two hard filters. Each filter forces
/// an unreliable verdict on its own: the weighted average can mask a single
/// disqualifying signal, so thresholding alone is not enough.
pub(crate) fn decide(
    mut score: ReliabilityScore,
    thresholds: &DecisionThresholds,
    threshold: f64,
) -> ReviewVerdict {
    let mut is_reliable = score.overall_score >= threshold;

    if score.authenticity_score < thresholds.authenticity_floor {
        is_reliable = false;
        score.flags.push("REJECTED: Very likely AI-generated".to_string());
    }

    if score.clinical_match_score < thresholds.clinical_match_floor {
        is_reliable = false;
        score.flags.push("REJECTED: No clinical relevance".to_string());
    }

    ReviewVerdict {
        is_reliable,
        score,
    }
}
