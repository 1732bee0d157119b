//! Reliability scoring engine for medical treatment reviews.
//!
//! A detector is bound to one clinical trial at construction and then scores
//! any number of reviews against it. Four independent assessors each produce
//! a bounded sub-score plus rationale flags; a weighted combination and two
//! hard filters yield the final verdict. Every call is pure apart from
//! tracing events, so one detector may serve concurrent callers.

mod assessor;
mod authenticity;
mod clinical;
pub mod config;
mod credibility;
pub mod domain;
mod policy;
mod temporal;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, DetectorConfig};
pub use domain::{ClinicalTrialCriteria, ReliabilityScore, ReviewMetadata};
pub use policy::ReviewVerdict;

use assessor::Assessor;
use authenticity::AuthenticityAssessor;
use clinical::ClinicalMatchAssessor;
use credibility::SourceCredibilityAssessor;
use temporal::TemporalRelevanceAssessor;

/// Error raised while building a detector from its configuration.
#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("invalid heuristic pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Stateless engine applying the reliability heuristics to reviews of one
/// bound clinical trial.
pub struct ReliableReviewDetector {
    criteria: ClinicalTrialCriteria,
    config: DetectorConfig,
    authenticity: AuthenticityAssessor,
    clinical: ClinicalMatchAssessor,
    credibility: SourceCredibilityAssessor,
    temporal: TemporalRelevanceAssessor,
}

impl ReliableReviewDetector {
    pub fn new(criteria: ClinicalTrialCriteria) -> Result<Self, DetectorError> {
        Self::with_config(criteria, DetectorConfig::default())
    }

    /// Build a detector with an explicit configuration, compiling the
    /// configured patterns once up front.
    pub fn with_config(
        criteria: ClinicalTrialCriteria,
        config: DetectorConfig,
    ) -> Result<Self, DetectorError> {
        let authenticity = AuthenticityAssessor::from_lexicon(&config.authenticity)?;
        let clinical = ClinicalMatchAssessor::new(&criteria, &config.vocabulary)?;
        let credibility = SourceCredibilityAssessor::new(&config.credibility);
        let temporal = TemporalRelevanceAssessor::new(criteria.year);

        tracing::debug!(
            therapy = %criteria.therapy_name,
            trial_year = criteria.year,
            "review detector ready"
        );

        Ok(Self {
            criteria,
            config,
            authenticity,
            clinical,
            credibility,
            temporal,
        })
    }

    /// The trial this detector is bound to.
    pub fn criteria(&self) -> &ClinicalTrialCriteria {
        &self.criteria
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Full scoring breakdown without a verdict. Runs every assessor
    /// uniformly and merges their flags in assessor order.
    pub fn score(&self, review_text: &str, metadata: &ReviewMetadata) -> ReliabilityScore {
        let assessors: [&dyn Assessor; 4] = [
            &self.authenticity,
            &self.clinical,
            &self.credibility,
            &self.temporal,
        ];

        let mut sub_scores = [0.0_f64; 4];
        let mut flags = Vec::new();
        for (slot, assessor) in sub_scores.iter_mut().zip(assessors) {
            let report = assessor.assess(review_text, metadata);
            *slot = report.score;
            match assessor.flag_prefix() {
                Some(prefix) => {
                    flags.extend(report.flags.into_iter().map(|flag| format!("{prefix}{flag}")))
                }
                None => flags.extend(report.flags),
            }
        }

        let [authenticity_score, clinical_match_score, source_credibility, temporal_relevance] =
            sub_scores;
        let weights = &self.config.weights;
        let overall_score = authenticity_score * weights.authenticity
            + clinical_match_score * weights.clinical_match
            + source_credibility * weights.source_credibility
            + temporal_relevance * weights.temporal_relevance;

        ReliabilityScore {
            authenticity_score,
            clinical_match_score,
            source_credibility,
            temporal_relevance,
            overall_score,
            flags,
        }
    }

    /// Decide reliability at the configured threshold.
    pub fn evaluate(&self, review_text: &str, metadata: &ReviewMetadata) -> ReviewVerdict {
        self.evaluate_with_threshold(review_text, metadata, self.config.thresholds.reliability)
    }

    /// Decide reliability at a caller-supplied threshold. The hard filters
    /// apply regardless of the threshold value.
    pub fn evaluate_with_threshold(
        &self,
        review_text: &str,
        metadata: &ReviewMetadata,
        threshold: f64,
    ) -> ReviewVerdict {
        let score = self.score(review_text, metadata);
        let verdict = policy::decide(score, &self.config.thresholds, threshold);

        tracing::info!(
            overall = verdict.score.overall_score,
            reliable = verdict.is_reliable,
            "review reliability"
        );

        verdict
    }
}
