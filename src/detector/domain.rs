use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference parameters of the clinical study that reviews are matched against.
///
/// A detector clones the criteria at construction and treats them as
/// immutable for its lifetime; screening a second trial means building a
/// second detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalTrialCriteria {
    pub therapy_name: String,
    pub year: i32,
    pub duration_weeks: Option<u32>,
    /// Retained for future matching; not consulted by the assessors today.
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub condition_treated: Option<String>,
    pub inclusion_criteria: Vec<String>,
    pub exclusion_criteria: Vec<String>,
    pub side_effects_mentioned: Vec<String>,
}

impl ClinicalTrialCriteria {
    /// Criteria with only the required fields set.
    pub fn new(therapy_name: impl Into<String>, year: i32) -> Self {
        Self {
            therapy_name: therapy_name.into(),
            year,
            duration_weeks: None,
            dosage: None,
            frequency: None,
            condition_treated: None,
            inclusion_criteria: Vec::new(),
            exclusion_criteria: Vec::new(),
            side_effects_mentioned: Vec::new(),
        }
    }
}

/// Observable metadata accompanying one candidate review, populated
/// best-effort by the collecting side and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewMetadata {
    pub source_url: String,
    pub date_posted: DateTime<Utc>,
    pub user_id: Option<String>,
    pub user_history_months: u32,
    pub platform: Option<String>,
    pub verified_user: bool,
    pub review_length: usize,
    pub language_detected: String,
}

impl ReviewMetadata {
    /// Metadata with only the required fields; everything else takes the
    /// collector defaults (unknown language, zero history, unverified).
    pub fn new(source_url: impl Into<String>, date_posted: DateTime<Utc>) -> Self {
        Self {
            source_url: source_url.into(),
            date_posted,
            user_id: None,
            user_history_months: 0,
            platform: None,
            verified_user: false,
            review_length: 0,
            language_detected: "unknown".to_string(),
        }
    }
}

/// Full scoring breakdown for one review, allowing transparent audits.
///
/// Flags keep assessor order: authenticity first, then clinical entries
/// prefixed `Clinical: `, source entries prefixed `Source: `, temporal
/// entries prefixed `Temporal: `, with any hard-filter rejections appended
/// last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityScore {
    pub authenticity_score: f64,
    pub clinical_match_score: f64,
    pub source_credibility: f64,
    pub temporal_relevance: f64,
    pub overall_score: f64,
    pub flags: Vec<String>,
}
