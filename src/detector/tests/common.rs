use chrono::{DateTime, TimeZone, Utc};

use crate::detector::{ClinicalTrialCriteria, ReliableReviewDetector, ReviewMetadata};

pub(super) fn trial() -> ClinicalTrialCriteria {
    ClinicalTrialCriteria {
        therapy_name: "Cognitive Behavioral Therapy".to_string(),
        year: 2015,
        duration_weeks: Some(12),
        dosage: None,
        frequency: None,
        condition_treated: Some("chronic pain".to_string()),
        inclusion_criteria: Vec::new(),
        exclusion_criteria: Vec::new(),
        side_effects_mentioned: vec!["initial anxiety".to_string(), "fatigue".to_string()],
    }
}

pub(super) fn detector() -> ReliableReviewDetector {
    ReliableReviewDetector::new(trial()).expect("default patterns compile")
}

pub(super) fn posted(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 3, 15, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn metadata(year: i32) -> ReviewMetadata {
    ReviewMetadata::new("https://patientslikeme.com/review/12345", posted(year))
}

pub(super) fn strong_metadata(year: i32) -> ReviewMetadata {
    let mut metadata = metadata(year);
    metadata.verified_user = true;
    metadata.user_history_months = 24;
    metadata.platform = Some("patientslikeme.com".to_string());
    metadata.review_length = 200;
    metadata.language_detected = "en".to_string();
    metadata
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
