use super::common::{assert_close, detector, strong_metadata, trial};
use crate::detector::{DetectorConfig, ReliableReviewDetector};

const HUMAN_REVIEW: &str =
    "I started cognitive behavioral therapy for my chronic pain in 2016 after reading about \
     the study. The first 12 weeks were hard and I felt more anxious at the start. By week \
     eight the pain management techniques helped and I slept better. Some fatigue early on \
     but it faded.";

const TEMPLATE_REVIEW: &str =
    "I hope this helps with your chronic pain decision. It's important to note that results \
     may differ. 1. Structured approach 2. Evidence based. In conclusion, your pain may get \
     better. This is not medical advice.";

#[test]
fn overall_is_the_weighted_sum_of_sub_scores() {
    let score = detector().score(HUMAN_REVIEW, &strong_metadata(2016));

    let expected = score.authenticity_score * 0.35
        + score.clinical_match_score * 0.30
        + score.source_credibility * 0.20
        + score.temporal_relevance * 0.15;
    assert_close(score.overall_score, expected);
}

#[test]
fn flags_keep_assessor_order_with_prefixes() {
    let score = detector().score(
        "I hope this helps. That being said, my chronic pain got better.",
        &strong_metadata(2016),
    );

    assert_eq!(score.flags[0], "Contains 2 generic AI phrases");

    let first_clinical = score
        .flags
        .iter()
        .position(|flag| flag.starts_with("Clinical: "))
        .expect("clinical flags present");
    let first_source = score
        .flags
        .iter()
        .position(|flag| flag.starts_with("Source: "))
        .expect("source flags present");
    let first_temporal = score
        .flags
        .iter()
        .position(|flag| flag.starts_with("Temporal: "))
        .expect("temporal flags present");
    assert!(first_clinical < first_source);
    assert!(first_source < first_temporal);
}

#[test]
fn authenticity_floor_overrides_any_threshold() {
    let verdict =
        detector().evaluate_with_threshold(TEMPLATE_REVIEW, &strong_metadata(2016), 0.0);

    assert!(!verdict.is_reliable);
    assert!(verdict.score.authenticity_score < 0.3);
    assert!(verdict
        .score
        .flags
        .contains(&"REJECTED: Very likely AI-generated".to_string()));
    // Clinically on-topic, so only the authenticity filter fires.
    assert!(!verdict
        .score
        .flags
        .contains(&"REJECTED: No clinical relevance".to_string()));
}

#[test]
fn clinical_floor_overrides_any_threshold() {
    let verdict = detector().evaluate_with_threshold(
        "The bus was late but the driver was kind. The weather was lovely.",
        &strong_metadata(2016),
        0.0,
    );

    assert!(!verdict.is_reliable);
    assert_close(verdict.score.clinical_match_score, 0.0);
    assert!(verdict
        .score
        .flags
        .contains(&"REJECTED: No clinical relevance".to_string()));
    assert!(!verdict
        .score
        .flags
        .contains(&"REJECTED: Very likely AI-generated".to_string()));
}

#[test]
fn rejection_flags_come_last() {
    let verdict =
        detector().evaluate_with_threshold(TEMPLATE_REVIEW, &strong_metadata(2016), 0.0);

    let last = verdict.score.flags.last().expect("flags present");
    assert!(last.starts_with("REJECTED:"));
}

#[test]
fn decisions_are_idempotent() {
    let engine = detector();
    let metadata = strong_metadata(2016);

    let first = engine.evaluate(HUMAN_REVIEW, &metadata);
    let second = engine.evaluate(HUMAN_REVIEW, &metadata);

    assert_eq!(first, second);
}

#[test]
fn configured_threshold_drives_the_default_decision() {
    let accepted = detector().evaluate(HUMAN_REVIEW, &strong_metadata(2016));
    assert!(accepted.is_reliable);

    let mut config = DetectorConfig::default();
    config.thresholds.reliability = 0.99;
    let strict = ReliableReviewDetector::with_config(trial(), config)
        .expect("default patterns compile");

    let rejected = strict.evaluate(HUMAN_REVIEW, &strong_metadata(2016));
    assert!(!rejected.is_reliable);
}

#[test]
fn score_serializes_as_a_flat_mapping() {
    let score = detector().score(HUMAN_REVIEW, &strong_metadata(2016));

    let value = serde_json::to_value(&score).expect("score serializes");
    let object = value.as_object().expect("flat object");
    for field in [
        "authenticity_score",
        "clinical_match_score",
        "source_credibility",
        "temporal_relevance",
        "overall_score",
    ] {
        assert!(object[field].is_f64(), "{field} should be numeric");
    }
    assert!(object["flags"]
        .as_array()
        .expect("flags list")
        .iter()
        .all(|flag| flag.is_string()));
}
