use regex::Regex;

use super::assessor::{compile_pattern, Assessor, AssessorReport};
use super::config::ClinicalVocabulary;
use super::domain::{ClinicalTrialCriteria, ReviewMetadata};
use super::DetectorError;

/// Matches review content against the bound trial protocol: an additive
/// checklist over expected vocabulary, clamped to 1.0.
///
/// Therapy-name matching is a literal case-insensitive substring check, so a
/// review using an abbreviation ("CBT" for "Cognitive Behavioral Therapy")
/// does not match and clinical relevance is understated. Known scoring gap,
/// kept deliberately: synonym expansion would change observable behavior.
pub(crate) struct ClinicalMatchAssessor {
    therapy_name: String,
    condition: Option<String>,
    duration_literals: Vec<String>,
    duration_patterns: Vec<Regex>,
    side_effects: Vec<String>,
    dosage_signal_terms: Vec<String>,
    terminology: Vec<String>,
}

impl ClinicalMatchAssessor {
    pub(crate) fn new(
        criteria: &ClinicalTrialCriteria,
        vocabulary: &ClinicalVocabulary,
    ) -> Result<Self, DetectorError> {
        let therapy_name = criteria.therapy_name.to_lowercase();
        let condition = criteria
            .condition_treated
            .as_ref()
            .map(|condition| condition.to_lowercase());

        let (duration_literals, duration_patterns) = match criteria.duration_weeks {
            Some(weeks) => (
                vec![format!("{weeks} week"), format!("{weeks} month")],
                vec![
                    compile_pattern(r"for \d+ weeks?")?,
                    compile_pattern(r"for \d+ months?")?,
                ],
            ),
            None => (Vec::new(), Vec::new()),
        };

        // Trial-specific terms join the configured vocabulary for the
        // terminology-density check; blank entries are dropped.
        let mut terminology = vec![therapy_name.clone()];
        terminology.extend(condition.clone());
        for list in [
            &vocabulary.dosage_terms,
            &vocabulary.side_effect_terms,
            &vocabulary.outcome_terms,
        ] {
            terminology.extend(list.iter().map(|term| term.to_lowercase()));
        }
        terminology.retain(|term| !term.is_empty());

        Ok(Self {
            therapy_name,
            condition,
            duration_literals,
            duration_patterns,
            side_effects: criteria
                .side_effects_mentioned
                .iter()
                .map(|effect| effect.to_lowercase())
                .collect(),
            dosage_signal_terms: vocabulary
                .dosage_signal_terms
                .iter()
                .map(|term| term.to_lowercase())
                .collect(),
            terminology,
        })
    }

    /// Literal "{N} week"/"{N} month" first, then the generic duration
    /// phrases, stopping at the first hit.
    fn mentions_duration(&self, text_lower: &str) -> bool {
        self.duration_literals
            .iter()
            .any(|literal| text_lower.contains(literal.as_str()))
            || self
                .duration_patterns
                .iter()
                .any(|pattern| pattern.is_match(text_lower))
    }
}

impl Assessor for ClinicalMatchAssessor {
    fn flag_prefix(&self) -> Option<&'static str> {
        Some("Clinical: ")
    }

    fn assess(&self, review_text: &str, _metadata: &ReviewMetadata) -> AssessorReport {
        let text_lower = review_text.to_lowercase();
        let mut flags = Vec::new();
        let mut score = 0.0;

        if text_lower.contains(self.therapy_name.as_str()) {
            flags.push("Therapy name mentioned".to_string());
            score += 0.3;
        }

        if let Some(condition) = &self.condition {
            if text_lower.contains(condition.as_str()) {
                flags.push("Condition mentioned".to_string());
                score += 0.2;
            }
        }

        if self.mentions_duration(&text_lower) {
            flags.push("Treatment duration mentioned".to_string());
            score += 0.2;
        }

        let dosage_mentions = self
            .dosage_signal_terms
            .iter()
            .filter(|term| text_lower.contains(term.as_str()))
            .count();
        if dosage_mentions >= 2 {
            flags.push("Dosage information provided".to_string());
            score += 0.15;
        }

        let side_effect_matches = self
            .side_effects
            .iter()
            .filter(|effect| text_lower.contains(effect.as_str()))
            .count();
        if side_effect_matches > 0 {
            flags.push(format!("Mentions {side_effect_matches} known side effects"));
            score += (side_effect_matches as f64 * 0.05).min(0.15);
        }

        let terminology_hits = self
            .terminology
            .iter()
            .filter(|term| text_lower.contains(term.as_str()))
            .count();
        if terminology_hits >= 3 {
            flags.push("Uses appropriate medical terminology".to_string());
            score += 0.1;
        }

        AssessorReport {
            score: score.min(1.0),
            flags,
        }
    }
}
