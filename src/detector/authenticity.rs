use regex::Regex;

use super::assessor::{compile_pattern, Assessor, AssessorReport};
use super::config::AuthenticityLexicon;
use super::domain::ReviewMetadata;
use super::DetectorError;

/// Flags template-like phrasing patterns; each triggered heuristic costs a
/// quarter point. Deliberately over-inclusive: verbose but genuine writers
/// can trip it, and that trade-off is accepted.
pub(crate) struct AuthenticityAssessor {
    generic_phrases: Vec<String>,
    structure_patterns: Vec<Regex>,
    disclaimer_phrases: Vec<String>,
    sentence_split: Regex,
}

impl AuthenticityAssessor {
    pub(crate) fn from_lexicon(lexicon: &AuthenticityLexicon) -> Result<Self, DetectorError> {
        let structure_patterns = lexicon
            .structure_patterns
            .iter()
            .map(|pattern| compile_pattern(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            generic_phrases: lowercase_all(&lexicon.generic_phrases),
            structure_patterns,
            disclaimer_phrases: lowercase_all(&lexicon.disclaimer_phrases),
            sentence_split: compile_pattern(r"[.!?]+")?,
        })
    }

    /// Sample standard deviation of per-sentence word counts, or `None` when
    /// the text is too short to measure: three or fewer raw sentence splits,
    /// or fewer than two non-blank sentences.
    fn sentence_length_deviation(&self, text: &str) -> Option<f64> {
        let pieces: Vec<&str> = self.sentence_split.split(text).collect();
        if pieces.len() <= 3 {
            return None;
        }

        let lengths: Vec<f64> = pieces
            .iter()
            .filter(|piece| !piece.trim().is_empty())
            .map(|piece| piece.split_whitespace().count() as f64)
            .collect();
        if lengths.len() < 2 {
            return None;
        }

        let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
        let variance = lengths
            .iter()
            .map(|length| (length - mean).powi(2))
            .sum::<f64>()
            / (lengths.len() - 1) as f64;
        Some(variance.sqrt())
    }
}

impl Assessor for AuthenticityAssessor {
    fn flag_prefix(&self) -> Option<&'static str> {
        None
    }

    fn assess(&self, review_text: &str, _metadata: &ReviewMetadata) -> AssessorReport {
        let mut flags = Vec::new();
        let text_lower = review_text.to_lowercase();

        let generic_count = self
            .generic_phrases
            .iter()
            .filter(|phrase| text_lower.contains(phrase.as_str()))
            .count();
        if generic_count >= 2 {
            flags.push(format!("Contains {generic_count} generic AI phrases"));
        }

        let structure_matches = self
            .structure_patterns
            .iter()
            .filter(|pattern| pattern.is_match(&text_lower))
            .count();
        if structure_matches >= 2 {
            flags.push("Overly structured content".to_string());
        }

        let disclaimer_count = self
            .disclaimer_phrases
            .iter()
            .filter(|disclaimer| text_lower.contains(disclaimer.as_str()))
            .count();
        if disclaimer_count >= 1 {
            flags.push("Contains medical disclaimers".to_string());
        }

        if let Some(deviation) = self.sentence_length_deviation(review_text) {
            if deviation < 2.0 {
                flags.push("Repetitive sentence structure".to_string());
            }
        }

        let score = (1.0 - flags.len() as f64 * 0.25).max(0.0);
        AssessorReport { score, flags }
    }
}

fn lowercase_all(phrases: &[String]) -> Vec<String> {
    phrases.iter().map(|phrase| phrase.to_lowercase()).collect()
}
