use std::env;

use serde::{Deserialize, Serialize};

/// Weights applied when combining the four sub-scores. The defaults sum to
/// 1.0 and weight authenticity heaviest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub authenticity: f64,
    pub clinical_match: f64,
    pub source_credibility: f64,
    pub temporal_relevance: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            authenticity: 0.35,
            clinical_match: 0.30,
            source_credibility: 0.20,
            temporal_relevance: 0.15,
        }
    }
}

/// Decision thresholds, including the two hard filters that override the
/// weighted score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionThresholds {
    /// Minimum overall score for a reliable verdict.
    pub reliability: f64,
    /// Below this authenticity score the review is rejected outright.
    pub authenticity_floor: f64,
    /// Below this clinical-match score the review is rejected outright.
    pub clinical_match_floor: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            reliability: 0.6,
            authenticity_floor: 0.3,
            clinical_match_floor: 0.1,
        }
    }
}

/// Phrase and pattern lists driving the authenticity assessor. Swapping these
/// out supports locale or domain variants without touching assessor logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticityLexicon {
    /// Filler phrases common in template-generated text; matched as
    /// case-insensitive substrings.
    pub generic_phrases: Vec<String>,
    /// Regex patterns for list-like or essay-like structure markers.
    pub structure_patterns: Vec<String>,
    /// Boilerplate disclaimers rarely written by genuine reviewers.
    pub disclaimer_phrases: Vec<String>,
}

impl Default for AuthenticityLexicon {
    fn default() -> Self {
        Self {
            generic_phrases: vec![
                "i hope this helps".to_string(),
                "it's important to note".to_string(),
                "please consult with".to_string(),
                "everyone's experience may vary".to_string(),
                "results may differ".to_string(),
                "in my experience".to_string(),
                "from my perspective".to_string(),
                "it's worth mentioning".to_string(),
                "on the other hand".to_string(),
                "that being said".to_string(),
            ],
            structure_patterns: vec![
                r"\d+\.\s+\w+".to_string(),
                r"firstly|secondly|thirdly|finally".to_string(),
                r"in conclusion".to_string(),
                r"to summarize".to_string(),
                r"pros:.*cons:".to_string(),
                r"advantages:.*disadvantages:".to_string(),
            ],
            disclaimer_phrases: vec![
                "this is not medical advice".to_string(),
                "consult your doctor".to_string(),
                "speak with your healthcare provider".to_string(),
                "always follow your doctor's instructions".to_string(),
                "individual results may vary".to_string(),
            ],
        }
    }
}

/// Trial-independent vocabulary for the clinical-match assessor. The
/// trial-specific terms (therapy name, condition) are added by the detector
/// at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalVocabulary {
    /// Short tokens whose co-occurrence suggests a concrete dosage regimen.
    pub dosage_signal_terms: Vec<String>,
    pub dosage_terms: Vec<String>,
    pub side_effect_terms: Vec<String>,
    pub outcome_terms: Vec<String>,
}

impl Default for ClinicalVocabulary {
    fn default() -> Self {
        Self {
            dosage_signal_terms: vec![
                "mg".to_string(),
                "ml".to_string(),
                "twice".to_string(),
                "daily".to_string(),
                "morning".to_string(),
                "evening".to_string(),
            ],
            dosage_terms: vec![
                "mg".to_string(),
                "ml".to_string(),
                "dose".to_string(),
                "dosage".to_string(),
                "twice daily".to_string(),
                "once daily".to_string(),
                "morning".to_string(),
                "evening".to_string(),
                "with meals".to_string(),
                "before meals".to_string(),
            ],
            side_effect_terms: vec![
                "side effect".to_string(),
                "adverse reaction".to_string(),
                "nausea".to_string(),
                "headache".to_string(),
                "fatigue".to_string(),
                "dizziness".to_string(),
                "rash".to_string(),
                "stomach upset".to_string(),
            ],
            outcome_terms: vec![
                "improvement".to_string(),
                "better".to_string(),
                "worse".to_string(),
                "no change".to_string(),
                "effective".to_string(),
                "ineffective".to_string(),
                "helped".to_string(),
                "didn't help".to_string(),
                "relief".to_string(),
                "pain".to_string(),
            ],
        }
    }
}

/// Metadata heuristics for the source-credibility assessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredibilitySettings {
    /// Starting score before any adjustment; moderate credibility is assumed
    /// absent contrary evidence.
    pub base_score: f64,
    /// Substrings identifying known patient-community and medical platforms.
    pub credible_platforms: Vec<String>,
    pub ideal_length_min: usize,
    pub ideal_length_max: usize,
    pub short_length: usize,
    pub long_length: usize,
    /// Query strings longer than this are treated as tracking noise.
    pub max_query_length: usize,
}

impl Default for CredibilitySettings {
    fn default() -> Self {
        Self {
            base_score: 0.4,
            credible_platforms: vec![
                "patientslikeme".to_string(),
                "drugs.com".to_string(),
                "webmd".to_string(),
                "healthgrades".to_string(),
                "mayoclinic".to_string(),
                "reddit.com/r/".to_string(),
                "inspire.com".to_string(),
            ],
            ideal_length_min: 50,
            ideal_length_max: 500,
            short_length: 20,
            long_length: 1000,
            max_query_length: 50,
        }
    }
}

/// Complete tuning surface for one detector instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetectorConfig {
    pub weights: ScoreWeights,
    pub thresholds: DecisionThresholds,
    pub authenticity: AuthenticityLexicon,
    pub vocabulary: ClinicalVocabulary,
    pub credibility: CredibilitySettings,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {variable}: expected a number")]
    InvalidNumber { variable: &'static str, value: String },
}

impl DetectorConfig {
    /// Defaults overridden by `RELIABILITY_THRESHOLD`,
    /// `AUTHENTICITY_THRESHOLD`, and `CLINICAL_MATCH_THRESHOLD` when present
    /// in the environment or a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Some(threshold) = env_f64("RELIABILITY_THRESHOLD")? {
            config.thresholds.reliability = threshold;
        }
        if let Some(floor) = env_f64("AUTHENTICITY_THRESHOLD")? {
            config.thresholds.authenticity_floor = floor;
        }
        if let Some(floor) = env_f64("CLINICAL_MATCH_THRESHOLD")? {
            config.thresholds.clinical_match_floor = floor;
        }
        Ok(config)
    }
}

fn env_f64(variable: &'static str) -> Result<Option<f64>, ConfigError> {
    match env::var(variable) {
        Ok(value) => value
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { variable, value }),
        Err(_) => Ok(None),
    }
}
