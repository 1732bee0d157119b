use super::assessor::{Assessor, AssessorReport};
use super::config::CredibilitySettings;
use super::domain::ReviewMetadata;

/// Infers credibility entirely from account, platform, and URL metadata so
/// the signal stays orthogonal to the content-based assessors.
pub(crate) struct SourceCredibilityAssessor {
    settings: CredibilitySettings,
    credible_platforms: Vec<String>,
}

impl SourceCredibilityAssessor {
    pub(crate) fn new(settings: &CredibilitySettings) -> Self {
        Self {
            settings: settings.clone(),
            credible_platforms: settings
                .credible_platforms
                .iter()
                .map(|platform| platform.to_lowercase())
                .collect(),
        }
    }
}

impl Assessor for SourceCredibilityAssessor {
    fn flag_prefix(&self) -> Option<&'static str> {
        Some("Source: ")
    }

    fn assess(&self, _review_text: &str, metadata: &ReviewMetadata) -> AssessorReport {
        let mut flags = Vec::new();
        let mut adjustment = 0.0;

        if metadata.verified_user {
            flags.push("Verified user account".to_string());
            adjustment += 0.3;
        }

        if metadata.user_history_months > 12 {
            flags.push("Established user account".to_string());
            adjustment += 0.2;
        } else if metadata.user_history_months > 3 {
            flags.push("Moderate user history".to_string());
            adjustment += 0.1;
        }

        if let Some(platform) = &metadata.platform {
            let platform_lower = platform.to_lowercase();
            if self
                .credible_platforms
                .iter()
                .any(|known| platform_lower.contains(known.as_str()))
            {
                flags.push("Posted on credible medical platform".to_string());
                adjustment += 0.25;
            }
        }

        if (self.settings.ideal_length_min..=self.settings.ideal_length_max)
            .contains(&metadata.review_length)
        {
            flags.push("Appropriate review length".to_string());
            adjustment += 0.15;
        } else if metadata.review_length < self.settings.short_length {
            flags.push("Very short review (suspicious)".to_string());
            adjustment -= 0.2;
        } else if metadata.review_length > self.settings.long_length {
            flags.push("Very long review (potentially AI)".to_string());
            adjustment -= 0.1;
        }

        if query_segment(&metadata.source_url).len() > self.settings.max_query_length {
            flags.push("Complex URL parameters (suspicious)".to_string());
            adjustment -= 0.1;
        }

        AssessorReport {
            score: (self.settings.base_score + adjustment).clamp(0.0, 1.0),
            flags,
        }
    }
}

/// The URL segment between the first and second `?`, or empty when the URL
/// carries no query string.
fn query_segment(url: &str) -> &str {
    url.split('?').nth(1).unwrap_or("")
}
