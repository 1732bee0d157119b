//! Reliability screening for free-text medical treatment reviews.
//!
//! The crate binds a scoring engine to one clinical trial reference and then
//! classifies candidate reviews as reliable or unreliable using four
//! transparent heuristics: authenticity, clinical-criteria match, source
//! credibility, and temporal relevance. Collection of review text, persistence
//! of verdicts, and presentation are left to the embedding application.

pub mod detector;
pub mod telemetry;

pub use detector::{
    ClinicalTrialCriteria, DetectorConfig, DetectorError, ReliabilityScore,
    ReliableReviewDetector, ReviewMetadata, ReviewVerdict,
};
