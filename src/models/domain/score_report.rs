use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A resume scoring at or above this value clears the admission gate to the
/// (expensive, external) classification stage.
pub const COMPLIANCE_THRESHOLD: i16 = 70;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    pub fn from_score(score: i16) -> Self {
        if score >= 85 {
            ScoreTier::Excellent
        } else if score >= 70 {
            ScoreTier::Good
        } else if score >= 50 {
            ScoreTier::Fair
        } else {
            ScoreTier::Poor
        }
    }

    /// One-line assessment shown alongside the numeric score.
    pub fn summary(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent - Highly ATS-friendly",
            ScoreTier::Good => "Good - ATS-friendly with minor improvements possible",
            ScoreTier::Fair => "Fair - Needs improvement for better ATS compatibility",
            ScoreTier::Poor => "Poor - Major improvements needed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: i16,
    pub is_compliant: bool,
    pub tier: ScoreTier,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub details: BTreeMap<String, String>,
}

impl ScoreReport {
    /// Builds a report from the raw (possibly negative) check accumulator.
    /// The published score is clamped to 0..=100; compliance and tier are
    /// derived from the clamped value so the three fields can never disagree.
    pub fn from_accumulated(
        raw_score: i16,
        issues: Vec<String>,
        suggestions: Vec<String>,
        details: BTreeMap<String, String>,
    ) -> Self {
        let score = raw_score.clamp(0, 100);
        ScoreReport {
            score,
            is_compliant: score >= COMPLIANCE_THRESHOLD,
            tier: ScoreTier::from_score(score),
            issues,
            suggestions,
            details,
        }
    }
}
