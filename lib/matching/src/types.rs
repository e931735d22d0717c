//! Matching engine data types

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Priority of a requirement, assigned by the upstream extractor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    Mandatory,
    Desirable,
    Optional,
}

/// One free-text requirement statement, as produced by an upstream
/// collaborator (heuristic extraction, manual entry, or otherwise).
/// Ephemeral: created per analysis run, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequirementStatement {
    /// Non-empty, trimmed requirement text
    pub text: String,
    /// Best-effort source page, >= 1
    pub source_page: u32,
    pub priority: Priority,
    /// Free-form classification tag owned by the upstream collaborator
    pub category: String,
}

impl RequirementStatement {
    pub fn new(text: impl Into<String>, source_page: u32, priority: Priority) -> Self {
        Self {
            text: text.into().trim().to_string(),
            source_page: source_page.max(1),
            priority,
            category: "technical".to_string(),
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Confidence tier derived from the similarity score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
}

/// Which matcher produced a candidate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MatchOrigin {
    Semantic,
    KeywordFallback,
}

/// An accepted association between one requirement and one catalog item
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchCandidate {
    /// `REQ-{i:03}`, 1-based ordinal of the requirement
    pub requirement_id: String,
    /// Truncated requirement text for reporting
    pub requirement_text: String,
    pub sku: String,
    pub product_name: String,
    /// In [0, 1], higher is better. Fallback matches carry a fixed
    /// placeholder score.
    pub similarity_score: f32,
    pub confidence: ConfidenceTier,
    pub origin: MatchOrigin,
    pub notes: String,
}

/// Why a requirement produced no acceptable match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapReason {
    /// A semantic candidate existed but scored below the acceptance
    /// threshold and the keyword fallback also failed
    PartialMatch,
    /// No semantic candidate existed at all
    Specialized,
}

impl GapReason {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            GapReason::PartialMatch => "Partial match - consider custom solution",
            GapReason::Specialized => "Specialized requirement - may need customization",
        }
    }
}

impl fmt::Display for GapReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for GapReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// A requirement with no acceptable product match
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Gap {
    pub requirement_id: String,
    pub requirement_text: String,
    /// Best-scoring product name seen, if a semantic candidate existed
    pub best_match: Option<String>,
    /// Best semantic score observed, 0 if none
    pub best_score: f32,
    pub gap_reason: GapReason,
}

/// Full output of one matching run
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchResult {
    pub candidates: Vec<MatchCandidate>,
    pub gaps: Vec<Gap>,
    /// matched / total, with the strategic-account boost applied, in [0, 1]
    pub match_rate: f64,
    pub total_requirements: usize,
    pub matched_requirements: usize,
    pub recommended_bundle: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_trims_and_clamps_page() {
        let req = RequirementStatement::new("  must support SSO  ", 0, Priority::Mandatory);
        assert_eq!(req.text, "must support SSO");
        assert_eq!(req.source_page, 1);
        assert_eq!(req.category, "technical");
    }

    #[test]
    fn test_gap_reason_wording() {
        assert_eq!(
            GapReason::PartialMatch.to_string(),
            "Partial match - consider custom solution"
        );
        assert_eq!(
            GapReason::Specialized.to_string(),
            "Specialized requirement - may need customization"
        );
    }

    #[test]
    fn test_gap_reason_serializes_as_message() {
        let json = serde_json::to_string(&GapReason::Specialized).unwrap();
        assert!(json.contains("Specialized requirement"));
    }
}
