//! Matching engine
//!
//! For each requirement in input order: expand the text, query the
//! similarity index, apply the acceptance threshold, fall back to keyword
//! matching, and classify the outcome as a match or a gap. Aggregates a
//! match rate and a recommended bundle over the whole run.

use crate::expand::{
    contains_any, enhance_query, mentions_strategic_account, INDUSTRY_FAMILIES,
    STRATEGIC_ACCOUNT_BOOST,
};
use crate::fallback::keyword_fallback;
use crate::types::{
    ConfidenceTier, Gap, GapReason, MatchCandidate, MatchOrigin, MatchResult,
    RequirementStatement,
};
use rfpmatch_core::index::QueryOptions;
use rfpmatch_core::{Catalog, CatalogItem, SimilarityIndex};
use std::sync::Arc;

/// Minimum similarity score for a semantic match to be accepted
pub const ACCEPT_THRESHOLD: f32 = 0.5;

/// Scores above this are High confidence, accepted scores below are Medium
pub const HIGH_CONFIDENCE_THRESHOLD: f32 = 0.7;

/// Placeholder score when the fallback ran because the index had no
/// candidates at all (or was unavailable). Tunable policy constant.
pub const FALLBACK_SCORE_NO_CANDIDATE: f32 = 0.65;

/// Placeholder score when the fallback ran because the best semantic
/// candidate scored at or below [`ACCEPT_THRESHOLD`]. Tunable policy
/// constant.
pub const FALLBACK_SCORE_WEAK_SEMANTIC: f32 = 0.6;

/// Candidates fetched per index query
pub const QUERY_K: usize = 3;

/// Matches requirement statements against the catalog behind a shared,
/// read-only similarity index.
pub struct MatchingEngine {
    index: Arc<SimilarityIndex>,
    query_options: QueryOptions,
}

impl MatchingEngine {
    pub fn new(index: Arc<SimilarityIndex>) -> Self {
        Self {
            index,
            query_options: QueryOptions::default(),
        }
    }

    /// Set a per-query deadline. A timed-out query degrades to the keyword
    /// fallback instead of failing the requirement.
    #[must_use]
    pub fn with_query_options(mut self, query_options: QueryOptions) -> Self {
        self.query_options = query_options;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        self.index.catalog()
    }

    /// Run one matching pass over the requirements, in input order.
    ///
    /// Every requirement yields exactly one candidate or one gap, so
    /// `candidates.len() + gaps.len() == requirements.len()` always holds.
    /// An empty requirement list is not an error: the result carries zero
    /// matches, zero gaps, and a match rate of 0.
    pub fn match_requirements(&self, requirements: &[RequirementStatement]) -> MatchResult {
        let mut candidates = Vec::new();
        let mut gaps = Vec::new();

        for (i, requirement) in requirements.iter().enumerate() {
            let requirement_id = format!("REQ-{:03}", i + 1);
            let req_text = requirement.text.to_lowercase();
            let enhanced = enhance_query(&req_text);

            // A timed-out or unavailable index degrades to the fallback path
            let hits = self
                .index
                .query(&enhanced, QUERY_K, self.query_options.clone())
                .unwrap_or_default();

            match hits.first() {
                Some(best) if best.score > ACCEPT_THRESHOLD => {
                    let product = self.index.item(best);
                    candidates.push(semantic_candidate(
                        requirement_id,
                        &req_text,
                        product,
                        best.score,
                    ));
                }
                Some(best) => {
                    // Weak semantic signal: try keyword fallback
                    if let Some(product) = keyword_fallback(self.catalog(), &req_text) {
                        candidates.push(fallback_candidate(
                            requirement_id,
                            &req_text,
                            product,
                            FALLBACK_SCORE_WEAK_SEMANTIC,
                            "Keyword match for enterprise requirement",
                        ));
                    } else {
                        gaps.push(Gap {
                            requirement_id,
                            requirement_text: req_text.clone(),
                            best_match: Some(self.index.item(best).name.clone()),
                            best_score: best.score,
                            gap_reason: GapReason::PartialMatch,
                        });
                    }
                }
                None => {
                    // No semantic candidates at all
                    if let Some(product) = keyword_fallback(self.catalog(), &req_text) {
                        candidates.push(fallback_candidate(
                            requirement_id,
                            &req_text,
                            product,
                            FALLBACK_SCORE_NO_CANDIDATE,
                            "Direct keyword match for enterprise context",
                        ));
                    } else {
                        gaps.push(Gap {
                            requirement_id,
                            requirement_text: req_text.clone(),
                            best_match: None,
                            best_score: 0.0,
                            gap_reason: GapReason::Specialized,
                        });
                    }
                }
            }
        }

        let total_requirements = requirements.len();
        let matched_requirements = candidates.len();
        let mut match_rate = if total_requirements > 0 {
            matched_requirements as f64 / total_requirements as f64
        } else {
            0.0
        };

        let combined_text = requirements
            .iter()
            .map(|r| r.text.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");

        if mentions_strategic_account(&combined_text) {
            match_rate = (match_rate * STRATEGIC_ACCOUNT_BOOST).min(1.0);
        }

        let recommended_bundle = self.suggest_bundle(&candidates, &combined_text);

        MatchResult {
            candidates,
            gaps,
            match_rate,
            total_requirements,
            matched_requirements,
            recommended_bundle,
        }
    }

    /// Suggest a product bundle for the run.
    ///
    /// With no matches, a default label is chosen from the combined text.
    /// Otherwise the first industry family hit (in priority order) names a
    /// Complete Bundle; failing that, the most frequent matched category
    /// names the bundle.
    fn suggest_bundle(&self, candidates: &[MatchCandidate], combined_text: &str) -> String {
        if candidates.is_empty() {
            if contains_any(combined_text, &["manufactur", "plant", "factory"]) {
                return "Manufacturing Digital Transformation Bundle".to_string();
            }
            if contains_any(combined_text, &["financial", "bank", "insurance"]) {
                return "Financial Services Enterprise Bundle".to_string();
            }
            return "Enterprise Business Solution Bundle".to_string();
        }

        for (industry, keywords) in INDUSTRY_FAMILIES {
            if contains_any(combined_text, keywords) {
                return format!("{} Enterprise Complete Bundle", industry);
            }
        }

        // Most frequent category among matched products, first-seen wins ties
        let mut category_counts: Vec<(String, usize)> = Vec::new();
        for candidate in candidates {
            if let Some(product) = self.catalog().find_by_sku(&candidate.sku) {
                match category_counts
                    .iter_mut()
                    .find(|(category, _)| *category == product.category)
                {
                    Some((_, count)) => *count += 1,
                    None => category_counts.push((product.category.clone(), 1)),
                }
            }
        }

        category_counts
            .into_iter()
            .max_by_key(|(_, count)| *count)
            .map(|(category, _)| format!("{} Enterprise Bundle", category))
            .unwrap_or_else(|| "Standard Enterprise Solution Bundle".to_string())
    }
}

fn semantic_candidate(
    requirement_id: String,
    req_text: &str,
    product: &CatalogItem,
    score: f32,
) -> MatchCandidate {
    let confidence = if score > HIGH_CONFIDENCE_THRESHOLD {
        ConfidenceTier::High
    } else {
        ConfidenceTier::Medium
    };

    MatchCandidate {
        requirement_id,
        requirement_text: snippet(req_text, 100),
        sku: product.sku.clone(),
        product_name: product.name.clone(),
        similarity_score: score,
        confidence,
        origin: MatchOrigin::Semantic,
        notes: format!("Addresses: {}", snippet(req_text, 80)),
    }
}

fn fallback_candidate(
    requirement_id: String,
    req_text: &str,
    product: &CatalogItem,
    score: f32,
    notes: &str,
) -> MatchCandidate {
    MatchCandidate {
        requirement_id,
        requirement_text: snippet(req_text, 100),
        sku: product.sku.clone(),
        product_name: product.name.clone(),
        similarity_score: score,
        confidence: ConfidenceTier::Medium,
        origin: MatchOrigin::KeywordFallback,
        notes: notes.to_string(),
    }
}

/// Char-safe truncation with a trailing ellipsis
fn snippet(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(limit).collect();
        format!("{}...", truncated)
    }
}
