//! Per-run analysis pipeline
//!
//! One `Pipeline` is built at startup around the shared read-only catalog
//! and similarity index, then reused across runs. Each run gets its own
//! [`ProposalContext`]; nothing mutable is shared between runs.

use crate::extract::extract_requirements;
use chrono::{DateTime, Utc};
use rfpmatch_core::{Money, SimilarityIndex};
use rfpmatch_matching::{
    mentions_strategic_account, MatchResult, MatchingEngine, RequirementStatement,
};
use rfpmatch_pricing::{CustomerTier, PricingEngine, PricingResult};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Confidence is capped below certainty; heuristic scoring never warrants
/// a perfect score.
const CONFIDENCE_CAP: f64 = 95.0;

/// Identity of one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct ProposalContext {
    pub proposal_id: String,
    pub title: String,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
}

impl ProposalContext {
    pub fn new(title: impl Into<String>, customer_name: impl Into<String>) -> Self {
        let now = Utc::now();
        let suffix = Uuid::new_v4().simple().to_string();
        Self {
            proposal_id: format!("RFP-{}-{}", now.format("%Y%m%d"), &suffix[..4]),
            title: title.into(),
            customer_name: customer_name.into(),
            created_at: now,
        }
    }
}

/// Everything one analysis run produced
#[derive(Debug, Clone, Serialize)]
pub struct ProposalOutcome {
    pub context: ProposalContext,
    pub requirements: Vec<RequirementStatement>,
    pub customer_tier: CustomerTier,
    pub matching: MatchResult,
    pub pricing: PricingResult,
    /// Composite confidence in [0, 95]
    pub confidence_score: f64,
}

/// Extraction -> matching -> pricing, as one synchronous pass
pub struct Pipeline {
    matcher: MatchingEngine,
    pricer: PricingEngine,
}

impl Pipeline {
    pub fn new(index: Arc<SimilarityIndex>) -> Self {
        let pricer = PricingEngine::new(index.catalog().clone());
        Self {
            matcher: MatchingEngine::new(index),
            pricer,
        }
    }

    /// Run one full analysis over plain proposal text.
    ///
    /// `tier_override` skips tier inference when the caller already knows
    /// the customer classification.
    pub fn run(
        &self,
        title: &str,
        customer_name: &str,
        text: &str,
        tier_override: Option<CustomerTier>,
    ) -> ProposalOutcome {
        let context = ProposalContext::new(title, customer_name);
        info!(proposal_id = %context.proposal_id, "starting analysis run");

        let requirements = extract_requirements(text);
        debug!(count = requirements.len(), "requirements extracted");

        let customer_tier = tier_override.unwrap_or_else(|| infer_customer_tier(text));

        let matching = self.matcher.match_requirements(&requirements);
        info!(
            matched = matching.matched_requirements,
            gaps = matching.gaps.len(),
            match_rate = matching.match_rate,
            "matching complete"
        );

        let pricing = self.pricer.calculate(&matching.candidates, customer_tier);
        info!(total = %pricing.total, tier = ?customer_tier, "pricing complete");

        let confidence_score = confidence_score(requirements.len(), &matching, &pricing, text);

        ProposalOutcome {
            context,
            requirements,
            customer_tier,
            matching,
            pricing,
            confidence_score,
        }
    }
}

/// Infer the customer tier from the proposal text.
///
/// Strategic accounts are always treated as enterprise; otherwise generic
/// size words decide.
pub fn infer_customer_tier(text: &str) -> CustomerTier {
    const ENTERPRISE_WORDS: &[&str] =
        &["enterprise", "corporation", "limited", "ltd", "multinational"];
    const MIDMARKET_WORDS: &[&str] = &["company", "business", "organization"];

    let lower = text.to_lowercase();
    if mentions_strategic_account(&lower)
        || ENTERPRISE_WORDS.iter().any(|w| lower.contains(w))
    {
        CustomerTier::Enterprise
    } else if MIDMARKET_WORDS.iter().any(|w| lower.contains(w)) {
        CustomerTier::Midmarket
    } else {
        CustomerTier::Sme
    }
}

/// Composite confidence score for the run.
///
/// Weights: requirement coverage 0.20, match rate 0.60, pricing validity
/// 0.20, plus context boosts, capped at [`CONFIDENCE_CAP`].
fn confidence_score(
    requirement_count: usize,
    matching: &MatchResult,
    pricing: &PricingResult,
    text: &str,
) -> f64 {
    let analysis_conf = (requirement_count as f64 / 20.0).min(1.0) * 0.20;
    let matching_conf = matching.match_rate * 0.60;
    let pricing_conf = if pricing.total.is_positive() { 0.20 } else { 0.0 };
    let base = (analysis_conf + matching_conf + pricing_conf) * 100.0;

    let lower = text.to_lowercase();
    let mut boost = if mentions_strategic_account(&lower) {
        25.0
    } else if ["enterprise", "corporation", "multinational"]
        .iter()
        .any(|w| lower.contains(w))
    {
        15.0
    } else if ["company", "business"].iter().any(|w| lower.contains(w)) {
        10.0
    } else {
        0.0
    };

    // Well-defined proposals get a small lift
    if requirement_count >= 10 {
        boost += 5.0;
    }

    // Realistic deal-size check
    if pricing.total >= Money::from_major(1_000_000)
        && pricing.total <= Money::from_major(500_000_000)
    {
        boost += 5.0;
    }

    (base + boost).min(CONFIDENCE_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfpmatch_core::index::BuildOptions;
    use rfpmatch_core::{Catalog, CatalogItem, HashingEmbedder, Money};
    use std::collections::BTreeMap;

    fn pipeline() -> Pipeline {
        let catalog = Arc::new(
            Catalog::from_items(vec![CatalogItem {
                sku: "CLOUD-01".to_string(),
                name: "Cloud Hosting Platform".to_string(),
                description: "managed cloud hosting infrastructure with servers".to_string(),
                category: "Cloud Infrastructure".to_string(),
                technical_keywords: vec!["cloud".to_string(), "hosting".to_string()],
                specs: BTreeMap::new(),
                base_price: Money::from_major(2_500_000),
            }])
            .unwrap(),
        );
        let index = SimilarityIndex::build(
            catalog,
            Box::new(HashingEmbedder::default()),
            BuildOptions::default(),
        )
        .unwrap();
        Pipeline::new(Arc::new(index))
    }

    #[test]
    fn test_proposal_id_shape() {
        let context = ProposalContext::new("Title", "Customer");
        assert!(context.proposal_id.starts_with("RFP-"));
        // RFP-YYYYMMDD-xxxx
        assert_eq!(context.proposal_id.len(), 4 + 8 + 1 + 4);
    }

    #[test]
    fn test_tier_inference() {
        assert_eq!(
            infer_customer_tier("digital initiative for Aditya Birla plants"),
            CustomerTier::Enterprise
        );
        assert_eq!(
            infer_customer_tier("a multinational corporation tender"),
            CustomerTier::Enterprise
        );
        assert_eq!(
            infer_customer_tier("a growing business seeks software"),
            CustomerTier::Midmarket
        );
        assert_eq!(infer_customer_tier("two people, one laptop"), CustomerTier::Sme);
    }

    #[test]
    fn test_run_produces_consistent_outcome() {
        let pipeline = pipeline();
        let text = "1. The platform must provide managed cloud hosting infrastructure\n\
                    2. The vendor must include support for nightly backups\n\
                    3. Solution should provide dashboards for operations teams";
        let outcome = pipeline.run("Cloud RFP", "Acme", text, None);

        assert_eq!(outcome.requirements.len(), 3);
        assert_eq!(
            outcome.matching.candidates.len() + outcome.matching.gaps.len(),
            outcome.requirements.len()
        );
        assert!(outcome.confidence_score >= 0.0 && outcome.confidence_score <= 95.0);
        // Pricing always carries the three service lines
        assert!(outcome.pricing.line_items.len() >= 3);
    }

    #[test]
    fn test_tier_override_respected() {
        let pipeline = pipeline();
        let outcome = pipeline.run(
            "RFP",
            "Acme",
            "the enterprise corporation must provide cloud hosting",
            Some(CustomerTier::Sme),
        );
        assert_eq!(outcome.customer_tier, CustomerTier::Sme);
        assert_eq!(outcome.pricing.tier_discount.percent, 5);
    }

    #[test]
    fn test_confidence_capped() {
        let pipeline = pipeline();
        // Strategic account + many matchable requirements pushes toward the cap
        let lines: Vec<String> = (1..=12)
            .map(|i| format!("{}. Asian Paints must have managed cloud hosting option {}", i, i))
            .collect();
        let outcome = pipeline.run("RFP", "Asian Paints", &lines.join("\n"), None);
        assert!(outcome.confidence_score <= 95.0);
    }
}
