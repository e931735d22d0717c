//! # rfpmatch
//!
//! A requirement-to-catalog matching and quotation engine for B2B proposal
//! automation.
//!
//! rfpmatch turns heterogeneous, unstructured requirement text into a ranked
//! set of catalog matches with a confidence signal, a deterministic keyword
//! fallback when semantic search is inconclusive, and an exact fixed-point
//! pricing roll-up over the matched set.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rfpmatch::prelude::*;
//! use std::sync::Arc;
//!
//! // Load the catalog once at startup
//! let catalog = Arc::new(Catalog::load("data/product_catalog.json").unwrap());
//!
//! // Build the similarity index once; share it read-only across runs
//! let index = SimilarityIndex::build(
//!     catalog,
//!     Box::new(HashingEmbedder::default()),
//!     BuildOptions::default(),
//! )
//! .unwrap();
//!
//! let pipeline = Pipeline::new(Arc::new(index));
//! let outcome = pipeline.run(
//!     "Plant Modernization RFP",
//!     "Acme Manufacturing",
//!     "1. The system must track production on the plant floor\n\
//!      2. Provide cloud hosting with high availability",
//!     None,
//! );
//! println!("match rate: {}", outcome.matching.match_rate);
//! println!("quoted total: {}", outcome.pricing.total);
//! ```
//!
//! ## Crate Structure
//!
//! rfpmatch is composed of several crates:
//!
//! - [`rfpmatch-core`](https://docs.rs/rfpmatch-core) - Catalog store, fixed-point money,
//!   deterministic embeddings, similarity index
//! - [`rfpmatch-matching`](https://docs.rs/rfpmatch-matching) - Matching engine, lexical
//!   expansion, keyword fallback, gap analysis
//! - [`rfpmatch-pricing`](https://docs.rs/rfpmatch-pricing) - Volume/tier discounts and the
//!   quotation roll-up
//!
//! This crate adds requirement extraction and the per-run pipeline on top,
//! plus the `rfpmatch` CLI binary.

pub mod extract;
pub mod pipeline;

// Re-export core types
pub use rfpmatch_core::{
    Catalog, CatalogItem, Error, HashingEmbedder, Money, Result, ScoredHit, SimilarityIndex,
    TextEmbedder, Vector,
};
pub use rfpmatch_core::index::{BuildOptions, QueryOptions};

// Re-export matching
pub use rfpmatch_matching::{
    ConfidenceTier, Gap, GapReason, MatchCandidate, MatchOrigin, MatchResult, MatchingEngine,
    Priority, RequirementStatement,
};

// Re-export pricing
pub use rfpmatch_pricing::{
    CustomerTier, PriceLineItem, PricingEngine, PricingResult, PricingRules,
};

pub use extract::extract_requirements;
pub use pipeline::{infer_customer_tier, Pipeline, ProposalContext, ProposalOutcome};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BuildOptions, Catalog, CatalogItem, ConfidenceTier, CustomerTier, Error, Gap, GapReason,
        HashingEmbedder, MatchCandidate, MatchOrigin, MatchResult, MatchingEngine, Money,
        Pipeline, PriceLineItem, PricingEngine, PricingResult, PricingRules, Priority,
        ProposalContext, ProposalOutcome, QueryOptions, RequirementStatement, Result, ScoredHit,
        SimilarityIndex, TextEmbedder, Vector,
    };
}
