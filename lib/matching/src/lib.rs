//! # rfpmatch Matching
//!
//! Requirement-to-catalog matching engine.
//!
//! For each requirement statement the engine expands the text with domain
//! context tokens, queries the similarity index, applies an acceptance
//! threshold, and degrades to a deterministic keyword fallback when the
//! semantic signal is weak or absent. Every requirement yields exactly one
//! [`MatchCandidate`] or one [`Gap`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use rfpmatch_core::index::BuildOptions;
//! use rfpmatch_core::{Catalog, HashingEmbedder, SimilarityIndex};
//! use rfpmatch_matching::{MatchingEngine, Priority, RequirementStatement};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load("data/product_catalog.json").unwrap());
//! let index = SimilarityIndex::build(
//!     catalog,
//!     Box::new(HashingEmbedder::default()),
//!     BuildOptions::default(),
//! )
//! .unwrap();
//!
//! let engine = MatchingEngine::new(Arc::new(index));
//! let requirements = vec![RequirementStatement::new(
//!     "must support cloud hosting with high availability",
//!     1,
//!     Priority::Mandatory,
//! )];
//! let result = engine.match_requirements(&requirements);
//! println!("match rate: {}", result.match_rate);
//! ```

pub mod engine;
pub mod expand;
pub mod fallback;
pub mod types;

pub use engine::{
    MatchingEngine, ACCEPT_THRESHOLD, FALLBACK_SCORE_NO_CANDIDATE, FALLBACK_SCORE_WEAK_SEMANTIC,
    HIGH_CONFIDENCE_THRESHOLD, QUERY_K,
};
pub use expand::{
    enhance_query, mentions_strategic_account, KEYWORD_EXPANSIONS, STRATEGIC_ACCOUNTS,
    STRATEGIC_ACCOUNT_BOOST,
};
pub use fallback::keyword_fallback;
pub use types::{
    ConfidenceTier, Gap, GapReason, MatchCandidate, MatchOrigin, MatchResult, Priority,
    RequirementStatement,
};
