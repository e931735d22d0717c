//! # rfpmatch Core
//!
//! Core library for the rfpmatch proposal engine.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`Money`] - Fixed-point monetary amounts (integer minor units)
//! - [`CatalogItem`] / [`Catalog`] - Read-only product catalog store
//! - [`TextEmbedder`] / [`HashingEmbedder`] - Deterministic text embedding
//! - [`SimilarityIndex`] - Nearest-neighbor lookup over catalog embeddings
//!
//! ## Example
//!
//! ```rust
//! use rfpmatch_core::{Catalog, CatalogItem, HashingEmbedder, Money, SimilarityIndex};
//! use rfpmatch_core::index::{BuildOptions, QueryOptions};
//! use std::sync::Arc;
//!
//! let items = vec![CatalogItem {
//!     sku: "CLOUD-01".to_string(),
//!     name: "Cloud Platform".to_string(),
//!     description: "Managed cloud infrastructure".to_string(),
//!     category: "Cloud Infrastructure".to_string(),
//!     technical_keywords: vec!["cloud".to_string(), "hosting".to_string()],
//!     specs: Default::default(),
//!     base_price: Money::from_major(2_500_000),
//! }];
//! let catalog = Arc::new(Catalog::from_items(items).unwrap());
//!
//! let index = SimilarityIndex::build(
//!     catalog,
//!     Box::new(HashingEmbedder::default()),
//!     BuildOptions::default(),
//! )
//! .unwrap();
//!
//! let hits = index.query("cloud hosting platform", 3, QueryOptions::default()).unwrap();
//! assert!(!hits.is_empty());
//! ```

pub mod catalog;
pub mod embedder;
pub mod error;
pub mod index;
pub mod money;
pub mod vector;

pub use catalog::{Catalog, CatalogItem};
pub use embedder::{HashingEmbedder, TextEmbedder, DEFAULT_EMBEDDING_DIM};
pub use error::{Error, Result};
pub use index::{BuildOptions, QueryOptions, ScoredHit, SimilarityIndex};
pub use money::Money;
pub use vector::Vector;
