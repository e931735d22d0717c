//! Similarity index over the catalog
//!
//! Every catalog item is embedded once at construction time (the one
//! expensive, blocking step), then queries run a linear nearest-neighbor
//! scan by squared L2 distance. Construction happens once at startup; the
//! built index is immutable and safe to share across concurrent analysis
//! runs behind an `Arc`.

use crate::catalog::{Catalog, CatalogItem};
use crate::embedder::TextEmbedder;
use crate::error::{Error, Result};
use crate::vector::Vector;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Options for index construction
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Upper bound on total construction time. Exceeding it surfaces
    /// [`Error::BuildTimeout`], which is retryable.
    pub timeout: Option<Duration>,
}

/// Options for a single query
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Upper bound on a single query. Exceeding it surfaces
    /// [`Error::QueryTimeout`], which is retryable.
    pub timeout: Option<Duration>,
}

/// One nearest-neighbor hit
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredHit {
    /// Position of the item in catalog load order
    pub item_index: usize,
    /// Squared L2 distance between query and item embeddings
    pub distance: f32,
    /// Similarity score `1 / (1 + distance)`, in (0, 1]
    pub score: f32,
}

/// Nearest-neighbor index over catalog item embeddings
pub struct SimilarityIndex {
    catalog: Arc<Catalog>,
    embedder: Box<dyn TextEmbedder>,
    vectors: Vec<Vector>,
}

impl std::fmt::Debug for SimilarityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityIndex")
            .field("catalog", &self.catalog)
            .field("vectors", &self.vectors)
            .finish_non_exhaustive()
    }
}

impl SimilarityIndex {
    /// Embed every catalog item and build the index.
    ///
    /// O(catalog size), one-time cost. An empty catalog builds an empty
    /// index; queries against it return no hits rather than erroring.
    pub fn build(
        catalog: Arc<Catalog>,
        embedder: Box<dyn TextEmbedder>,
        options: BuildOptions,
    ) -> Result<SimilarityIndex> {
        let started = Instant::now();
        let mut vectors = Vec::with_capacity(catalog.len());

        for (indexed, item) in catalog.items().iter().enumerate() {
            if let Some(limit) = options.timeout {
                if started.elapsed() > limit {
                    return Err(Error::BuildTimeout {
                        limit_ms: limit.as_millis() as u64,
                        indexed,
                    });
                }
            }
            vectors.push(embedder.embed(&item.embedding_text()));
        }

        Ok(SimilarityIndex {
            catalog,
            embedder,
            vectors,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Resolve a hit back to its catalog item
    #[must_use]
    pub fn item(&self, hit: &ScoredHit) -> &CatalogItem {
        &self.catalog.items()[hit.item_index]
    }

    /// Find the `k` nearest catalog entries to `text`.
    ///
    /// The query is embedded with the same embedder used at build time, so
    /// identical text against an unchanged index always yields identical
    /// ranked results. Ties are broken by catalog load order.
    pub fn query(&self, text: &str, k: usize, options: QueryOptions) -> Result<Vec<ScoredHit>> {
        if self.vectors.is_empty() || k == 0 {
            return Ok(Vec::new());
        }

        let started = Instant::now();
        let query = self.embedder.embed(text);

        let hits = self.search(&query, k);

        if let Some(limit) = options.timeout {
            if started.elapsed() > limit {
                return Err(Error::QueryTimeout {
                    limit_ms: limit.as_millis() as u64,
                });
            }
        }

        Ok(hits)
    }

    /// Raw nearest-neighbor search over a pre-embedded query vector
    #[must_use]
    pub fn search(&self, query: &Vector, k: usize) -> Vec<ScoredHit> {
        let mut hits: Vec<ScoredHit> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(item_index, vector)| {
                let distance = query.l2_squared(vector);
                ScoredHit {
                    item_index,
                    distance,
                    score: 1.0 / (1.0 + distance),
                }
            })
            .collect();

        // Stable sort keeps load order for equal distances
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits.truncate(k);
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedder::HashingEmbedder;
    use crate::money::Money;
    use std::collections::BTreeMap;

    fn test_catalog() -> Arc<Catalog> {
        let items = vec![
            item("CLOUD-01", "Cloud Platform", "managed cloud hosting infrastructure"),
            item("MES-01", "Manufacturing Execution System", "plant floor production tracking"),
            item("SEC-01", "Security Suite", "encryption authentication compliance"),
        ];
        Arc::new(Catalog::from_items(items).unwrap())
    }

    fn item(sku: &str, name: &str, description: &str) -> CatalogItem {
        CatalogItem {
            sku: sku.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: "Enterprise Software".to_string(),
            technical_keywords: Vec::new(),
            specs: BTreeMap::new(),
            base_price: Money::from_major(100_000),
        }
    }

    fn build_index(catalog: Arc<Catalog>) -> SimilarityIndex {
        SimilarityIndex::build(
            catalog,
            Box::new(HashingEmbedder::default()),
            BuildOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_query_ranks_relevant_item_first() {
        let index = build_index(test_catalog());
        let hits = index
            .query("cloud hosting infrastructure platform", 3, QueryOptions::default())
            .unwrap();

        assert_eq!(hits.len(), 3);
        assert_eq!(index.item(&hits[0]).sku, "CLOUD-01");
        // Ascending distance, descending score
        assert!(hits[0].distance <= hits[1].distance);
        assert!(hits[0].score >= hits[1].score);
    }

    #[test]
    fn test_scores_bounded() {
        let index = build_index(test_catalog());
        let hits = index.query("anything at all", 3, QueryOptions::default()).unwrap();
        for hit in hits {
            assert!(hit.score > 0.0 && hit.score <= 1.0);
        }
    }

    #[test]
    fn test_empty_catalog_returns_empty_not_error() {
        let catalog = Arc::new(Catalog::from_items(Vec::new()).unwrap());
        let index = build_index(catalog);
        let hits = index.query("cloud", 3, QueryOptions::default()).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_query_is_deterministic() {
        let index = build_index(test_catalog());
        let a = index.query("production tracking", 3, QueryOptions::default()).unwrap();
        let b = index.query("production tracking", 3, QueryOptions::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_timeout_is_retryable() {
        let err = SimilarityIndex::build(
            test_catalog(),
            Box::new(HashingEmbedder::default()),
            BuildOptions {
                timeout: Some(Duration::ZERO),
            },
        )
        .unwrap_err();

        assert!(matches!(err, Error::BuildTimeout { .. }));
        assert!(err.is_retryable());
    }
}
