//! Deterministic text embedding
//!
//! The similarity index treats embedding as a pluggable capability: anything
//! implementing [`TextEmbedder`] can back it. The default implementation
//! hashes character trigrams and words into a fixed-dimension normalized
//! vector. It is fully deterministic (no model weights, no sampling), which
//! the matching engine relies on for idempotent results.

use crate::vector::Vector;
use std::collections::HashSet;

/// Default embedding dimension
pub const DEFAULT_EMBEDDING_DIM: usize = 256;

/// A deterministic mapping from text to a fixed-dimension vector.
///
/// Implementations must be pure: identical input text must always produce
/// an identical vector.
pub trait TextEmbedder: Send + Sync {
    /// Dimension of every vector produced by this embedder
    fn dim(&self) -> usize;

    /// Embed a text string into a vector of exactly `dim()` components
    fn embed(&self, text: &str) -> Vector;
}

/// Hashing embedder over character trigrams and words.
///
/// Trigrams capture fuzzy lexical overlap, word hashes carry exact-term
/// signal at double weight. The output is L2-normalized.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dim: usize,
}

impl HashingEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIM)
    }
}

impl TextEmbedder for HashingEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn embed(&self, text: &str) -> Vector {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut components = vec![0.0f32; self.dim];
        let normalized = text.to_lowercase();
        if normalized.trim().is_empty() {
            return Vector::new(components);
        }

        for trigram in generate_trigrams(&normalized) {
            let mut hasher = DefaultHasher::new();
            trigram.hash(&mut hasher);
            let pos = (hasher.finish() as usize) % self.dim;
            components[pos] += 1.0;
        }

        for word in normalized.split_whitespace() {
            let mut hasher = DefaultHasher::new();
            word.hash(&mut hasher);
            let pos = (hasher.finish() as usize) % self.dim;
            components[pos] += 2.0; // Words contribute more
        }

        let mut vector = Vector::new(components);
        vector.normalize();
        vector
    }
}

/// Generate character trigrams from a string
fn generate_trigrams(s: &str) -> HashSet<String> {
    let padded = format!("  {}  ", s);
    let chars: Vec<char> = padded.chars().collect();

    if chars.len() < 3 {
        return HashSet::new();
    }

    chars
        .windows(3)
        .map(|w| w.iter().collect::<String>())
        .collect()
}
