//! In-memory vector index implementation
//!
//! Keeps concepts in memory, grouped by category. Records can be inserted
//! programmatically or loaded from a JSON snapshot; nothing is written back
//! unless [`InMemoryVectorIndex::save_snapshot`] is called.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use cex_application::ports::registry::{
    VECTOR_SEARCHERS, VectorSearcherConfig, VectorSearcherEntry,
};
use cex_domain::constants::CONCEPTS_CATEGORY;
use cex_domain::error::{Error, Result};
use cex_domain::ports::VectorSearcher;
use cex_domain::value_objects::{Kind, VectorSearchResult};

use crate::constants::IN_MEMORY_DEFAULT_LIMIT;

/// One concept stored in the index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedConcept {
    /// Identifier of the concept
    pub id: Uuid,
    /// Category of the concept
    pub kind: Kind,
    /// Class of the concept
    pub class_name: String,
    /// Embedding of the concept
    pub vector: Vec<f32>,
}

impl IndexedConcept {
    /// Create a new indexed concept
    pub fn new(id: Uuid, kind: Kind, class_name: impl Into<String>, vector: Vec<f32>) -> Self {
        Self {
            id,
            kind,
            class_name: class_name.into(),
            vector,
        }
    }
}

/// Snapshot file record
#[derive(Serialize, Deserialize)]
struct SnapshotRecord {
    #[serde(default = "default_category")]
    category: String,
    #[serde(flatten)]
    concept: IndexedConcept,
}

fn default_category() -> String {
    CONCEPTS_CATEGORY.to_string()
}

/// In-memory vector index
///
/// Stores concepts in a concurrent hash map keyed by category. Search is a
/// linear scan with cosine similarity and a bounded heap.
pub struct InMemoryVectorIndex {
    categories: Arc<DashMap<String, Vec<IndexedConcept>>>,
    default_limit: usize,
}

impl InMemoryVectorIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::with_default_limit(IN_MEMORY_DEFAULT_LIMIT)
    }

    /// Create an empty index returning `default_limit` results when asked for 0
    pub fn with_default_limit(default_limit: usize) -> Self {
        Self {
            categories: Arc::new(DashMap::new()),
            default_limit,
        }
    }

    /// Add a concept to `category`
    pub fn insert(&self, category: &str, concept: IndexedConcept) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .push(concept);
    }

    /// Number of concepts stored in `category`
    pub fn len(&self, category: &str) -> usize {
        self.categories.get(category).map_or(0, |c| c.len())
    }

    /// Whether `category` holds no concepts
    pub fn is_empty(&self, category: &str) -> bool {
        self.len(category) == 0
    }

    /// Load every record of a JSON snapshot into the index
    ///
    /// The snapshot is an array of concepts; records without a `category`
    /// field go to `"concepts"`. Returns the number of records loaded.
    pub fn load_snapshot(&self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io_with_source(
                format!("failed to read snapshot {}", path.display()),
                e,
            )
        })?;
        let records: Vec<SnapshotRecord> = serde_json::from_str(&content)?;
        let count = records.len();
        for record in records {
            self.insert(&record.category, record.concept);
        }
        debug!(path = %path.display(), count, "loaded vector index snapshot");
        Ok(count)
    }

    /// Write every stored concept to a JSON snapshot
    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        let records: Vec<SnapshotRecord> = self
            .categories
            .iter()
            .flat_map(|entry| {
                let category = entry.key().clone();
                entry
                    .value()
                    .iter()
                    .map(|concept| SnapshotRecord {
                        category: category.clone(),
                        concept: concept.clone(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        let content = serde_json::to_string_pretty(&records)?;
        std::fs::write(path, content).map_err(|e| {
            Error::io_with_source(
                format!("failed to write snapshot {}", path.display()),
                e,
            )
        })
    }
}

impl Default for InMemoryVectorIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorSearcher for InMemoryVectorIndex {
    async fn vector_search(
        &self,
        category: &str,
        vector: &[f32],
        limit: usize,
    ) -> Result<Vec<VectorSearchResult>> {
        // Return empty results for unknown categories (graceful degradation)
        let Some(concepts) = self.categories.get(category) else {
            return Ok(Vec::new());
        };

        let limit = if limit == 0 { self.default_limit } else { limit };
        let query_norm = compute_norm(vector);

        // Use min-heap for top-k selection: O(n log k) instead of O(n log n)
        let mut heap: BinaryHeap<ScoredItem> =
            BinaryHeap::with_capacity(limit.min(concepts.len()).saturating_add(1));

        for (index, concept) in concepts.iter().enumerate() {
            if concept.vector.len() != vector.len() {
                return Err(Error::vector_db(format!(
                    "query has {} dimensions but concept {} has {}",
                    vector.len(),
                    concept.id,
                    concept.vector.len()
                )));
            }
            let score = cosine_similarity_with_norm(vector, &concept.vector, query_norm);

            if heap.len() < limit {
                heap.push(ScoredItem { score, index });
            } else if heap.peek().is_some_and(|min| score > min.score) {
                heap.pop();
                heap.push(ScoredItem { score, index });
            }
        }

        // Extract results in descending score order
        let mut items: Vec<_> = heap.into_vec();
        items.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        Ok(items
            .into_iter()
            .map(|item| {
                let concept = &concepts[item.index];
                VectorSearchResult::new(concept.id, concept.kind, &concept.class_name, item.score)
                    .with_vector(concept.vector.clone())
            })
            .collect())
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}

/// Scored item for heap-based top-k selection
///
/// Uses reverse ordering so `BinaryHeap` acts as a min-heap (smallest scores at top).
#[derive(PartialEq)]
struct ScoredItem {
    score: f32,
    index: usize,
}

impl Eq for ScoredItem {}

impl Ord for ScoredItem {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for ScoredItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the L2 norm of a vector
fn compute_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity with precomputed query norm, normalised to [0, 1]
fn cosine_similarity_with_norm(a: &[f32], b: &[f32], norm_a: f32) -> f32 {
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_b = compute_norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot_product / (norm_a * norm_b) + 1.0) / 2.0
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

/// Factory function for creating in-memory index instances.
fn in_memory_factory(
    config: &VectorSearcherConfig,
) -> std::result::Result<Arc<dyn VectorSearcher>, String> {
    let index = InMemoryVectorIndex::with_default_limit(
        config.default_limit.unwrap_or(IN_MEMORY_DEFAULT_LIMIT),
    );
    if let Some(path) = &config.snapshot_path {
        index.load_snapshot(path).map_err(|e| e.to_string())?;
    }
    Ok(Arc::new(index))
}

#[linkme::distributed_slice(VECTOR_SEARCHERS)]
static IN_MEMORY_INDEX: VectorSearcherEntry = VectorSearcherEntry {
    name: "in_memory",
    description: "In-memory vector index (cosine similarity, optional JSON snapshot)",
    factory: in_memory_factory,
};
